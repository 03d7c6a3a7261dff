//! Scenario files: spot layout, arrival order, optional policy overrides
//!
//! ```toml
//! spots = ["car", "car", "large", "motorcycle"]
//! vehicles = ["car", "van", "motorcycle"]
//!
//! [policy]
//! van = [{ size = "large", count = 1 }, { size = "car", count = 3 }]
//! ```

use std::path::Path;

use parking_domain::model::{SpotSize, Vehicle, VehicleCategory};
use parking_domain::service::{AllocationPolicy, AllocationStep, Facility};
use parking_types::{Error, Result};
use serde::Deserialize;

/// Per-category chain replacements. Categories left out keep the standard chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyOverrides {
    #[serde(default)]
    pub motorcycle: Option<Vec<AllocationStep>>,
    #[serde(default)]
    pub car: Option<Vec<AllocationStep>>,
    #[serde(default)]
    pub van: Option<Vec<AllocationStep>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub spots: Vec<SpotSize>,
    #[serde(default)]
    pub vehicles: Vec<VehicleCategory>,
    #[serde(default)]
    pub policy: PolicyOverrides,
}

impl Scenario {
    /// Ten spots and five arrivals: car, van, motorcycle, van, car
    pub fn reference() -> Self {
        use SpotSize::{Car, Large, Motorcycle};

        Self {
            spots: vec![Car, Car, Large, Car, Car, Car, Car, Car, Car, Motorcycle],
            vehicles: vec![
                VehicleCategory::Car,
                VehicleCategory::Van,
                VehicleCategory::Motorcycle,
                VehicleCategory::Van,
                VehicleCategory::Car,
            ],
            policy: PolicyOverrides::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        // surface policy mistakes at load time rather than mid-run
        scenario.policy()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load `path`, or the built-in reference scenario when there is none
    pub fn load_or_reference(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::reference()),
        }
    }

    pub fn policy(&self) -> Result<AllocationPolicy> {
        let overrides = [
            (VehicleCategory::Motorcycle, &self.policy.motorcycle),
            (VehicleCategory::Car, &self.policy.car),
            (VehicleCategory::Van, &self.policy.van),
        ];
        let mut policy = AllocationPolicy::standard();
        for (category, steps) in overrides {
            if let Some(steps) = steps {
                policy = policy
                    .with_chain(category, steps.clone())
                    .map_err(|e| Error::InvalidScenario(e.to_string()))?;
            }
        }
        Ok(policy)
    }

    pub fn build_facility(&self) -> Result<Facility> {
        Ok(Facility::with_policy(self.spots.iter().copied(), self.policy()?))
    }

    pub fn arrivals(&self) -> Vec<Vehicle> {
        self.vehicles.iter().copied().map(Vehicle::new).collect()
    }
}
