//! Vehicle type definitions

use serde::{Deserialize, Serialize};

use super::ParseKindError;

/// Vehicle category. Vans need a large spot, or three car spots side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Motorcycle,
    Car,
    Van,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Motorcycle,
        VehicleCategory::Car,
        VehicleCategory::Van,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Motorcycle => "motorcycle",
            VehicleCategory::Car => "car",
            VehicleCategory::Van => "van",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for VehicleCategory {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "motorcycle" | "moto" => Ok(VehicleCategory::Motorcycle),
            "car" => Ok(VehicleCategory::Car),
            "van" => Ok(VehicleCategory::Van),
            _ => Err(ParseKindError {
                kind: "vehicle category",
                value: s.to_string(),
            }),
        }
    }
}

/// A vehicle arriving at the facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vehicle {
    category: VehicleCategory,
}

impl Vehicle {
    pub fn new(category: VehicleCategory) -> Self {
        Self { category }
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }
}

impl From<VehicleCategory> for Vehicle {
    fn from(category: VehicleCategory) -> Self {
        Self::new(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("VAN".parse::<VehicleCategory>(), Ok(VehicleCategory::Van));
        assert_eq!("car".parse::<VehicleCategory>(), Ok(VehicleCategory::Car));
        assert!("large".parse::<VehicleCategory>().is_err());
    }

    #[test]
    fn test_vehicle_deserializes_from_category_name() {
        let vehicles: Vec<Vehicle> = serde_json::from_str(r#"["car", "van"]"#).unwrap();
        assert_eq!(vehicles[0].category(), VehicleCategory::Car);
        assert_eq!(vehicles[1].category(), VehicleCategory::Van);
    }
}
