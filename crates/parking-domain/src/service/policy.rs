//! Allocation policy: which spots each vehicle category may take, in order of preference

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{SpotSize, VehicleCategory};

/// One link of a fallback chain: `count` free spots of `size`, all or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationStep {
    pub size: SpotSize,
    pub count: usize,
}

impl AllocationStep {
    pub const fn single(size: SpotSize) -> Self {
        Self { size, count: 1 }
    }

    pub const fn multiple(size: SpotSize, count: usize) -> Self {
        Self { size, count }
    }
}

const MOTORCYCLE_CHAIN: [AllocationStep; 3] = [
    AllocationStep::single(SpotSize::Motorcycle),
    AllocationStep::single(SpotSize::Car),
    AllocationStep::single(SpotSize::Large),
];

const CAR_CHAIN: [AllocationStep; 2] = [
    AllocationStep::single(SpotSize::Car),
    AllocationStep::single(SpotSize::Large),
];

const VAN_CHAIN: [AllocationStep; 2] = [
    AllocationStep::single(SpotSize::Large),
    AllocationStep::multiple(SpotSize::Car, 3),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("{category} step {index} requires zero spots")]
    ZeroCount {
        category: VehicleCategory,
        index: usize,
    },
}

/// Fallback chain per vehicle category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationPolicy {
    motorcycle: Vec<AllocationStep>,
    car: Vec<AllocationStep>,
    van: Vec<AllocationStep>,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl AllocationPolicy {
    /// Motorcycle: motorcycle, car, large. Car: car, large. Van: large, then three car spots.
    pub fn standard() -> Self {
        Self {
            motorcycle: MOTORCYCLE_CHAIN.to_vec(),
            car: CAR_CHAIN.to_vec(),
            van: VAN_CHAIN.to_vec(),
        }
    }

    pub fn chain(&self, category: VehicleCategory) -> &[AllocationStep] {
        match category {
            VehicleCategory::Motorcycle => &self.motorcycle,
            VehicleCategory::Car => &self.car,
            VehicleCategory::Van => &self.van,
        }
    }

    /// Replace the chain for one category. An empty chain means the category is never placed.
    pub fn with_chain(
        mut self,
        category: VehicleCategory,
        steps: Vec<AllocationStep>,
    ) -> Result<Self, PolicyError> {
        if let Some(index) = steps.iter().position(|step| step.count == 0) {
            return Err(PolicyError::ZeroCount { category, index });
        }
        match category {
            VehicleCategory::Motorcycle => self.motorcycle = steps,
            VehicleCategory::Car => self.car = steps,
            VehicleCategory::Van => self.van = steps,
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chains() {
        let policy = AllocationPolicy::standard();
        let sizes = |c| -> Vec<(SpotSize, usize)> {
            policy.chain(c).iter().map(|s| (s.size, s.count)).collect()
        };
        assert_eq!(
            sizes(VehicleCategory::Motorcycle),
            vec![(SpotSize::Motorcycle, 1), (SpotSize::Car, 1), (SpotSize::Large, 1)]
        );
        assert_eq!(
            sizes(VehicleCategory::Car),
            vec![(SpotSize::Car, 1), (SpotSize::Large, 1)]
        );
        assert_eq!(
            sizes(VehicleCategory::Van),
            vec![(SpotSize::Large, 1), (SpotSize::Car, 3)]
        );
    }

    #[test]
    fn test_with_chain_replaces_one_category() {
        let policy = AllocationPolicy::standard()
            .with_chain(VehicleCategory::Car, vec![AllocationStep::single(SpotSize::Large)])
            .unwrap();
        assert_eq!(policy.chain(VehicleCategory::Car).len(), 1);
        assert_eq!(policy.chain(VehicleCategory::Van), &VAN_CHAIN);
    }

    #[test]
    fn test_with_chain_rejects_zero_count() {
        let err = AllocationPolicy::standard()
            .with_chain(
                VehicleCategory::Van,
                vec![
                    AllocationStep::single(SpotSize::Large),
                    AllocationStep::multiple(SpotSize::Car, 0),
                ],
            )
            .unwrap_err();
        assert_eq!(
            err,
            PolicyError::ZeroCount {
                category: VehicleCategory::Van,
                index: 1
            }
        );
        assert_eq!(err.to_string(), "van step 1 requires zero spots");
    }
}
