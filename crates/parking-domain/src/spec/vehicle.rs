//! Predicates over vehicles

use super::Predicate;
use crate::model::{Vehicle, VehicleCategory};

/// Vehicle belongs to the given category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryIs(pub VehicleCategory);

impl Predicate for CategoryIs {
    type Subject = Vehicle;

    fn test(&self, vehicle: &Vehicle) -> bool {
        vehicle.category() == self.0
    }
}
