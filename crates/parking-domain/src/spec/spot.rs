//! Predicates over parking spots

use super::{And, Predicate};
use crate::model::{Spot, SpotSize};

/// Spot has the given size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeIs(pub SpotSize);

impl Predicate for SizeIs {
    type Subject = Spot;

    fn test(&self, spot: &Spot) -> bool {
        spot.size() == self.0
    }
}

/// Spot occupancy equals the given flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupiedIs(pub bool);

impl Predicate for OccupiedIs {
    type Subject = Spot;

    fn test(&self, spot: &Spot) -> bool {
        spot.is_occupied() == self.0
    }
}

/// Free spots of one size, the candidate set for every allocation step
pub fn free_of_size(size: SpotSize) -> And<SizeIs, OccupiedIs> {
    SizeIs(size).and(OccupiedIs(false))
}
