//! Query Service - select spots of a facility by size and occupancy

use parking_domain::model::{Spot, SpotSize};
use parking_domain::service::Facility;
use parking_domain::spec::{and, OccupiedIs, Predicate, SizeIs};

/// Optional criteria; unset fields match every spot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpotQuery {
    pub size: Option<SpotSize>,
    pub occupied: Option<bool>,
}

impl SpotQuery {
    /// Compose the criteria into one predicate. `None` when nothing is constrained.
    pub fn predicate(&self) -> Option<Box<dyn Predicate<Subject = Spot>>> {
        match (self.size, self.occupied) {
            (Some(size), Some(occupied)) => Some(Box::new(and(SizeIs(size), OccupiedIs(occupied)))),
            (Some(size), None) => Some(Box::new(SizeIs(size))),
            (None, Some(occupied)) => Some(Box::new(OccupiedIs(occupied))),
            (None, None) => None,
        }
    }
}

/// Spots matching `query`, in layout order
pub fn query_spots<'a>(facility: &'a Facility, query: &SpotQuery) -> Vec<&'a Spot> {
    match query.predicate() {
        Some(predicate) => facility.query(&predicate).collect(),
        None => facility.spots().iter().collect(),
    }
}
