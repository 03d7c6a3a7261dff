//! Domain model types

pub mod spot;
pub mod vehicle;

pub use spot::{Spot, SpotId, SpotSize};
pub use vehicle::{Vehicle, VehicleCategory};

use thiserror::Error;

/// Returned when a category or size name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseKindError {
    pub kind: &'static str,
    pub value: String,
}
