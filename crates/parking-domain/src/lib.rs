//! Parking facility domain
//!
//! Spots and vehicles, composable predicates over them, and the facility
//! service that allocates vehicles to spots through a fallback policy.

pub mod model;
pub mod service;
pub mod spec;
