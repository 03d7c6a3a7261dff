//! Application Layer
//!
//! Orchestrates between the CLI and the domain layer.
//!
//! - `run_service`: build a facility from a scenario and park its arrivals
//! - `query_service`: select spots of a finished run

pub mod query_service;
pub mod run_service;

pub use query_service::{query_spots, SpotQuery};
pub use run_service::{run_scenario, CategorySummary, RunOutcome, VehicleOutcome};
