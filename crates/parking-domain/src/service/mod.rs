//! Domain services

pub mod facility;
pub mod occupancy_report;
pub mod policy;

pub use facility::{Facility, Placement};
pub use occupancy_report::{
    generate_occupancy_report, FacilityStatus, OccupancyReport, SizeOccupancy,
};
pub use policy::{AllocationPolicy, AllocationStep, PolicyError};
