//! Run Service - park a scenario's arrivals in order

use parking_domain::model::VehicleCategory;
use parking_domain::service::{Facility, OccupancyReport, Placement};
use parking_domain::spec::{filter, CategoryIs};
use parking_types::Result;
use serde::Serialize;
use tracing::{info, warn};

use crate::scenario::Scenario;

/// What happened to one arriving vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleOutcome {
    /// 1-based arrival number
    pub arrival: usize,
    pub category: VehicleCategory,
    pub placement: Option<Placement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: VehicleCategory,
    pub arrived: usize,
    pub placed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub vehicles: Vec<VehicleOutcome>,
    pub categories: Vec<CategorySummary>,
    pub report: OccupancyReport,
}

impl RunOutcome {
    pub fn unplaced(&self) -> impl Iterator<Item = &VehicleOutcome> {
        self.vehicles.iter().filter(|v| v.placement.is_none())
    }
}

/// Build the scenario's facility and allocate every arrival in order.
///
/// Returns the facility as it stands afterwards together with a summary.
pub fn run_scenario(scenario: &Scenario) -> Result<(Facility, RunOutcome)> {
    let mut facility = scenario.build_facility()?;
    let arrivals = scenario.arrivals();
    info!(
        spots = facility.len(),
        vehicles = arrivals.len(),
        "running scenario"
    );

    let vehicles: Vec<VehicleOutcome> = arrivals
        .iter()
        .enumerate()
        .map(|(index, vehicle)| {
            let placement = facility.place(vehicle);
            if placement.is_none() {
                warn!(arrival = index + 1, category = %vehicle.category(), "vehicle left unplaced");
            }
            VehicleOutcome {
                arrival: index + 1,
                category: vehicle.category(),
                placement,
            }
        })
        .collect();

    let categories = VehicleCategory::ALL
        .into_iter()
        .map(|category| CategorySummary {
            category,
            arrived: filter(&arrivals, &CategoryIs(category)).count(),
            placed: vehicles
                .iter()
                .filter(|v| v.category == category && v.placement.is_some())
                .count(),
        })
        .collect();

    let report = OccupancyReport::from_facility(&facility);
    info!(
        occupied = report.occupied,
        free = report.free,
        status = report.status.label(),
        "scenario finished"
    );

    Ok((
        facility,
        RunOutcome {
            vehicles,
            categories,
            report,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_domain::model::{SpotId, SpotSize};
    use parking_domain::service::FacilityStatus;

    #[test]
    fn test_reference_run_outcome() {
        let (facility, outcome) = run_scenario(&Scenario::reference()).unwrap();
        assert_eq!(facility.len(), 10);
        assert_eq!(outcome.report.occupied, 7);
        assert_eq!(outcome.report.free, 3);
        assert_eq!(outcome.report.occupied_for(SpotSize::Car), 5);
        assert_eq!(outcome.report.occupied_for(SpotSize::Large), 1);
        assert_eq!(outcome.report.occupied_for(SpotSize::Motorcycle), 1);
        assert_eq!(outcome.report.status, FacilityStatus::Partial);
        assert_eq!(outcome.unplaced().count(), 0);

        let second_van = &outcome.vehicles[3];
        assert_eq!(second_van.arrival, 4);
        assert_eq!(
            second_van.placement.as_ref().map(|p| p.spots.clone()),
            Some(vec![SpotId(1), SpotId(3), SpotId(4)])
        );
    }

    #[test]
    fn test_category_summary() {
        let (_, outcome) = run_scenario(&Scenario::reference()).unwrap();
        let van = outcome
            .categories
            .iter()
            .find(|c| c.category == VehicleCategory::Van)
            .unwrap();
        assert_eq!(van.arrived, 2);
        assert_eq!(van.placed, 2);
    }

    #[test]
    fn test_unplaced_vehicles_are_reported() {
        let scenario = Scenario {
            spots: vec![SpotSize::Car, SpotSize::Car],
            vehicles: vec![VehicleCategory::Van, VehicleCategory::Car],
            ..Scenario::default()
        };
        let (_, outcome) = run_scenario(&scenario).unwrap();
        let unplaced: Vec<usize> = outcome.unplaced().map(|v| v.arrival).collect();
        assert_eq!(unplaced, vec![1]);
        assert_eq!(outcome.report.occupied, 1);
    }
}
