//! Scenario runs driven through the public API, the way an external caller would

use parking_app::app::{query_spots, run_scenario, SpotQuery};
use parking_app::scenario::Scenario;
use parking_domain::model::{SpotId, SpotSize, VehicleCategory};
use parking_domain::service::FacilityStatus;
use tempfile::tempdir;

#[test]
fn test_reference_run_then_extra_arrivals() {
    let mut scenario = Scenario::reference();
    scenario.vehicles.push(VehicleCategory::Van);
    scenario.vehicles.push(VehicleCategory::Car);

    let (facility, outcome) = run_scenario(&scenario).unwrap();

    // sixth arrival: the last three car spots are free, so the van fits
    let sixth = outcome.vehicles[5].placement.as_ref().unwrap();
    assert_eq!(sixth.spots, vec![SpotId(6), SpotId(7), SpotId(8)]);
    // seventh arrival finds nothing
    assert!(outcome.vehicles[6].placement.is_none());

    assert_eq!(outcome.report.status, FacilityStatus::Full);
    assert_eq!(facility.len(), 10);
}

#[test]
fn test_van_fallback_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vans.toml");
    std::fs::write(
        &path,
        r#"
spots = ["car", "car", "car", "car", "motorcycle"]
vehicles = ["van", "van"]
"#,
    )
    .unwrap();

    let scenario = Scenario::load(&path).unwrap();
    let (facility, outcome) = run_scenario(&scenario).unwrap();

    assert_eq!(
        outcome.vehicles[0].placement.as_ref().map(|p| p.spots.clone()),
        Some(vec![SpotId(0), SpotId(1), SpotId(2)])
    );
    // one car spot left: the second van is rejected and occupies nothing
    assert!(outcome.vehicles[1].placement.is_none());

    let free_car = SpotQuery {
        size: Some(SpotSize::Car),
        occupied: Some(false),
    };
    let free: Vec<SpotId> = query_spots(&facility, &free_car)
        .into_iter()
        .map(|s| s.id())
        .collect();
    assert_eq!(free, vec![SpotId(3)]);
}

#[test]
fn test_policy_override_changes_outcome() {
    let scenario = Scenario::from_toml_str(
        r#"
spots = ["large", "car"]
vehicles = ["car"]

[policy]
car = [{ size = "large", count = 1 }, { size = "car", count = 1 }]
"#,
    )
    .unwrap();
    let (_, outcome) = run_scenario(&scenario).unwrap();
    let placement = outcome.vehicles[0].placement.as_ref().unwrap();
    assert_eq!(placement.size, SpotSize::Large);
    assert_eq!(placement.spots, vec![SpotId(0)]);
}
