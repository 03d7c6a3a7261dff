//! Occupancy summary of a facility, computed through queries

use serde::{Deserialize, Serialize};

use super::facility::Facility;
use crate::model::SpotSize;
use crate::spec::{and, OccupiedIs, SizeIs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityStatus {
    /// No spot is occupied (also reported for a facility without spots)
    Empty,
    Partial,
    Full,
}

impl FacilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FacilityStatus::Empty => "empty",
            FacilityStatus::Partial => "partial",
            FacilityStatus::Full => "full",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOccupancy {
    pub size: SpotSize,
    pub occupied: usize,
    pub free: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyReport {
    pub total: usize,
    pub occupied: usize,
    pub free: usize,
    pub by_size: Vec<SizeOccupancy>,
    pub status: FacilityStatus,
}

impl OccupancyReport {
    pub fn from_facility(facility: &Facility) -> Self {
        let occupied = facility.count(&OccupiedIs(true));
        let free = facility.count(&OccupiedIs(false));
        let by_size = SpotSize::ALL
            .into_iter()
            .map(|size| SizeOccupancy {
                size,
                occupied: facility.count(&and(SizeIs(size), OccupiedIs(true))),
                free: facility.count(&and(SizeIs(size), OccupiedIs(false))),
            })
            .collect();
        let status = if occupied == 0 {
            FacilityStatus::Empty
        } else if free == 0 {
            FacilityStatus::Full
        } else {
            FacilityStatus::Partial
        };

        Self {
            total: facility.len(),
            occupied,
            free,
            by_size,
            status,
        }
    }

    pub fn occupied_for(&self, size: SpotSize) -> usize {
        self.by_size
            .iter()
            .find(|s| s.size == size)
            .map(|s| s.occupied)
            .unwrap_or(0)
    }
}

pub fn generate_occupancy_report(report: &OccupancyReport) -> String {
    let mut out = String::new();
    out.push_str("==================================================\n");
    out.push_str("              Parking Occupancy Report            \n");
    out.push_str("==================================================\n\n");
    out.push_str("[Summary]\n");
    out.push_str(&format!("  Total spots:     {}\n", report.total));
    out.push_str(&format!("  Occupied:        {}\n", report.occupied));
    out.push_str(&format!("  Free:            {}\n", report.free));
    out.push_str(&format!("  Status:          {}\n", report.status.label()));
    if report.total > 0 {
        let rate = (report.occupied as f64 / report.total as f64) * 100.0;
        out.push_str(&format!("  Occupancy rate:  {:.1}%\n", rate));
    }
    out.push('\n');

    out.push_str("[By spot size]\n");
    out.push_str("-".repeat(40).as_str());
    out.push('\n');
    out.push_str(&format!("{:<12} {:>12} {:>12}\n", "Size", "Occupied", "Free"));
    out.push_str("-".repeat(40).as_str());
    out.push('\n');
    for row in &report.by_size {
        out.push_str(&format!(
            "{:<12} {:>12} {:>12}\n",
            row.size.label(),
            row.occupied,
            row.free
        ));
    }
    out.push('\n');

    match report.status {
        FacilityStatus::Full => out.push_str("The facility is full.\n\n"),
        FacilityStatus::Empty => out.push_str("The facility is empty.\n\n"),
        FacilityStatus::Partial => {}
    }

    out.push_str("==================================================\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Vehicle, VehicleCategory};

    use SpotSize::{Car, Large, Motorcycle};

    #[test]
    fn test_report_of_fresh_facility() {
        let facility = Facility::new([Car, Large]);
        let report = OccupancyReport::from_facility(&facility);
        assert_eq!(report.total, 2);
        assert_eq!(report.occupied, 0);
        assert_eq!(report.free, 2);
        assert_eq!(report.status, FacilityStatus::Empty);
    }

    #[test]
    fn test_report_counts_by_size() {
        let mut facility = Facility::new([Car, Car, Large, Motorcycle]);
        facility.allocate(&Vehicle::new(VehicleCategory::Car));
        facility.allocate(&Vehicle::new(VehicleCategory::Motorcycle));
        let report = OccupancyReport::from_facility(&facility);
        assert_eq!(report.occupied, 2);
        assert_eq!(report.free, 2);
        assert_eq!(report.occupied_for(Car), 1);
        assert_eq!(report.occupied_for(Motorcycle), 1);
        assert_eq!(report.occupied_for(Large), 0);
        assert_eq!(report.status, FacilityStatus::Partial);
    }

    #[test]
    fn test_report_full() {
        let mut facility = Facility::new([Large]);
        facility.allocate(&Vehicle::new(VehicleCategory::Van));
        let report = OccupancyReport::from_facility(&facility);
        assert_eq!(report.status, FacilityStatus::Full);
        let text = generate_occupancy_report(&report);
        assert!(text.contains("The facility is full."));
        assert!(text.contains("100.0%"));
    }

    #[test]
    fn test_report_without_spots() {
        let facility = Facility::new([]);
        let report = OccupancyReport::from_facility(&facility);
        assert_eq!(report.status, FacilityStatus::Empty);
        let text = generate_occupancy_report(&report);
        assert!(text.contains("Total spots:     0"));
        assert!(!text.contains("Occupancy rate"));
    }
}
