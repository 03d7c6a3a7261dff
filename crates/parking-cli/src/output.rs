//! Output formatting module

use parking_app::app::RunOutcome;
use parking_domain::model::Spot;
use parking_domain::service::generate_occupancy_report;
use parking_types::{OutputFormat, Result};
use serde::Serialize;

#[derive(Serialize)]
struct QueryOutput<'a> {
    count: usize,
    spots: &'a [&'a Spot],
}

pub fn output_run(output_format: OutputFormat, outcome: &RunOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(outcome)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nArrivals");
    println!("========");
    for vehicle in &outcome.vehicles {
        let placed = match &vehicle.placement {
            Some(placement) => {
                let ids: Vec<String> = placement.spots.iter().map(|id| id.to_string()).collect();
                let noun = if ids.len() == 1 { "spot" } else { "spots" };
                format!("{} {} {}", placement.size, noun, ids.join(", "))
            }
            None => "unplaced".to_string(),
        };
        println!("  {:>3}  {:<12} -> {}", vehicle.arrival, vehicle.category.label(), placed);
    }

    println!("\n{:<12} {:>8} {:>8}", "Category", "Arrived", "Placed");
    for summary in &outcome.categories {
        println!(
            "{:<12} {:>8} {:>8}",
            summary.category.label(),
            summary.arrived,
            summary.placed
        );
    }
    println!();

    print!("{}", generate_occupancy_report(&outcome.report));
    Ok(())
}

pub fn output_query(output_format: OutputFormat, spots: &[&Spot]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&QueryOutput {
            count: spots.len(),
            spots,
        })?;
        println!("{}", content);
        return Ok(());
    }

    println!("Matching spots: {}", spots.len());
    for spot in spots {
        println!(
            "  {:<5} {:<12} {}",
            spot.id().to_string(),
            spot.size().label(),
            if spot.is_occupied() { "occupied" } else { "free" }
        );
    }
    Ok(())
}
