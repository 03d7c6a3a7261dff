//! CLI definition using clap

use clap::{Parser, Subcommand};
use parking_domain::model::SpotSize;
use parking_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parking-facility")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Allocate arriving vehicles to parking spots and report occupancy")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a scenario and report where every vehicle was parked
    Run {
        /// Scenario file (TOML). Uses the configured default, then the built-in reference run.
        scenario: Option<PathBuf>,
    },

    /// Run a scenario, then list the spots matching the given criteria
    Query {
        /// Scenario file (TOML). Uses the configured default, then the built-in reference run.
        scenario: Option<PathBuf>,

        /// Spot size (motorcycle, car, large)
        #[arg(long, short = 's')]
        size: Option<SpotSize>,

        /// Occupancy (true, false)
        #[arg(long, short = 'o')]
        occupied: Option<bool>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default scenario file
        #[arg(long)]
        set_scenario: Option<PathBuf>,

        /// Forget the default scenario
        #[arg(long)]
        clear_scenario: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
