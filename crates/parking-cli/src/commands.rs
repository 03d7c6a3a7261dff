//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_query, output_run};
use parking_app::app::{query_spots, run_scenario, SpotQuery};
use parking_app::config::Config;
use parking_app::scenario::Scenario;
use parking_types::{Error, OutputFormat, Result};
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Run { scenario } => cmd_run(&config, scenario.as_deref(), output_format),

        Commands::Query {
            scenario,
            size,
            occupied,
        } => {
            let query = SpotQuery {
                size: *size,
                occupied: *occupied,
            };
            cmd_query(&config, scenario.as_deref(), query, output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_scenario,
            clear_scenario,
            reset,
        } => cmd_config(
            &config_path,
            config,
            *show,
            *set_output,
            set_scenario.clone(),
            *clear_scenario,
            *reset,
        ),
    }
}

/// CLI path first, then the configured default, then the built-in reference
fn resolve_scenario(config: &Config, path: Option<&Path>) -> Result<Scenario> {
    let path = path.or(config.default_scenario.as_deref());
    Scenario::load_or_reference(path)
}

fn cmd_run(config: &Config, scenario: Option<&Path>, output_format: OutputFormat) -> Result<()> {
    let scenario = resolve_scenario(config, scenario)?;
    let (_, outcome) = run_scenario(&scenario)?;
    output_run(output_format, &outcome)
}

fn cmd_query(
    config: &Config,
    scenario: Option<&Path>,
    query: SpotQuery,
    output_format: OutputFormat,
) -> Result<()> {
    let scenario = resolve_scenario(config, scenario)?;
    let (facility, _) = run_scenario(&scenario)?;
    let spots = query_spots(&facility, &query);
    output_query(output_format, &spots)
}

fn cmd_config(
    config_path: &Path,
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_scenario: Option<PathBuf>,
    clear_scenario: bool,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(config_path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    if set_scenario.is_some() && clear_scenario {
        return Err(Error::InvalidArgument(
            "--set-scenario and --clear-scenario cannot be combined".to_string(),
        ));
    }

    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_scenario {
        // fail now rather than on the next run
        Scenario::load(&path)?;
        // stored absolute so runs from any directory find it
        config.default_scenario = Some(std::fs::canonicalize(&path)?);
        modified = true;
    }

    if clear_scenario {
        config.default_scenario = None;
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
        println!("Config file:      {}", config_path.display());
    }

    Ok(())
}
