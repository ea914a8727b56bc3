use std::{env, fs::File, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use sonic_flight::*;

/// Simulates a single-stage rocket climbing to the speed of sound and falling back.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Flight configuration (TOML). The reference vehicle is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the trajectory to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Default log level to "info"
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let inputs = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            FlightConfig::from_file(path)?.vehicle
        }
        None => VehicleInputs::reference(),
    };

    let report = simulate(&inputs, PhysicalConstants::default())?;
    Telemetry::display_data(&report);

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Cannot create {}", path.display()))?;
        write_trajectory_csv(&report.trajectory, file)?;
        info!("Trajectory written to {}", path.display());
    }

    Ok(())
}
