use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use reentry_heating::*;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Stagnation-point heating and thin-skin temperature from a flight log"
)]
struct Cli {
    /// Trajectory CSV file
    #[arg(long)]
    trajectory: PathBuf,

    /// TOML configuration (defaults to the built-in nose cone)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output CSV path for the heating history
    #[arg(long)]
    output: Option<PathBuf>,

    /// Elapsed-time column: header name or zero-based index
    #[arg(long, default_value = "0")]
    time_column: ColumnBinding,

    /// Altitude column: header name or zero-based index
    #[arg(long, default_value = "5")]
    altitude_column: ColumnBinding,

    /// Mach number column: header name or zero-based index
    #[arg(long, default_value = "22")]
    mach_column: ColumnBinding,

    /// Treat the first row as data instead of a header
    #[arg(long, default_value_t = false)]
    no_header: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => HeatingConfig::from_file(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => HeatingConfig::default(),
    };

    let columns = TrajectoryColumns {
        time: cli.time_column,
        altitude: cli.altitude_column,
        mach: cli.mach_column,
        has_header: !cli.no_header,
    };
    let trajectory = load_trajectory(&cli.trajectory, &columns)
        .with_context(|| format!("Failed to load trajectory {:?}", cli.trajectory))?;

    let atmosphere = StandardAtmosphere::new(config.planet_radius, GRAVITY);
    let simulation = HeatingSimulation::new(config, atmosphere)?;
    let history = simulation.run(&trajectory)?;

    if let Some(path) = &cli.output {
        save_history(path, &history)
            .with_context(|| format!("Failed to write heating history {:?}", path))?;
    }

    Telemetry::from_history(&history).display_data();

    Ok(())
}
