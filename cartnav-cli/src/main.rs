//! cartnav CLI - Command-line interface
//!
//! This binary provides the golf cart navigation readout on the command line.

mod commands;
mod error;
mod readout;
mod runner;

use std::path::PathBuf;

use cartnav::coord::GeoPoint;
use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::navigate::NavigateArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "cartnav")]
#[command(version = cartnav::VERSION)]
#[command(about = "Distance and arrival estimates for golf course destinations", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.cartnav/config.ini)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging and echo log events to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Great-circle distance between two points, in miles
    Distance {
        /// Start point as LAT,LON
        #[arg(allow_hyphen_values = true)]
        from: GeoPoint,

        /// End point as LAT,LON
        #[arg(allow_hyphen_values = true)]
        to: GeoPoint,
    },

    /// Travel time for a distance, in minutes
    Eta {
        /// Distance in miles
        #[arg(allow_hyphen_values = true)]
        miles: f64,

        /// Average speed in mph (default: from config)
        #[arg(long, allow_hyphen_values = true)]
        speed: Option<f64>,
    },

    /// Show distance, ETA and map link for a destination
    Navigate {
        /// Destination name (exact match, e.g. "Hole 10")
        destination: String,

        /// Current position as LAT,LON (default: [location] reference)
        #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
        from: Option<GeoPoint>,

        /// Average speed in mph (default: from config)
        #[arg(long, allow_hyphen_values = true)]
        speed: Option<f64>,
    },

    /// List known destinations
    Destinations,

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Config(command) => commands::config::run(command, config_path),
        Commands::Distance { from, to } => {
            let runner = CliRunner::new(config_path, cli.debug)?;
            runner.log_startup("distance");
            commands::estimate::run_distance(from, to)
        }
        Commands::Eta { miles, speed } => {
            let runner = CliRunner::new(config_path, cli.debug)?;
            runner.log_startup("eta");
            let speed = speed.unwrap_or(runner.config().navigation.average_speed_mph);
            commands::estimate::run_eta(miles, speed)
        }
        Commands::Navigate {
            destination,
            from,
            speed,
        } => {
            let runner = CliRunner::new(config_path, cli.debug)?;
            runner.log_startup("navigate");
            let args = NavigateArgs {
                destination,
                from,
                speed,
            };
            commands::navigate::run(args, runner.config())
        }
        Commands::Destinations => {
            let runner = CliRunner::new(config_path, cli.debug)?;
            runner.log_startup("destinations");
            commands::destinations::run(&runner.config().destinations)
        }
    }
}
