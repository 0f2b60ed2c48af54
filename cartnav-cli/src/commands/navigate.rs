//! Navigate to a named destination and print the status readout.

use cartnav::config::ConfigFile;
use cartnav::coord::GeoPoint;
use cartnav::location::{LocationError, PositionFix, SharedFix};
use cartnav::navigation::{NavigationError, Navigator};

use crate::error::CliError;
use crate::readout::StatusReadout;

/// Arguments for the navigate command after clap parsing.
#[derive(Debug, Clone)]
pub struct NavigateArgs {
    /// Destination name, matched exactly
    pub destination: String,
    /// Current position, overriding the configured reference
    pub from: Option<GeoPoint>,
    /// Average speed, overriding the configured value
    pub speed: Option<f64>,
}

/// Resolve the destination, estimate the trip and print the readout.
///
/// Without any current position the destination and its map link are still
/// shown, with placeholder distance and ETA.
pub fn run(args: NavigateArgs, config: &ConfigFile) -> Result<(), CliError> {
    let location = SharedFix::new();
    if let Some(origin) = args.from.or(config.location.reference) {
        location.update(PositionFix::new(origin));
    }

    let navigator = Navigator::new(config.destinations.clone(), location)
        .with_average_speed(args.speed.unwrap_or(config.navigation.average_speed_mph))?
        .with_map_zoom(config.navigation.map_zoom);

    match navigator.navigate(&args.destination) {
        Ok(status) => {
            println!("{} ({})", status.destination, status.target);
            println!("{}", StatusReadout::from_route(&status));
            println!("Map: {}", status.map_url);
            Ok(())
        }
        Err(NavigationError::Location(LocationError::NoFix)) => {
            let preview = navigator.preview(&args.destination)?;
            println!("{} ({})", preview.destination, preview.point);
            println!("{}", StatusReadout::default());
            println!("Map: {}", preview.map_url);
            eprintln!("No current position; pass --from LAT,LON or set [location] reference");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
