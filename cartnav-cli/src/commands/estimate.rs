//! One-off distance and travel time calculations.

use cartnav::coord::GeoPoint;
use cartnav::distance::{estimate_eta_minutes, haversine_distance_miles};

use crate::error::CliError;

/// Print the great-circle distance between two points.
pub fn run_distance(from: GeoPoint, to: GeoPoint) -> Result<(), CliError> {
    let miles = haversine_distance_miles(from, to);
    tracing::debug!(%from, %to, miles, "Distance calculated");
    println!("{:.4} mi", miles);
    Ok(())
}

/// Print the travel time for a distance at an average speed.
pub fn run_eta(miles: f64, average_speed_mph: f64) -> Result<(), CliError> {
    let minutes = estimate_eta_minutes(miles, average_speed_mph)?;
    tracing::debug!(miles, average_speed_mph, minutes, "ETA calculated");
    println!("{:.2} min", minutes);
    Ok(())
}
