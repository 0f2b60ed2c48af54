//! Great-circle distance and travel time estimation.
//!
//! This module provides the navigation mathematics behind the status readout:
//! how far the cart is from a destination and roughly how long the drive will
//! take at a fixed average speed.
//!
//! # Units
//!
//! - Coordinates: decimal degrees (see [`GeoPoint`])
//! - Distance: statute miles
//! - Speed: miles per hour
//! - Time: minutes
//!
//! Every function here is pure. Results depend only on the arguments, so they
//! can be called from any thread or timer callback without synchronization.

use std::f64::consts::PI;

use thiserror::Error;

use crate::coord::GeoPoint;

/// Earth's mean radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Average golf cart speed used when no other speed is configured.
pub const DEFAULT_AVERAGE_SPEED_MPH: f64 = 15.0;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = PI / 180.0;

/// Errors returned by the travel time estimator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// Average speed must be a positive, finite number of mph.
    #[error("Invalid average speed: {0} mph (must be greater than zero)")]
    InvalidSpeed(f64),

    /// Distance must be a non-negative, finite number of miles.
    #[error("Invalid distance: {0} mi (must be zero or greater)")]
    InvalidDistance(f64),
}

/// Calculate the great-circle distance between two positions.
///
/// Uses the haversine formula with the `atan2` form of the central angle.
///
/// # Arguments
///
/// * `from` - First position
/// * `to` - Second position
///
/// # Returns
///
/// Distance in statute miles. The result is symmetric, never negative, and
/// exactly zero when both points are equal.
///
/// # Example
///
/// ```
/// use cartnav::coord::GeoPoint;
/// use cartnav::distance::haversine_distance_miles;
///
/// let clubhouse = GeoPoint::new(35.7796, -78.6382).unwrap();
/// let range = GeoPoint::new(35.7810, -78.6370).unwrap();
///
/// let miles = haversine_distance_miles(clubhouse, range);
/// assert!((miles - 0.1178).abs() < 0.001);
/// ```
pub fn haversine_distance_miles(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.latitude() * DEG_TO_RAD;
    let lat2_rad = to.latitude() * DEG_TO_RAD;
    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = (to.longitude() - from.longitude()) * DEG_TO_RAD;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Estimate travel time for a distance at a constant average speed.
///
/// # Arguments
///
/// * `distance_miles` - Distance to travel, zero or greater
/// * `average_speed_mph` - Assumed constant speed, greater than zero
///
/// # Returns
///
/// Minutes of travel, or an [`EstimateError`] if either input is out of range.
///
/// # Example
///
/// ```
/// use cartnav::distance::estimate_eta_minutes;
///
/// // 1 mile at 15 mph takes 4 minutes
/// let minutes = estimate_eta_minutes(1.0, 15.0).unwrap();
/// assert!((minutes - 4.0).abs() < 1e-9);
///
/// assert!(estimate_eta_minutes(1.0, 0.0).is_err());
/// ```
pub fn estimate_eta_minutes(
    distance_miles: f64,
    average_speed_mph: f64,
) -> Result<f64, EstimateError> {
    validate_speed(average_speed_mph)?;
    if !distance_miles.is_finite() || distance_miles < 0.0 {
        return Err(EstimateError::InvalidDistance(distance_miles));
    }

    Ok(minutes_at(distance_miles, average_speed_mph))
}

/// Estimate travel time at [`DEFAULT_AVERAGE_SPEED_MPH`].
pub fn estimate_eta_minutes_default(distance_miles: f64) -> Result<f64, EstimateError> {
    estimate_eta_minutes(distance_miles, DEFAULT_AVERAGE_SPEED_MPH)
}

fn validate_speed(average_speed_mph: f64) -> Result<(), EstimateError> {
    if !average_speed_mph.is_finite() || average_speed_mph <= 0.0 {
        return Err(EstimateError::InvalidSpeed(average_speed_mph));
    }
    Ok(())
}

#[inline]
fn minutes_at(distance_miles: f64, average_speed_mph: f64) -> f64 {
    (distance_miles / average_speed_mph) * 60.0
}

/// Distance and travel time between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripEstimate {
    /// Great-circle distance in miles
    pub distance_miles: f64,
    /// Travel time in minutes at the estimator's average speed
    pub eta_minutes: f64,
}

/// Travel estimator bound to one average speed.
///
/// The speed is validated once at construction, so [`estimate`](Self::estimate)
/// cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceEstimator {
    average_speed_mph: f64,
}

impl DistanceEstimator {
    /// Create an estimator for the given average speed.
    pub fn new(average_speed_mph: f64) -> Result<Self, EstimateError> {
        validate_speed(average_speed_mph)?;
        Ok(Self { average_speed_mph })
    }

    /// The configured average speed in mph.
    pub fn average_speed_mph(&self) -> f64 {
        self.average_speed_mph
    }

    /// Distance and ETA from `from` to `to`.
    pub fn estimate(&self, from: GeoPoint, to: GeoPoint) -> TripEstimate {
        let distance_miles = haversine_distance_miles(from, to);
        let eta_minutes = minutes_at(distance_miles, self.average_speed_mph);

        tracing::debug!(
            from = %from,
            to = %to,
            distance_miles,
            eta_minutes,
            speed_mph = self.average_speed_mph,
            "Computed trip estimate"
        );

        TripEstimate {
            distance_miles,
            eta_minutes,
        }
    }
}

impl Default for DistanceEstimator {
    fn default() -> Self {
        Self {
            average_speed_mph: DEFAULT_AVERAGE_SPEED_MPH,
        }
    }
}
