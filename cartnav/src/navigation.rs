//! Destination navigation.
//!
//! [`Navigator`] answers the question the GPS screen asks every time a
//! destination is picked: where is it, how far away is it, and how long will
//! it take to get there.

use thiserror::Error;

use crate::coord::{GeoPoint, DEFAULT_MAP_ZOOM};
use crate::destination::{lookup_destination, DestinationError, DestinationTable};
use crate::distance::{DistanceEstimator, EstimateError};
use crate::location::{LocationError, LocationProvider};

/// Errors returned while navigating to a destination.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
    /// Unknown destination name.
    #[error(transparent)]
    Destination(#[from] DestinationError),

    /// No usable current position.
    #[error(transparent)]
    Location(#[from] LocationError),

    /// Invalid estimator settings.
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// A destination with its map link, available without a position fix.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationPreview {
    /// Destination name as given
    pub destination: String,
    /// Destination coordinates
    pub point: GeoPoint,
    /// Map link centred on the destination
    pub map_url: String,
}

/// Everything the status readout shows for an active destination.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStatus {
    /// Destination name as given
    pub destination: String,
    /// Destination coordinates
    pub target: GeoPoint,
    /// Current position used for the estimate
    pub origin: GeoPoint,
    /// Great-circle distance in miles
    pub distance_miles: f64,
    /// Estimated travel time in minutes
    pub eta_minutes: f64,
    /// Current ground speed, when the location source reports one
    pub speed_mph: Option<f64>,
    /// Map link centred on the destination
    pub map_url: String,
}

/// Resolves destinations and estimates trips from the current position.
pub struct Navigator<P> {
    destinations: DestinationTable,
    location: P,
    estimator: DistanceEstimator,
    map_zoom: u8,
}

impl<P: LocationProvider> Navigator<P> {
    /// Create a navigator with the default average speed and map zoom.
    pub fn new(destinations: DestinationTable, location: P) -> Self {
        Self {
            destinations,
            location,
            estimator: DistanceEstimator::default(),
            map_zoom: DEFAULT_MAP_ZOOM,
        }
    }

    /// Use a specific average speed for ETAs.
    pub fn with_average_speed(mut self, average_speed_mph: f64) -> Result<Self, NavigationError> {
        self.estimator = DistanceEstimator::new(average_speed_mph)?;
        Ok(self)
    }

    /// Use a specific zoom level for map links.
    pub fn with_map_zoom(mut self, map_zoom: u8) -> Self {
        self.map_zoom = map_zoom;
        self
    }

    /// The destination table.
    pub fn destinations(&self) -> &DestinationTable {
        &self.destinations
    }

    /// The location provider.
    pub fn location(&self) -> &P {
        &self.location
    }

    /// The configured average speed in mph.
    pub fn average_speed_mph(&self) -> f64 {
        self.estimator.average_speed_mph()
    }

    /// Resolve a destination and build its map link.
    ///
    /// Does not need a current position.
    pub fn preview(&self, name: &str) -> Result<DestinationPreview, NavigationError> {
        let point = lookup_destination(name, &self.destinations)?;
        Ok(DestinationPreview {
            destination: name.to_string(),
            point,
            map_url: point.map_url(self.map_zoom),
        })
    }

    /// Estimate the trip from the current position to `name`.
    ///
    /// The destination is resolved before the position is read, so an unknown
    /// name is reported even while there is no fix.
    pub fn navigate(&self, name: &str) -> Result<RouteStatus, NavigationError> {
        let target = lookup_destination(name, &self.destinations)?;

        let fix = self.location.current_fix().inspect_err(|e| {
            tracing::debug!(destination = name, error = %e, "No position for route estimate");
        })?;

        let trip = self.estimator.estimate(fix.point, target);

        tracing::info!(
            destination = name,
            distance_miles = trip.distance_miles,
            eta_minutes = trip.eta_minutes,
            "Route updated"
        );

        Ok(RouteStatus {
            destination: name.to_string(),
            target,
            origin: fix.point,
            distance_miles: trip.distance_miles,
            eta_minutes: trip.eta_minutes,
            speed_mph: fix.speed_mph,
            map_url: target.map_url(self.map_zoom),
        })
    }
}
