//! Coordinate type definitions

use std::fmt;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Zoom level used for the destination map view.
pub const DEFAULT_MAP_ZOOM: u8 = 17;

/// A geographic position in decimal degrees.
///
/// Values can only be built through [`GeoPoint::new`] (or parsing), so every
/// `GeoPoint` in circulation satisfies the latitude/longitude range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub(super) latitude: f64,
    pub(super) longitude: f64,
}

impl GeoPoint {
    /// Latitude in degrees, north positive.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east positive.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `(latitude, longitude)`.
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Errors that can occur while building coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude is outside valid range (-90.0 to 90.0) or not finite
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180.0 to 180.0) or not finite
    InvalidLongitude(f64),
    /// Text could not be read as a `lat,lon` pair
    Malformed(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            CoordError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
            CoordError::Malformed(text) => {
                write!(
                    f,
                    "Malformed coordinate: '{}' (expected 'latitude,longitude')",
                    text
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
