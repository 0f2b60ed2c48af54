//! Geographic coordinate module
//!
//! Provides the validated [`GeoPoint`] value type used by every other part of
//! the crate, plus parsing from `"lat,lon"` text and the static map link the
//! navigation screen opens for a destination.

mod types;

pub use types::{CoordError, GeoPoint, DEFAULT_MAP_ZOOM, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use std::str::FromStr;

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    ///
    /// # Arguments
    ///
    /// * `latitude` - Latitude in degrees (-90.0 to 90.0)
    /// * `longitude` - Longitude in degrees (-180.0 to 180.0)
    ///
    /// # Returns
    ///
    /// A `Result` containing the point or an error if either value is out of
    /// range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        // Validate inputs (NaN fails both range checks)
        if !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(CoordError::InvalidLatitude(latitude));
        }
        if !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(CoordError::InvalidLongitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Builds the OpenStreetMap link centred on this point.
    ///
    /// ```
    /// use cartnav::coord::GeoPoint;
    ///
    /// let pro_shop = GeoPoint::new(35.7798, -78.6385).unwrap();
    /// assert_eq!(
    ///     pro_shop.map_url(17),
    ///     "https://www.openstreetmap.org/?mlat=35.7798&mlon=-78.6385#map=17/35.7798/-78.6385"
    /// );
    /// ```
    pub fn map_url(&self, zoom: u8) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={zoom}/{lat}/{lon}",
            lat = self.latitude,
            lon = self.longitude,
            zoom = zoom
        )
    }
}

/// Build the OpenStreetMap search link for free text, such as a place name.
///
/// The query is form-encoded, so spaces become `+`.
///
/// # Example
///
/// ```
/// use cartnav::coord::search_url;
///
/// assert_eq!(
///     search_url("Pro Shop & Grill"),
///     "https://www.openstreetmap.org/search?query=Pro+Shop+%26+Grill"
/// );
/// ```
pub fn search_url(query: &str) -> String {
    let encoded: String =
        url::form_urlencoded::byte_serialize(query.trim().as_bytes()).collect();
    format!("https://www.openstreetmap.org/search?query={}", encoded)
}

impl FromStr for GeoPoint {
    type Err = CoordError;

    /// Parses `"35.7798,-78.6385"` or `"35.7798, -78.6385"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordError::Malformed(s.to_string());

        let (lat, lon) = s.split_once(',').ok_or_else(malformed)?;
        let lat: f64 = lat.trim().parse().map_err(|_| malformed())?;
        let lon: f64 = lon.trim().parse().map_err(|_| malformed())?;

        GeoPoint::new(lat, lon)
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = CoordError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        GeoPoint::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests;
