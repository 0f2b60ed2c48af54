//! Status readout formatting.
//!
//! The cart display shows three values side by side: current speed, distance
//! to the active destination and the arrival estimate. Until a route is known
//! the distance and ETA show placeholders.

use std::fmt;

use cartnav::navigation::RouteStatus;

/// Distance shown before any route has been estimated.
pub const DISTANCE_PLACEHOLDER: &str = "0.0";

/// ETA shown before any route has been estimated.
pub const ETA_PLACEHOLDER: &str = "--:--";

/// Speed shown when the position source reports none.
pub const SPEED_PLACEHOLDER: &str = "0";

/// Format a distance in miles with one decimal place.
///
/// # Examples
/// ```
/// assert_eq!(format_distance(2.34), "2.3");
/// ```
pub fn format_distance(miles: f64) -> String {
    format!("{:.1}", miles)
}

/// Format an ETA as whole minutes.
///
/// Fractions are dropped, so anything under a minute reads "0min".
///
/// # Examples
/// ```
/// assert_eq!(format_eta(1.36), "1min");
/// assert_eq!(format_eta(0.94), "0min");
/// ```
pub fn format_eta(minutes: f64) -> String {
    format!("{}min", minutes.trunc() as i64)
}

/// Format a ground speed in whole mph.
pub fn format_speed(mph: f64) -> String {
    format!("{:.0}", mph)
}

/// The three readout values, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReadout {
    pub speed: String,
    pub distance: String,
    pub eta: String,
}

impl Default for StatusReadout {
    fn default() -> Self {
        Self {
            speed: SPEED_PLACEHOLDER.to_string(),
            distance: DISTANCE_PLACEHOLDER.to_string(),
            eta: ETA_PLACEHOLDER.to_string(),
        }
    }
}

impl StatusReadout {
    /// Build the readout for an estimated route.
    pub fn from_route(status: &RouteStatus) -> Self {
        Self {
            speed: status
                .speed_mph
                .map(format_speed)
                .unwrap_or_else(|| SPEED_PLACEHOLDER.to_string()),
            distance: format_distance(status.distance_miles),
            eta: format_eta(status.eta_minutes),
        }
    }
}

impl fmt::Display for StatusReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Speed: {} mph | Distance: {} mi | ETA: {}",
            self.speed, self.distance, self.eta
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartnav::coord::GeoPoint;

    fn route(distance_miles: f64, eta_minutes: f64, speed_mph: Option<f64>) -> RouteStatus {
        let point = GeoPoint::new(35.7825, -78.6360).unwrap();
        RouteStatus {
            destination: "Hole 10".to_string(),
            target: point,
            origin: point,
            distance_miles,
            eta_minutes,
            speed_mph,
            map_url: point.map_url(17),
        }
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0.0");
        assert_eq!(format_distance(2.34), "2.3");
        assert_eq!(format_distance(0.2353), "0.2");
        assert_eq!(format_distance(12.96), "13.0");
    }

    #[test]
    fn test_format_eta_truncates() {
        assert_eq!(format_eta(0.0), "0min");
        assert_eq!(format_eta(0.94), "0min");
        assert_eq!(format_eta(1.36), "1min");
        assert_eq!(format_eta(9.99), "9min");
        assert_eq!(format_eta(125.0), "125min");
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(0.0), "0");
        assert_eq!(format_speed(8.948), "9");
        assert_eq!(format_speed(12.2), "12");
    }

    #[test]
    fn test_placeholders() {
        let readout = StatusReadout::default();
        assert_eq!(readout.to_string(), "Speed: 0 mph | Distance: 0.0 mi | ETA: --:--");
    }

    #[test]
    fn test_from_route() {
        let readout = StatusReadout::from_route(&route(0.34, 1.36, Some(12.2)));
        assert_eq!(
            readout.to_string(),
            "Speed: 12 mph | Distance: 0.3 mi | ETA: 1min"
        );
    }

    #[test]
    fn test_from_route_without_speed() {
        let readout = StatusReadout::from_route(&route(0.2353, 0.94, None));
        assert_eq!(readout.speed, "0");
        assert_eq!(readout.distance, "0.2");
        assert_eq!(readout.eta, "0min");
    }
}
