//! Core types for position fixes.
//!
//! - [`FixMode`] - gpsd-style fix quality
//! - [`PositionFix`] - one reading from a location source

use std::time::{Duration, Instant};

use crate::coord::GeoPoint;

/// Metres per second to miles per hour.
pub const MPS_TO_MPH: f64 = 2.237;

/// Fix quality reported by the receiver.
///
/// Mirrors gpsd's `mode` field: 0/1 mean no fix, 2 is a 2D fix, 3 a 3D fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum FixMode {
    /// Receiver is running but has no position yet.
    #[default]
    NoFix,
    /// Latitude/longitude only.
    TwoD,
    /// Latitude/longitude/altitude.
    ThreeD,
}

impl FixMode {
    /// Convert a gpsd `mode` value.
    pub fn from_gpsd_mode(mode: u8) -> Self {
        match mode {
            0 | 1 => Self::NoFix,
            2 => Self::TwoD,
            _ => Self::ThreeD,
        }
    }

    /// Returns true for 2D and 3D fixes.
    #[inline]
    pub fn is_usable(&self) -> bool {
        *self >= Self::TwoD
    }
}

impl std::fmt::Display for FixMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFix => write!(f, "No fix"),
            Self::TwoD => write!(f, "2D"),
            Self::ThreeD => write!(f, "3D"),
        }
    }
}

/// A position reading.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionFix {
    /// Where the cart is.
    pub point: GeoPoint,

    /// Ground speed in mph, if the source reports one.
    pub speed_mph: Option<f64>,

    /// Fix quality.
    pub mode: FixMode,

    /// When the reading was taken.
    ///
    /// Consumers use this to judge freshness.
    pub timestamp: Instant,
}

impl PositionFix {
    /// A 2D fix with no speed, timestamped now.
    pub fn new(point: GeoPoint) -> Self {
        Self {
            point,
            speed_mph: None,
            mode: FixMode::TwoD,
            timestamp: Instant::now(),
        }
    }

    /// Build a fix from gpsd-style fields.
    ///
    /// # Arguments
    ///
    /// * `point` - Reported position
    /// * `hspeed_mps` - Horizontal speed in metres per second
    /// * `mode` - gpsd `mode` value (0-3)
    pub fn from_gpsd(point: GeoPoint, hspeed_mps: f64, mode: u8) -> Self {
        Self {
            point,
            speed_mph: Some(hspeed_mps * MPS_TO_MPH),
            mode: FixMode::from_gpsd_mode(mode),
            timestamp: Instant::now(),
        }
    }

    /// Set the ground speed in mph.
    pub fn with_speed_mph(mut self, speed_mph: f64) -> Self {
        self.speed_mph = Some(speed_mph);
        self
    }

    /// Time since the reading was taken.
    pub fn age(&self) -> Duration {
        self.timestamp.elapsed()
    }
}
