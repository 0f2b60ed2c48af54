//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;
use std::time::Duration;

use crate::coord::GeoPoint;
use crate::destination::DestinationTable;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Travel estimate settings
    pub navigation: NavigationSettings,
    /// Current-position settings
    pub location: LocationSettings,
    /// Destination table (built-in course unless `[destinations]` is set)
    pub destinations: DestinationTable,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Navigation configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationSettings {
    /// Average cart speed used for ETAs, in mph.
    pub average_speed_mph: f64,
    /// Zoom level for destination map links.
    pub map_zoom: u8,
}

/// Location configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSettings {
    /// Poll the GPS receiver for live fixes.
    pub enabled: bool,
    /// Seconds between receiver reads (at least 1).
    pub update_interval_secs: u64,
    /// Manual reference position used when no receiver is attached.
    pub reference: Option<GeoPoint>,
}

impl LocationSettings {
    /// Interval to hand to the fix poller, or `None` when GPS polling is off.
    pub fn poll_interval(&self) -> Option<Duration> {
        self.enabled
            .then(|| Duration::from_secs(self.update_interval_secs))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
