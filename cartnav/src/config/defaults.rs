//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::file::config_directory;
use super::settings::*;
use crate::coord::DEFAULT_MAP_ZOOM;
use crate::destination::DestinationTable;
use crate::distance::DEFAULT_AVERAGE_SPEED_MPH;

/// Highest zoom level the map view accepts.
pub const MAX_MAP_ZOOM: u8 = 19;

/// Default seconds between GPS receiver reads.
pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 1;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "cartnav.log";

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            average_speed_mph: DEFAULT_AVERAGE_SPEED_MPH,
            map_zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            update_interval_secs: DEFAULT_UPDATE_INTERVAL_SECS,
            reference: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: config_directory().join(DEFAULT_LOG_FILE_NAME),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            navigation: NavigationSettings::default(),
            location: LocationSettings::default(),
            destinations: DestinationTable::golf_course(),
            logging: LoggingSettings::default(),
        }
    }
}
