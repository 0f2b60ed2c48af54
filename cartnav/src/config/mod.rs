//! User configuration for cartnav.
//!
//! Settings are read from `~/.cartnav/config.ini`. A missing file means
//! defaults: 15 mph average speed, map zoom 17, the built-in course table and
//! a log file next to the config.
//!
//! # Example
//!
//! ```
//! use cartnav::config::ConfigFile;
//!
//! let config = ConfigFile::from_ini_str(
//!     "[navigation]\naverage_speed_mph = 12\n\n[destinations]\nCart Barn = 35.7791, -78.6395\n",
//! )
//! .unwrap();
//!
//! assert_eq!(config.navigation.average_speed_mph, 12.0);
//! assert!(config.destinations.contains("Cart Barn"));
//! assert!(!config.destinations.contains("Clubhouse"));
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_LOG_FILE_NAME, DEFAULT_UPDATE_INTERVAL_SECS, MAX_MAP_ZOOM};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LocationSettings, LoggingSettings, NavigationSettings};
