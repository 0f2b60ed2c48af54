//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::fmt::Write;
use std::path::Path;

use super::defaults::MAX_MAP_ZOOM;
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::destination::Destination;

/// Characters that the INI reader treats as syntax inside a key.
const RESERVED_NAME_CHARS: &[char] = &['=', ':', '\\', '"', '\'', ';', '#'];

/// Convert a `ConfigFile` to a commented INI string for saving.
///
/// Fails if a destination name cannot be written as an INI key and read
/// back as the same name.
pub(super) fn to_config_string(config: &ConfigFile) -> Result<String, ConfigFileError> {
    let reference = config
        .location
        .reference
        .map(|p| format!("{}, {}", p.latitude(), p.longitude()))
        .unwrap_or_default();

    // Full precision so saved coordinates load back unchanged
    let mut destinations = String::new();
    for destination in &config.destinations {
        check_destination_name(destination)?;
        let _ = writeln!(
            destinations,
            "{} = {}, {}",
            destination.name,
            destination.point.latitude(),
            destination.point.longitude()
        );
    }

    Ok(format!(
        r#"[navigation]
; Average cart speed used for arrival estimates, in miles per hour (default: 15)
average_speed_mph = {}
; Zoom level for destination map links, 0-{} (default: 17)
map_zoom = {}

[location]
; Poll the GPS receiver for live fixes (default: true)
enabled = {}
; Seconds between GPS reads, at least 1 (default: 1)
update_interval_secs = {}
; Manual reference position as "latitude, longitude", used when no GPS
; receiver is attached. Leave empty to require a live fix.
; Example: reference = 35.7790, -78.6390
reference = {}

[destinations]
; One destination per line as "name = latitude, longitude".
; Names are matched exactly, including case. Listing any destination here
; replaces the built-in course table.
{}
[logging]
; Log file location (default: ~/.cartnav/cartnav.log)
file = {}
"#,
        config.navigation.average_speed_mph,
        MAX_MAP_ZOOM,
        config.navigation.map_zoom,
        config.location.enabled,
        config.location.update_interval_secs,
        reference,
        destinations,
        path_to_string(&config.logging.file),
    ))
}

/// Reject names the INI reader would split, unescape, trim or treat as a
/// comment or section header.
fn check_destination_name(destination: &Destination) -> Result<(), ConfigFileError> {
    let name = destination.name.as_str();
    let reason = if name.is_empty() {
        Some("name must not be empty".to_string())
    } else if name.trim() != name {
        Some("name must not start or end with whitespace".to_string())
    } else if name.starts_with('[') {
        Some("name must not start with '['".to_string())
    } else if let Some(c) = name.chars().find(|c| RESERVED_NAME_CHARS.contains(c)) {
        Some(format!("name must not contain '{}'", c))
    } else if name.chars().any(char::is_control) {
        Some("name must not contain control characters".to_string())
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ConfigFileError::InvalidValue {
            section: "destinations".to_string(),
            key: name.to_string(),
            value: destination.point.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Convert path to string, collapsing home dir to ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
