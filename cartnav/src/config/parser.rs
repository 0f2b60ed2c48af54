//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::MAX_MAP_ZOOM;
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::coord::GeoPoint;
use crate::destination::DestinationTable;
use crate::distance::DistanceEstimator;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [navigation] section
    if let Some(section) = ini.section(Some("navigation")) {
        if let Some(v) = section.get("average_speed_mph") {
            let speed: f64 = v.trim().parse().map_err(|_| {
                invalid("navigation", "average_speed_mph", v, "must be a number (mph)")
            })?;
            DistanceEstimator::new(speed)
                .map_err(|e| invalid("navigation", "average_speed_mph", v, &e.to_string()))?;
            config.navigation.average_speed_mph = speed;
        }
        if let Some(v) = section.get("map_zoom") {
            let zoom: u8 = v
                .trim()
                .parse()
                .ok()
                .filter(|zoom| *zoom <= MAX_MAP_ZOOM)
                .ok_or_else(|| {
                    invalid(
                        "navigation",
                        "map_zoom",
                        v,
                        &format!("must be an integer between 0 and {}", MAX_MAP_ZOOM),
                    )
                })?;
            config.navigation.map_zoom = zoom;
        }
    }

    // [location] section
    if let Some(section) = ini.section(Some("location")) {
        if let Some(v) = section.get("enabled") {
            config.location.enabled = parse_bool(v);
        }
        if let Some(v) = section.get("update_interval_secs") {
            let secs: u64 = v
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    invalid(
                        "location",
                        "update_interval_secs",
                        v,
                        "must be a whole number of seconds greater than zero",
                    )
                })?;
            config.location.update_interval_secs = secs;
        }
        if let Some(v) = section.get("reference") {
            let v = v.trim();
            if !v.is_empty() {
                let point: GeoPoint = v
                    .parse()
                    .map_err(|e: crate::coord::CoordError| {
                        invalid("location", "reference", v, &e.to_string())
                    })?;
                config.location.reference = Some(point);
            }
        }
    }

    // [destinations] section, one `name = lat, lon` per line
    if let Some(section) = ini.section(Some("destinations")) {
        let mut table = DestinationTable::new();
        for (name, v) in section.iter() {
            let point: GeoPoint = v
                .parse()
                .map_err(|e: crate::coord::CoordError| {
                    invalid("destinations", name, v, &e.to_string())
                })?;
            table.insert(name, point);
        }

        // An empty section keeps the built-in course
        if !table.is_empty() {
            tracing::info!(count = table.len(), "Loaded destinations from config");
            config.destinations = table;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a boolean value from config.
fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use crate::distance::DEFAULT_AVERAGE_SPEED_MPH;

    fn parse(text: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(text).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_gives_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.navigation.average_speed_mph, DEFAULT_AVERAGE_SPEED_MPH);
        assert_eq!(config.navigation.map_zoom, 17);
        assert!(config.location.enabled);
        assert_eq!(config.location.update_interval_secs, DEFAULT_UPDATE_INTERVAL_SECS);
        assert!(config.location.reference.is_none());
        assert_eq!(config.destinations.len(), 6);
        assert!(config.logging.file.ends_with(DEFAULT_LOG_FILE_NAME));
    }

    #[test]
    fn test_navigation_section() {
        let config = parse("[navigation]\naverage_speed_mph = 12.5\nmap_zoom = 16\n").unwrap();
        assert_eq!(config.navigation.average_speed_mph, 12.5);
        assert_eq!(config.navigation.map_zoom, 16);
    }

    #[test]
    fn test_zero_speed_rejected() {
        let err = parse("[navigation]\naverage_speed_mph = 0\n").unwrap_err();
        match err {
            ConfigFileError::InvalidValue {
                section, key, value, ..
            } => {
                assert_eq!(section, "navigation");
                assert_eq!(key, "average_speed_mph");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_speed_rejected() {
        assert!(matches!(
            parse("[navigation]\naverage_speed_mph = fast\n"),
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_map_zoom_out_of_range() {
        assert!(parse("[navigation]\nmap_zoom = 25\n").is_err());
        assert!(parse("[navigation]\nmap_zoom = -1\n").is_err());
        assert!(parse(&format!("[navigation]\nmap_zoom = {}\n", MAX_MAP_ZOOM)).is_ok());
    }

    #[test]
    fn test_location_reference() {
        let config = parse("[location]\nreference = 35.7790, -78.6390\n").unwrap();
        assert_eq!(
            config.location.reference,
            Some(GeoPoint::new(35.7790, -78.6390).unwrap())
        );
    }

    #[test]
    fn test_location_gps_settings() {
        let config = parse("[location]\nenabled = false\nupdate_interval_secs = 5\n").unwrap();
        assert!(!config.location.enabled);
        assert_eq!(config.location.update_interval_secs, 5);
        assert_eq!(config.location.poll_interval(), None);

        let config = parse("[location]\nenabled = yes\nupdate_interval_secs = 10\n").unwrap();
        assert!(config.location.enabled);
        assert_eq!(
            config.location.poll_interval(),
            Some(std::time::Duration::from_secs(10))
        );
    }

    #[test]
    fn test_update_interval_must_be_positive() {
        for bad in ["0", "-1", "1.5", "often", ""] {
            let text = format!("[location]\nupdate_interval_secs = {}\n", bad);
            match parse(&text).unwrap_err() {
                ConfigFileError::InvalidValue { section, key, .. } => {
                    assert_eq!(section, "location");
                    assert_eq!(key, "update_interval_secs");
                }
                other => panic!("unexpected error for {:?}: {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_parse_bool() {
        for yes in ["true", "TRUE", "1", "yes", " on "] {
            assert!(parse_bool(yes), "{:?} should be true", yes);
        }
        for no in ["false", "0", "no", "off", ""] {
            assert!(!parse_bool(no), "{:?} should be false", no);
        }
    }

    #[test]
    fn test_blank_location_reference_ignored() {
        let config = parse("[location]\nreference =\n").unwrap();
        assert!(config.location.reference.is_none());
    }

    #[test]
    fn test_invalid_location_reference() {
        let err = parse("[location]\nreference = 135.0, 0.0\n").unwrap_err();
        assert!(err.to_string().contains("location.reference"));
    }

    #[test]
    fn test_destinations_replace_builtin_table_in_order() {
        let text = "[destinations]\n\
                    First Tee = 35.0, -78.0\n\
                    Snack Bar = 35.1, -78.1\n\
                    Cart Barn = 35.2, -78.2\n";
        let config = parse(text).unwrap();

        let names: Vec<&str> = config.destinations.names().collect();
        assert_eq!(names, vec!["First Tee", "Snack Bar", "Cart Barn"]);
        assert_eq!(
            config.destinations.get("Snack Bar").unwrap().point,
            GeoPoint::new(35.1, -78.1).unwrap()
        );
        assert!(config.destinations.get("Clubhouse").is_none());
    }

    #[test]
    fn test_empty_destinations_keeps_builtin() {
        let config = parse("[destinations]\n").unwrap();
        assert!(config.destinations.contains("Clubhouse"));
    }

    #[test]
    fn test_malformed_destination() {
        let err = parse("[destinations]\nClubhouse = north of here\n").unwrap_err();
        match err {
            ConfigFileError::InvalidValue { section, key, .. } => {
                assert_eq!(section, "destinations");
                assert_eq!(key, "Clubhouse");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_logging_file() {
        let config = parse("[logging]\nfile = /var/log/cartnav.log\n").unwrap();
        assert_eq!(config.logging.file, PathBuf::from("/var/log/cartnav.log"));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/tmp/x.log"), PathBuf::from("/tmp/x.log"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/logs/a.log"), home.join("logs/a.log"));
        }
    }
}
