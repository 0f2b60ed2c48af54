//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use cartnav::config::ConfigFileError;
use cartnav::coord::search_url;
use cartnav::destination::DestinationError;
use cartnav::distance::EstimateError;
use cartnav::location::LocationError;
use cartnav::navigation::NavigationError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be loaded or written
    Config(ConfigFileError),
    /// Invalid estimate input
    Estimate(EstimateError),
    /// Destination or position problem while navigating
    Navigation(NavigationError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Navigation(NavigationError::Destination(
                DestinationError::NotFound(name),
            )) => {
                eprintln!();
                eprintln!("Destination names are matched exactly, including case.");
                eprintln!("Run 'cartnav destinations' to see the available names.");
                eprintln!("Search the map instead: {}", search_url(name));
            }
            CliError::Navigation(NavigationError::Location(LocationError::NoFix)) => {
                eprintln!();
                eprintln!("No current position is available. Either:");
                eprintln!("  1. Pass --from LAT,LON");
                eprintln!("  2. Set 'reference' in the [location] section of config.ini");
            }
            CliError::Config(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!("Run 'cartnav config path' to locate the configuration file.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Estimate(e) => write!(f, "Cannot estimate travel time: {}", e),
            CliError::Navigation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Estimate(e) => Some(e),
            CliError::Navigation(e) => Some(e),
            CliError::LoggingInit(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<EstimateError> for CliError {
    fn from(e: EstimateError) -> Self {
        CliError::Estimate(e)
    }
}

impl From<NavigationError> for CliError {
    fn from(e: NavigationError) -> Self {
        CliError::Navigation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_navigation_error_display_is_unwrapped() {
        let err = CliError::from(NavigationError::from(DestinationError::NotFound(
            "Hole 19".to_string(),
        )));
        assert_eq!(err.to_string(), "Destination 'Hole 19' not found");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_estimate_error_display() {
        let err = CliError::from(EstimateError::InvalidSpeed(0.0));
        assert!(err.to_string().starts_with("Cannot estimate travel time: "));
    }

    #[test]
    fn test_logging_error_has_no_source() {
        let err = CliError::LoggingInit("busy".to_string());
        assert_eq!(err.to_string(), "Failed to initialize logging: busy");
        assert!(err.source().is_none());
    }
}
