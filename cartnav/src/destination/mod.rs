//! Named destinations for the navigation screen.
//!
//! A [`DestinationTable`] maps point-of-interest names ("Clubhouse",
//! "Hole 10", ...) to coordinates. The table is constant for the lifetime of
//! the process: it is either the built-in course layout or the
//! `[destinations]` section of the config file.
//!
//! # Example
//!
//! ```
//! use cartnav::destination::{lookup_destination, DestinationTable};
//!
//! let table = DestinationTable::golf_course();
//! let pro_shop = lookup_destination("Pro Shop", &table).unwrap();
//! assert_eq!(pro_shop.as_tuple(), (35.7798, -78.6385));
//!
//! assert!(lookup_destination("pro shop", &table).is_err());
//! ```

mod table;

pub use table::DestinationTable;

use crate::coord::GeoPoint;

/// Error returned when a destination cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DestinationError {
    /// The name is not a key of the table (exact match).
    #[error("Destination '{0}' not found")]
    NotFound(String),
}

/// A named point of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    /// Display name, also the lookup key.
    pub name: String,
    /// Location of the destination.
    pub point: GeoPoint,
}

impl Destination {
    /// Create a new destination.
    pub fn new(name: &str, point: GeoPoint) -> Self {
        Self {
            name: name.to_string(),
            point,
        }
    }
}

/// Resolve a destination name to its coordinates.
///
/// Matching is exact: no case folding, trimming or fuzzy matching.
///
/// # Errors
///
/// Returns [`DestinationError::NotFound`] when `name` is not in `table`.
pub fn lookup_destination(
    name: &str,
    table: &DestinationTable,
) -> Result<GeoPoint, DestinationError> {
    table
        .get(name)
        .map(|destination| destination.point)
        .ok_or_else(|| DestinationError::NotFound(name.to_string()))
}
