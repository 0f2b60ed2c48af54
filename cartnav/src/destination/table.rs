//! Destination table with O(1) exact-name lookup.

use std::collections::HashMap;

use super::Destination;
use crate::coord::GeoPoint;

/// Built-in course layout: (name, latitude, longitude).
const GOLF_COURSE: [(&str, f64, f64); 6] = [
    ("Clubhouse", 35.7796, -78.6382),
    ("Driving Range", 35.7810, -78.6370),
    ("Pro Shop", 35.7798, -78.6385),
    ("Hole 1", 35.7802, -78.6378),
    ("Hole 10", 35.7825, -78.6360),
    ("Parking", 35.7790, -78.6390),
];

/// Ordered set of destinations.
///
/// Iteration follows insertion order, which is the order the destinations are
/// offered to the driver.
#[derive(Debug, Clone, Default)]
pub struct DestinationTable {
    destinations: Vec<Destination>,
    index: HashMap<String, usize>,
}

impl DestinationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in course destinations.
    pub fn golf_course() -> Self {
        let mut table = Self::new();
        for (name, lat, lon) in GOLF_COURSE {
            // Constant coordinates are all in range.
            if let Ok(point) = GeoPoint::new(lat, lon) {
                table.insert(name, point);
            }
        }
        table
    }

    /// Insert a destination, replacing the point of an existing entry in place.
    ///
    /// Returns the previous point if the name was already present.
    pub fn insert(&mut self, name: &str, point: GeoPoint) -> Option<GeoPoint> {
        if let Some(&slot) = self.index.get(name) {
            let previous = self.destinations[slot].point;
            self.destinations[slot].point = point;
            return Some(previous);
        }

        self.index.insert(name.to_string(), self.destinations.len());
        self.destinations.push(Destination::new(name, point));
        None
    }

    /// Get a destination by exact name.
    pub fn get(&self, name: &str) -> Option<&Destination> {
        self.index.get(name).map(|&slot| &self.destinations[slot])
    }

    /// Returns true if the name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of destinations.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Iterate destinations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }

    /// Destination names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.destinations.iter().map(|d| d.name.as_str())
    }
}

impl<'a> IntoIterator for &'a DestinationTable {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.destinations.iter()
    }
}

impl FromIterator<Destination> for DestinationTable {
    fn from_iter<I: IntoIterator<Item = Destination>>(iter: I) -> Self {
        let mut table = Self::new();
        for destination in iter {
            table.insert(&destination.name, destination.point);
        }
        table
    }
}
