//! cartnav - Destination distance and arrival estimates for a golf cart display
//!
//! This library provides the navigation core behind the cart's GPS screen:
//! great-circle distance between two coordinates, travel-time estimates at an
//! average cart speed, and lookup of named course destinations.
//!
//! # High-Level API
//!
//! For most use cases, the [`navigation`] module ties everything together:
//!
//! ```
//! use cartnav::coord::GeoPoint;
//! use cartnav::destination::DestinationTable;
//! use cartnav::location::FixedLocation;
//! use cartnav::navigation::Navigator;
//!
//! let here = GeoPoint::new(35.7796, -78.6382).unwrap();
//! let navigator = Navigator::new(DestinationTable::golf_course(), FixedLocation::new(here));
//!
//! let status = navigator.navigate("Hole 10").unwrap();
//! assert!((status.distance_miles - 0.2353).abs() < 1e-3);
//! assert!(status.eta_minutes < 1.0);
//! ```
//!
//! The building blocks are usable on their own:
//!
//! - [`distance`] - haversine distance and ETA estimation
//! - [`destination`] - the named destination table and lookup
//! - [`location`] - current-position providers
//! - [`coord`] - validated coordinates and map links
//! - [`config`] - `~/.cartnav/config.ini`
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod coord;
pub mod destination;
pub mod distance;
pub mod location;
pub mod logging;
pub mod navigation;

/// Version of the cartnav library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
