//! Current-position sources.
//!
//! The navigator never talks to a GPS receiver directly. It asks a
//! [`LocationProvider`] for the current fix and gets back either a
//! [`PositionFix`] or a typed [`LocationError`]. "No fix yet" and "read
//! failed" stay distinct all the way to the caller.
//!
//! # Components
//!
//! - [`state`] - `FixMode`, `PositionFix`
//! - [`provider`] - `LocationProvider` trait, `FixedLocation`, `SharedFix`
//! - [`poller`] - `FixPoller` that refreshes a `SharedFix` from a `FixSource`
//!
//! # Usage
//!
//! ```
//! use cartnav::coord::GeoPoint;
//! use cartnav::location::{LocationError, LocationProvider, PositionFix, SharedFix};
//!
//! let shared = SharedFix::new();
//! assert_eq!(shared.position(), Err(LocationError::NoFix));
//!
//! let here = GeoPoint::new(35.7790, -78.6390).unwrap();
//! shared.update(PositionFix::from_gpsd(here, 4.0, 3));
//! assert_eq!(shared.position(), Ok(here));
//! ```

mod poller;
mod provider;
mod state;

pub use poller::{FixPoller, FixSource, DEFAULT_POLL_INTERVAL};
pub use provider::{FixedLocation, LocationError, LocationProvider, SharedFix};
pub use state::{FixMode, PositionFix, MPS_TO_MPH};
