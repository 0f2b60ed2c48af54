//! Provider trait and shared fix store.
//!
//! - [`LocationProvider`] - Query API used by the navigator
//! - [`FixedLocation`] - Manual reference point
//! - [`SharedFix`] - Latest fix written by a poller, readable from any thread

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use super::state::PositionFix;
use crate::coord::GeoPoint;

/// Why a current position is not available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The source is reachable but has not produced a usable fix yet.
    #[error("No GPS fix yet")]
    NoFix,

    /// The last fix is older than the configured limit.
    #[error("GPS fix is stale ({age:?} old)")]
    Stale { age: Duration },

    /// Reading from the source failed.
    #[error("Failed to read GPS position: {0}")]
    ReadFailed(String),
}

/// Trait for querying the current position.
pub trait LocationProvider: Send + Sync {
    /// Get the current fix.
    fn current_fix(&self) -> Result<PositionFix, LocationError>;

    /// Get the current position (convenience method).
    fn position(&self) -> Result<GeoPoint, LocationError> {
        self.current_fix().map(|fix| fix.point)
    }
}

impl<P: LocationProvider + ?Sized> LocationProvider for Arc<P> {
    fn current_fix(&self) -> Result<PositionFix, LocationError> {
        (**self).current_fix()
    }
}

/// A provider that always reports the same point.
///
/// Used for user-provided positions (command line, config file) and in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation {
    point: GeoPoint,
}

impl FixedLocation {
    /// Create a provider pinned to `point`.
    pub fn new(point: GeoPoint) -> Self {
        Self { point }
    }
}

impl LocationProvider for FixedLocation {
    fn current_fix(&self) -> Result<PositionFix, LocationError> {
        Ok(PositionFix::new(self.point))
    }
}

#[derive(Debug, Clone)]
enum FixState {
    Waiting,
    Fix(PositionFix),
    Failed(String),
}

/// Latest fix reported by a location source.
///
/// Clones share the same underlying state. Writers call [`update`](Self::update)
/// or [`report_failure`](Self::report_failure); readers go through
/// [`LocationProvider`].
#[derive(Debug, Clone)]
pub struct SharedFix {
    state: Arc<RwLock<FixState>>,
    max_age: Option<Duration>,
}

impl SharedFix {
    /// Create an empty store. Reads return [`LocationError::NoFix`] until the
    /// first usable fix arrives.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(FixState::Waiting)),
            max_age: None,
        }
    }

    /// Treat fixes older than `max_age` as stale.
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Record a new reading.
    ///
    /// A reading without a usable fix mode puts the store back into the
    /// "no fix" state rather than keeping an older position.
    pub fn update(&self, fix: PositionFix) {
        let next = if fix.mode.is_usable() {
            FixState::Fix(fix)
        } else {
            FixState::Waiting
        };
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Record a failed read. Cleared by the next [`update`](Self::update).
    pub fn report_failure(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "Location read failed");
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = FixState::Failed(message);
    }

    /// Forget the current fix.
    pub fn clear(&self) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = FixState::Waiting;
    }

    /// Returns true if a usable fix is stored (ignoring staleness).
    pub fn has_fix(&self) -> bool {
        matches!(
            *self.state.read().unwrap_or_else(PoisonError::into_inner),
            FixState::Fix(_)
        )
    }
}

impl Default for SharedFix {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationProvider for SharedFix {
    fn current_fix(&self) -> Result<PositionFix, LocationError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        match &*state {
            FixState::Waiting => Err(LocationError::NoFix),
            FixState::Failed(message) => Err(LocationError::ReadFailed(message.clone())),
            FixState::Fix(fix) => {
                if let Some(max_age) = self.max_age {
                    let age = fix.age();
                    if age > max_age {
                        return Err(LocationError::Stale { age });
                    }
                }
                Ok(fix.clone())
            }
        }
    }
}
