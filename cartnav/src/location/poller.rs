//! Background polling of a location source.
//!
//! The navigation screen reads the receiver once per interval and keeps the
//! latest result. [`FixPoller`] does the same on a dedicated thread, writing
//! into a [`SharedFix`] so that readers never block on the receiver.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::provider::{LocationError, SharedFix};
use super::state::PositionFix;

/// Default interval between reads.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Something that can be asked for a fresh reading.
///
/// Implemented for any `FnMut() -> Result<PositionFix, LocationError>`, so a
/// closure around a receiver client is enough.
pub trait FixSource: Send {
    /// Take one reading.
    fn read_fix(&mut self) -> Result<PositionFix, LocationError>;
}

impl<F> FixSource for F
where
    F: FnMut() -> Result<PositionFix, LocationError> + Send,
{
    fn read_fix(&mut self) -> Result<PositionFix, LocationError> {
        self()
    }
}

/// Apply one reading result to the shared store.
pub(crate) fn apply_reading(target: &SharedFix, reading: Result<PositionFix, LocationError>) {
    match reading {
        Ok(fix) => target.update(fix),
        Err(LocationError::NoFix) | Err(LocationError::Stale { .. }) => target.clear(),
        Err(LocationError::ReadFailed(message)) => target.report_failure(message),
    }
}

/// Handle to a running poller thread.
///
/// Dropping the handle stops the thread.
pub struct FixPoller {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl FixPoller {
    /// Start polling `source` every `interval`, writing into `target`.
    ///
    /// The first read happens immediately.
    pub fn spawn<S>(mut source: S, target: SharedFix, interval: Duration) -> std::io::Result<Self>
    where
        S: FixSource + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("cartnav-fix-poller".to_string())
            .spawn(move || {
                tracing::debug!(interval_ms = interval.as_millis() as u64, "Fix poller started");
                loop {
                    apply_reading(&target, source.read_fix());

                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                tracing::debug!("Fix poller stopped");
            })?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Stop the poller and wait for the thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender wakes the thread with `Disconnected`.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("Fix poller thread panicked");
            }
        }
    }
}

impl Drop for FixPoller {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoPoint;
    use crate::location::LocationProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_apply_reading_variants() {
        let shared = SharedFix::new();

        apply_reading(&shared, Ok(PositionFix::new(point(1.0, 1.0))));
        assert!(shared.has_fix());

        apply_reading(&shared, Err(LocationError::NoFix));
        assert_eq!(shared.current_fix().unwrap_err(), LocationError::NoFix);

        apply_reading(&shared, Err(LocationError::ReadFailed("io".to_string())));
        assert_eq!(
            shared.current_fix().unwrap_err(),
            LocationError::ReadFailed("io".to_string())
        );
    }

    #[test]
    fn test_poller_publishes_fix() {
        let shared = SharedFix::new();
        let source = || -> Result<PositionFix, LocationError> {
            Ok(PositionFix::new(point(35.7810, -78.6370)))
        };

        let poller = FixPoller::spawn(source, shared.clone(), Duration::from_millis(10)).unwrap();

        assert!(wait_until(|| shared.has_fix()), "Poller never published a fix");
        assert_eq!(shared.position().unwrap(), point(35.7810, -78.6370));

        poller.stop();
    }

    #[test]
    fn test_poller_reports_failures() {
        let shared = SharedFix::new();
        let source = || -> Result<PositionFix, LocationError> {
            Err(LocationError::ReadFailed("device unplugged".to_string()))
        };

        let poller = FixPoller::spawn(source, shared.clone(), Duration::from_millis(10)).unwrap();

        assert!(wait_until(|| matches!(
            shared.current_fix(),
            Err(LocationError::ReadFailed(_))
        )));

        poller.stop();
    }

    #[test]
    fn test_poller_stops_on_drop() {
        let reads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&reads);
        let source = move || -> Result<PositionFix, LocationError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(LocationError::NoFix)
        };

        let poller = FixPoller::spawn(source, SharedFix::new(), Duration::from_millis(5)).unwrap();
        assert!(wait_until(|| reads.load(Ordering::SeqCst) >= 2));
        drop(poller);

        let after_stop = reads.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(reads.load(Ordering::SeqCst), after_stop);
    }
}
