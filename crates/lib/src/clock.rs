//! Time provider abstraction
//!
//! Account creation timestamps come from a [`Clock`] so production code reads
//! the system time while tests can pin it.
//!
//! # Example
//!
//! ```
//! use radar::{Clock, SystemClock};
//!
//! let clock = SystemClock;
//! assert!(clock.now_secs() > 0);
//! ```

use std::fmt::Debug;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(any(test, feature = "testing"))]
use std::sync::Mutex;

/// A time provider for getting current timestamps.
pub trait Clock: Send + Sync + Debug {
    /// Returns the current time as milliseconds since Unix epoch.
    fn now_millis(&self) -> u64;

    /// Get current time as seconds since Unix epoch.
    fn now_secs(&self) -> i64 {
        (self.now_millis() / 1000) as i64
    }
}

/// Production clock using real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Test clock that only moves when told to.
///
/// ```
/// use radar::{Clock, FixedClock};
///
/// let clock = FixedClock::new(5_000);
/// assert_eq!(clock.now_secs(), 5);
/// clock.advance(2_000);
/// assert_eq!(clock.now_secs(), 7);
/// ```
#[cfg(any(test, feature = "testing"))]
#[derive(Debug)]
pub struct FixedClock {
    millis: Mutex<u64>,
}

#[cfg(any(test, feature = "testing"))]
impl FixedClock {
    /// Create a new fixed clock with the given initial time in milliseconds.
    pub fn new(millis: u64) -> Self {
        Self {
            millis: Mutex::new(millis),
        }
    }

    /// Advance the clock by the given number of milliseconds.
    pub fn advance(&self, ms: u64) {
        *self.millis.lock().unwrap() += ms;
    }

    /// Set the clock to a specific time in milliseconds.
    pub fn set(&self, ms: u64) {
        *self.millis.lock().unwrap() = ms;
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        *self.millis.lock().unwrap()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for FixedClock {
    fn default() -> Self {
        // 2024-01-01 00:00:00 UTC
        Self::new(1704067200000)
    }
}
