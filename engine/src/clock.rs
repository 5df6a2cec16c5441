//! Wall-clock capability used to stamp `insertedAt` / `updatedAt`.
//!
//! The store never reads the system time directly; it asks the [`Clock`] it
//! was built with. Tests inject [`FixedClock`] or [`SteppingClock`] to get
//! reproducible timestamps.

use crate::Timestamp;
use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> Timestamp;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// A clock that starts at `start` and advances by `step` on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    start: Timestamp,
    step: Duration,
    ticks: AtomicI64,
}

impl SteppingClock {
    /// Create a clock whose first reading is `start`.
    pub fn new(start: Timestamp, step: Duration) -> Self {
        Self {
            start,
            step,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Timestamp {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        // saturates past i32::MAX readings
        let tick = i32::try_from(tick).unwrap_or(i32::MAX);
        self.start + self.step * tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn epoch() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap()
    }

    #[test]
    fn fixed_clock_never_moves() {
        let clock = FixedClock(epoch());
        assert_eq!(clock.now(), epoch());
        assert_eq!(clock.now(), epoch());
    }

    #[test]
    fn stepping_clock_advances_each_reading() {
        let clock = SteppingClock::new(epoch(), Duration::seconds(1));
        assert_eq!(clock.now(), epoch());
        assert_eq!(clock.now(), epoch() + Duration::seconds(1));
        assert_eq!(clock.now(), epoch() + Duration::seconds(2));
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
