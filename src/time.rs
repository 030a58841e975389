//! Time utilities for FlakeId generation
//!
//! Provides wall-clock time in milliseconds and the [`TimeSource`] seam the
//! generator reads it through.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// The generator never assumes this clock is monotonic: a reading below the
/// last recorded one is reported as
/// [`FlakeIdError::ClockMovedBackward`](crate::FlakeIdError::ClockMovedBackward).
/// Implement it to drive generation from a simulated clock.
pub trait TimeSource {
    /// Returns the current time in milliseconds since 1970-01-01T00:00:00Z.
    fn current_millis(&self) -> u64;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn current_millis(&self) -> u64 {
        unix_time_ms()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline(always)]
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }
}

/// A [`TimeSource`] read as milliseconds since a custom epoch.
///
/// Readings before the epoch collapse to 0 and readings past `max` collapse
/// to `max`, so the value always fits the timestamp field and never wraps.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EpochClock<T> {
    time: T,
    epoch: u64,
    max: u64,
}

impl<T: TimeSource> EpochClock<T> {
    pub(crate) const fn new(time: T, epoch: u64, max: u64) -> Self {
        Self { time, epoch, max }
    }

    /// Current tick in milliseconds since the epoch, clamped to `[0, max]`
    #[inline(always)]
    pub(crate) fn tick(&self) -> u64 {
        millis_since_epoch(self.time.current_millis(), self.epoch).min(self.max)
    }
}

/// Get current wall-clock time in milliseconds since Unix epoch.
/// A system clock set before 1970 reads as 0.
#[inline(always)]
pub fn unix_time_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Milliseconds elapsed between `epoch` and `unix_ms`, saturating at 0
#[inline(always)]
pub const fn millis_since_epoch(unix_ms: u64, epoch: u64) -> u64 {
    unix_ms.saturating_sub(epoch)
}
