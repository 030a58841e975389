//! Waiting out an exhausted millisecond
//!
//! A short spin catches the common case where the tick is about to roll over.
//! After that the waiter sleeps, doubling the pause up to [`MAX_PAUSE`], so a
//! stalled or pre-epoch clock costs no CPU.

use std::thread;
use std::time::Duration;

use crate::config::FlakeIdConfig;
use crate::time::{EpochClock, TimeSource};

const FIRST_PAUSE: Duration = Duration::from_millis(1);
const MAX_PAUSE: Duration = Duration::from_millis(100);

/// Wait policy derived from [`FlakeIdConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Backoff {
    spin_loops: u32,
    yield_every: u32,
}

impl Backoff {
    pub(crate) const fn from_config(config: &FlakeIdConfig) -> Self {
        Self {
            spin_loops: if config.spin_enabled() {
                config.spin_loops()
            } else {
                0
            },
            yield_every: config.spin_yield_every(),
        }
    }

    /// Block until `clock` ticks past `from`, returning the new tick
    pub(crate) fn wait_past<T: TimeSource>(&self, clock: &EpochClock<T>, from: u64) -> u64 {
        for i in 1..=self.spin_loops {
            let tick = clock.tick();
            if tick > from {
                return tick;
            }
            std::hint::spin_loop();
            if self.yield_every != 0 && i % self.yield_every == 0 {
                thread::yield_now();
            }
        }

        let mut pause = FIRST_PAUSE;
        loop {
            let tick = clock.tick();
            if tick > from {
                return tick;
            }
            thread::sleep(pause);
            pause = (pause * 2).min(MAX_PAUSE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_utils::MockClock;
    use std::time::Instant;

    fn epoch_clock(clock: &MockClock) -> EpochClock<MockClock> {
        EpochClock::new(clock.clone(), 1_000, u64::MAX)
    }

    #[test]
    fn test_disabled_spin_means_no_spin_loops() {
        let config = FlakeIdConfig::builder()
            .enable_spin(false)
            .spin_loops(64)
            .build();
        let backoff = Backoff::from_config(&config);
        assert_eq!(backoff.spin_loops, 0);
    }

    #[test]
    fn test_returns_immediately_once_past() {
        let clock = MockClock::new(1_200);
        let backoff = Backoff::from_config(&FlakeIdConfig::default());
        assert_eq!(backoff.wait_past(&epoch_clock(&clock), 100), 200);
    }

    #[test]
    fn test_waits_for_stalled_clock_without_spin() {
        let clock = MockClock::new(1_100);
        let config = FlakeIdConfig::builder().enable_spin(false).build();
        let backoff = Backoff::from_config(&config);

        let ticker = {
            let clock = clock.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                clock.advance(3);
            })
        };

        let started = Instant::now();
        assert_eq!(backoff.wait_past(&epoch_clock(&clock), 100), 103);
        assert!(started.elapsed() >= Duration::from_millis(15));
        ticker.join().unwrap();
    }

    #[test]
    fn test_pre_epoch_clock_waits_for_epoch() {
        // Tick stays 0 until the clock passes the epoch at 1_000
        let clock = MockClock::new(900);
        let backoff = Backoff::from_config(&FlakeIdConfig::default());

        let ticker = {
            let clock = clock.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(10));
                clock.set(1_001);
            })
        };

        assert_eq!(backoff.wait_past(&epoch_clock(&clock), 0), 1);
        ticker.join().unwrap();
    }
}
