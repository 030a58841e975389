//! Generator state: last issued tick (ms since epoch) + sequence counter
//!
//! Transitions are computed on a copy and committed by the caller, so a
//! failed generation never leaves the state half-updated.

use crate::error::FlakeIdError;

/// Last issued tick (ms since epoch, `None` before the first id) and sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct State {
    last_timestamp: Option<u64>,
    sequence: u16,
}

/// Outcome of applying a clock reading to the current state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// An id can be issued at this timestamp and sequence
    Issue { timestamp: u64, sequence: u16 },
    /// The millisecond's sequence space is used up
    Exhausted,
}

impl State {
    /// Create new state from timestamp and sequence
    #[inline(always)]
    pub const fn new(timestamp: u64, sequence: u16) -> Self {
        Self {
            last_timestamp: Some(timestamp),
            sequence,
        }
    }

    /// Last issued timestamp, `None` if nothing was issued yet
    #[inline(always)]
    #[allow(dead_code)] // Used in tests
    pub const fn last_timestamp(self) -> Option<u64> {
        self.last_timestamp
    }

    #[inline(always)]
    #[allow(dead_code)] // Used in tests
    pub const fn sequence(self) -> u16 {
        self.sequence
    }

    /// Apply a clock reading.
    ///
    /// `sequence_mask` is the all-ones value of the sequence field; the
    /// counter wraps through it to 0, which signals exhaustion.
    #[inline]
    pub fn advance(self, now: u64, sequence_mask: u16) -> Result<Transition, FlakeIdError> {
        let Some(last) = self.last_timestamp else {
            return Ok(Transition::Issue {
                timestamp: now,
                sequence: 0,
            });
        };

        if now < last {
            return Err(FlakeIdError::ClockMovedBackward { delta: last - now });
        }

        if now > last {
            return Ok(Transition::Issue {
                timestamp: now,
                sequence: 0,
            });
        }

        let sequence = self.sequence.wrapping_add(1) & sequence_mask;
        if sequence == 0 {
            Ok(Transition::Exhausted)
        } else {
            Ok(Transition::Issue {
                timestamp: now,
                sequence,
            })
        }
    }
}
