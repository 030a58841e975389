//! ID generation logic
//!
//! The whole read-compare-commit runs under the state lock, including the
//! wait for the next millisecond when the sequence is exhausted.

use super::state::{State, Transition};
use super::FlakeId;
use crate::error::FlakeIdError;
use crate::time::TimeSource;

impl<T: TimeSource> FlakeId<T> {
    /// Generate a new FlakeId as its packed 64-bit value
    ///
    /// # Errors
    /// Returns [`FlakeIdError::ClockMovedBackward`] if the clock reads earlier
    /// than the last issued timestamp. The generator state is left untouched.
    ///
    /// State, waiting and packing all use the same epoch-relative tick, so a
    /// clock still before the epoch keeps counting the sequence of tick 0.
    #[inline]
    pub fn generate(&self) -> Result<u64, FlakeIdError> {
        let mut state = self.state.lock();
        let now = self.now_ms();

        let (timestamp, sequence) = match state.advance(now, self.max_seq) {
            Ok(Transition::Issue {
                timestamp,
                sequence,
            }) => (timestamp, sequence),
            Ok(Transition::Exhausted) => (self.roll_over(now), 0),
            Err(err) => {
                tracing::warn!(
                    worker_id = self.worker_id,
                    datacenter_id = self.datacenter_id,
                    %err,
                    "refusing to generate id"
                );
                return Err(err);
            }
        };

        *state = State::new(timestamp, sequence);
        Ok(self.assemble_id(timestamp, sequence))
    }

    /// Wait out an exhausted millisecond, returning the next clock reading
    #[cold]
    #[inline(never)]
    fn roll_over(&self, exhausted_ts: u64) -> u64 {
        tracing::trace!(
            timestamp = exhausted_ts,
            "sequence exhausted, waiting for next millisecond"
        );
        self.wait_next_millis(exhausted_ts)
    }
}
