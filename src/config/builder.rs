//! FlakeIdConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::FlakeIdConfig;

/// Default configuration values
pub(super) const DEFAULT_CUSTOM_EPOCH: u64 = 1704067200000; // January 1, 2024 UTC
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for FlakeIdConfig
#[derive(Debug)]
pub struct FlakeIdConfigBuilder {
    pub(super) custom_epoch: u64,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
}

impl FlakeIdConfigBuilder {
    /// Create a new FlakeIdConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            custom_epoch: DEFAULT_CUSTOM_EPOCH,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set a custom epoch timestamp in milliseconds since the Unix epoch.
    ///
    /// The 41-bit timestamp field covers about 69 years from the epoch. Past
    /// that the field stays at its maximum: ids remain unique and ordered, but
    /// once that final millisecond's 4096 sequence numbers are used up,
    /// generation blocks. With `epoch(0)` this happens in 2039. Clock readings
    /// before the epoch count as millisecond 0.
    pub const fn epoch(mut self, epoch: u64) -> Self {
        self.custom_epoch = epoch;
        self
    }

    /// Set the custom epoch from a calendar date.
    /// Dates before 1970-01-01 clamp to the Unix epoch.
    pub fn epoch_datetime(mut self, epoch: DateTime<Utc>) -> Self {
        self.custom_epoch = epoch.timestamp_millis().max(0) as u64;
        self
    }

    /// Enable or disable micro spin before sleep on sequence exhaustion
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final FlakeIdConfig
    pub fn build(self) -> FlakeIdConfig {
        FlakeIdConfig::from_builder(self)
    }
}

impl Default for FlakeIdConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
