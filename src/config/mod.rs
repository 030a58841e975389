//! Configuration for FlakeId generator
//!
//! The bit layout is fixed (41-bit timestamp, 5-bit datacenter, 5-bit worker,
//! 12-bit sequence). What varies per deployment is the epoch and how the
//! generator waits out an exhausted millisecond.

mod builder;

use chrono::{DateTime, Utc};

pub use builder::FlakeIdConfigBuilder;

/// Width of the timestamp field (ms since epoch, ~69 years)
pub const TIMESTAMP_BITS: u8 = 41;
pub const DATACENTER_ID_BITS: u8 = 5;
pub const WORKER_ID_BITS: u8 = 5;
pub const SEQUENCE_BITS: u8 = 12;

pub const WORKER_ID_SHIFT: u8 = SEQUENCE_BITS;
pub const DATACENTER_ID_SHIFT: u8 = WORKER_ID_SHIFT + WORKER_ID_BITS;

/// Configuration for FlakeId generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlakeIdConfig {
    custom_epoch: u64,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
}

impl FlakeIdConfig {
    /// Calculate mask for given number of bits
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u64 {
        (1u64 << bits) - 1
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: FlakeIdConfigBuilder) -> Self {
        Self {
            custom_epoch: b.custom_epoch,
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> FlakeIdConfigBuilder {
        FlakeIdConfigBuilder::new()
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.custom_epoch
    }

    /// Epoch as a calendar date
    pub fn epoch_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(i64::try_from(self.custom_epoch).ok()?)
    }

    #[inline(always)]
    pub const fn max_worker_id(&self) -> u8 {
        Self::calculate_mask(WORKER_ID_BITS) as u8
    }

    #[inline(always)]
    pub const fn max_datacenter_id(&self) -> u8 {
        Self::calculate_mask(DATACENTER_ID_BITS) as u8
    }

    #[inline(always)]
    pub const fn max_sequence_id(&self) -> u16 {
        Self::calculate_mask(SEQUENCE_BITS) as u16
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u8 {
        DATACENTER_ID_SHIFT + DATACENTER_ID_BITS
    }

    #[inline(always)]
    pub(crate) const fn datacenter_id_shift(&self) -> u8 {
        DATACENTER_ID_SHIFT
    }

    #[inline(always)]
    pub(crate) const fn worker_id_shift(&self) -> u8 {
        WORKER_ID_SHIFT
    }

    #[inline(always)]
    pub(crate) const fn timestamp_mask(&self) -> u64 {
        Self::calculate_mask(TIMESTAMP_BITS)
    }

    #[inline(always)]
    pub(crate) const fn datacenter_id_mask(&self) -> u64 {
        Self::calculate_mask(DATACENTER_ID_BITS)
    }

    #[inline(always)]
    pub(crate) const fn worker_id_mask(&self) -> u64 {
        Self::calculate_mask(WORKER_ID_BITS)
    }

    #[inline(always)]
    pub(crate) const fn sequence_mask(&self) -> u64 {
        Self::calculate_mask(SEQUENCE_BITS)
    }
}

impl Default for FlakeIdConfig {
    fn default() -> Self {
        Self::from_builder(FlakeIdConfigBuilder::new())
    }
}
