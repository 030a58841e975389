//! Core FlakeId generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last timestamp + sequence and their transitions
//! - `wait` - Spin and backoff strategies
//! - `generate` - ID generation logic
//! - `text_methods` - Decimal string boundary

mod generate;
mod state;
mod text_methods;
mod wait;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::Rng;

use crate::config::{
    FlakeIdConfig, DATACENTER_ID_BITS, DATACENTER_ID_SHIFT, SEQUENCE_BITS, TIMESTAMP_BITS,
    WORKER_ID_BITS, WORKER_ID_SHIFT,
};
use crate::error::FlakeIdError;
use crate::extractor::FlakeIdExtractor;
use crate::time::{EpochClock, SystemClock, TimeSource};

pub(crate) use state::State;
use wait::Backoff;

static DEFAULT_INSTANCE: Lazy<FlakeId> = Lazy::new(FlakeId::random);

/// Main ID generator with cache-line alignment
#[derive(Debug)]
#[repr(align(64))]
pub struct FlakeId<T: TimeSource = SystemClock> {
    // === Hot path fields ===
    pub(crate) state: Mutex<State>,
    id_prefix: u64,
    pub(crate) max_seq: u16,
    ts_shift: u8,
    clock: EpochClock<T>,
    backoff: Backoff,

    // === Cold path fields ===
    pub worker_id: u8,
    pub datacenter_id: u8,
    pub config: FlakeIdConfig,
    pub extract: FlakeIdExtractor,
}

impl FlakeId {
    pub const TIMESTAMP_BITS: u8 = TIMESTAMP_BITS;
    pub const DATACENTER_ID_BITS: u8 = DATACENTER_ID_BITS;
    pub const WORKER_ID_BITS: u8 = WORKER_ID_BITS;
    pub const SEQUENCE_BITS: u8 = SEQUENCE_BITS;
    pub const DATACENTER_ID_SHIFT: u8 = DATACENTER_ID_SHIFT;
    pub const WORKER_ID_SHIFT: u8 = WORKER_ID_SHIFT;

    /// Create with explicit worker and datacenter IDs, each in [0, 31]
    pub fn new(worker_id: u8, datacenter_id: u8) -> Result<Self, FlakeIdError> {
        Self::with_config(worker_id, datacenter_id, FlakeIdConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(
        worker_id: u8,
        datacenter_id: u8,
        config: FlakeIdConfig,
    ) -> Result<Self, FlakeIdError> {
        Self::with_time_source(worker_id, datacenter_id, config, SystemClock)
    }

    /// Create with randomly assigned worker and datacenter IDs
    pub fn random() -> Self {
        Self::random_with_config(FlakeIdConfig::default())
    }

    /// Create with randomly assigned IDs and custom configuration
    pub fn random_with_config(config: FlakeIdConfig) -> Self {
        Self::random_with_time_source(config, SystemClock)
    }

    /// Process-wide generator with random IDs, created on first use
    pub fn default_instance() -> &'static FlakeId {
        &DEFAULT_INSTANCE
    }
}

impl<T: TimeSource> FlakeId<T> {
    /// Create with explicit IDs, reading time from `time`
    pub fn with_time_source(
        worker_id: u8,
        datacenter_id: u8,
        config: FlakeIdConfig,
        time: T,
    ) -> Result<Self, FlakeIdError> {
        Self::validate_id("Worker ID", worker_id, config.max_worker_id())?;
        Self::validate_id("Datacenter ID", datacenter_id, config.max_datacenter_id())?;
        Ok(Self::build(worker_id, datacenter_id, config, time))
    }

    /// Create with random IDs, reading time from `time`
    pub fn random_with_time_source(config: FlakeIdConfig, time: T) -> Self {
        let mut rng = rand::rng();
        let worker_id = rng.random_range(0..=config.max_worker_id());
        let datacenter_id = rng.random_range(0..=config.max_datacenter_id());
        Self::build(worker_id, datacenter_id, config, time)
    }

    fn validate_id(field: &'static str, value: u8, max: u8) -> Result<(), FlakeIdError> {
        if value > max {
            return Err(FlakeIdError::InvalidConfiguration { field, value, max });
        }
        Ok(())
    }

    fn build(worker_id: u8, datacenter_id: u8, config: FlakeIdConfig, time: T) -> Self {
        tracing::debug!(
            worker_id,
            datacenter_id,
            epoch = config.epoch(),
            "created FlakeId generator"
        );
        Self {
            state: Mutex::new(State::default()),
            id_prefix: Self::compute_id_prefix(worker_id, datacenter_id, &config),
            max_seq: config.max_sequence_id(),
            ts_shift: config.timestamp_shift(),
            clock: EpochClock::new(time, config.epoch(), config.timestamp_mask()),
            backoff: Backoff::from_config(&config),
            worker_id,
            datacenter_id,
            config,
            extract: FlakeIdExtractor::new(config),
        }
    }

    #[inline(always)]
    fn compute_id_prefix(worker_id: u8, datacenter_id: u8, config: &FlakeIdConfig) -> u64 {
        ((datacenter_id as u64) << config.datacenter_id_shift())
            | ((worker_id as u64) << config.worker_id_shift())
    }

    /// Milliseconds since the configured epoch, clamped to the timestamp field
    #[inline(always)]
    pub(crate) fn now_ms(&self) -> u64 {
        self.clock.tick()
    }

    /// Block until the clock ticks past `from_ts`, returning the new tick
    pub(crate) fn wait_next_millis(&self, from_ts: u64) -> u64 {
        self.backoff.wait_past(&self.clock, from_ts)
    }

    /// Pack an epoch-relative tick and sequence with this generator's IDs
    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: u64, sequence: u16) -> u64 {
        (timestamp << self.ts_shift) | self.id_prefix | (sequence as u64)
    }

    /// Snapshot of the generator state
    #[inline]
    #[allow(dead_code)] // Used in tests
    pub(crate) fn state(&self) -> State {
        *self.state.lock()
    }
}
