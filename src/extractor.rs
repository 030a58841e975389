use chrono::{DateTime, Utc};

use crate::config::FlakeIdConfig;

/// Components of a decoded FlakeId
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FlakeIdParts {
    /// Milliseconds since the generator's epoch
    pub timestamp: u64,
    pub datacenter_id: u8,
    pub worker_id: u8,
    pub sequence: u16,
}

/// FlakeId component extractor
#[derive(Debug, Copy, Clone)]
pub struct FlakeIdExtractor {
    config: FlakeIdConfig,
}

impl FlakeIdExtractor {
    /// Create a new FlakeId extractor with the given configuration
    pub(crate) fn new(config: FlakeIdConfig) -> Self {
        Self { config }
    }

    /// Extract timestamp component from a FlakeId
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> u64 {
        (id >> self.config.timestamp_shift()) & self.config.timestamp_mask()
    }

    /// Extract datacenter component from a FlakeId
    #[inline(always)]
    pub fn datacenter_id(&self, id: u64) -> u8 {
        ((id >> self.config.datacenter_id_shift()) & self.config.datacenter_id_mask()) as u8
    }

    /// Extract worker component from a FlakeId
    #[inline(always)]
    pub fn worker_id(&self, id: u64) -> u8 {
        ((id >> self.config.worker_id_shift()) & self.config.worker_id_mask()) as u8
    }

    /// Extract sequence component from a FlakeId
    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u16 {
        (id & self.config.sequence_mask()) as u16
    }

    /// Decompose FlakeId into all of its components
    #[inline]
    pub fn decompose(&self, id: u64) -> FlakeIdParts {
        FlakeIdParts {
            timestamp: self.timestamp(id),
            datacenter_id: self.datacenter_id(id),
            worker_id: self.worker_id(id),
            sequence: self.sequence(id),
        }
    }

    /// Decompose a decimal string FlakeId.
    ///
    /// Returns `None` unless `id` is a decimal `u64` with the sign bit clear.
    pub fn decompose_str(&self, id: &str) -> Option<FlakeIdParts> {
        let raw: u64 = id.parse().ok()?;
        (raw >> 63 == 0).then(|| self.decompose(raw))
    }

    /// Absolute creation time of a FlakeId
    pub fn datetime(&self, id: u64) -> Option<DateTime<Utc>> {
        let unix_ms = self.timestamp(id).checked_add(self.config.epoch())?;
        DateTime::<Utc>::from_timestamp_millis(i64::try_from(unix_ms).ok()?)
    }
}
