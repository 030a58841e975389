//! # FlakeId
//!
//! A Snowflake-style 64-bit unique ID generator for keying records in
//! embedded key-value stores.
//!
//! Generated identifiers are:
//! - 📈 Time-sorted (41-bit millisecond timestamp)
//! - 🌐 Partitioned by 5-bit datacenter and 5-bit worker IDs
//! - 🔄 Monotonic per generator, 4096 IDs per millisecond
//! - 🔒 Thread-safe
//! - 🔢 Exchanged as decimal strings, lossless for any consumer
//!
//! ```
//! let generator = flakeid::new_generator(1, 2)?;
//! let id = generator.next_id()?;
//! let parts = generator.extract.decompose_str(&id).unwrap();
//! assert_eq!((parts.worker_id, parts.datacenter_id), (1, 2));
//! # Ok::<(), flakeid::FlakeIdError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
pub mod time;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{FlakeIdConfig, FlakeIdConfigBuilder};
pub use error::FlakeIdError;
pub use extractor::{FlakeIdExtractor, FlakeIdParts};
pub use generator::FlakeId;
pub use time::{SystemClock, TimeSource};

/// Generate one decimal id from the process-wide default generator
pub fn generate_default_id() -> Result<String, FlakeIdError> {
    FlakeId::default_instance().next_id()
}

/// Create a generator with randomly assigned worker and datacenter IDs
pub fn new_random_generator() -> FlakeId {
    FlakeId::random()
}

/// Create a generator with explicit worker and datacenter IDs in [0, 31]
pub fn new_generator(worker_id: u8, datacenter_id: u8) -> Result<FlakeId, FlakeIdError> {
    FlakeId::new(worker_id, datacenter_id)
}
