use thiserror::Error;

/// Represents errors that can occur during FlakeId operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlakeIdError {
    /// A worker or datacenter ID exceeds the width of its field
    #[error("{field} {value} is invalid. Maximum allowed value is {max}")]
    InvalidConfiguration {
        field: &'static str,
        value: u8,
        max: u8,
    },
    /// Error when clock moves backwards (system time issue)
    #[error("Clock moved backwards. Refusing to generate id for {delta} milliseconds")]
    ClockMovedBackward { delta: u64 },
}
