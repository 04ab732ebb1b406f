use thiserror::Error;

use crate::env::Channel;

/// Result type for environment operations.
pub type Result<T> = std::result::Result<T, EnvError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    /// `step` was called before the first `reset`.
    #[error("environment must be reset before stepping")]
    ResetNeeded,
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("invalid space: {0}")]
    InvalidSpace(String),
    #[error("{channel} shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch {
        channel: Channel,
        expected: usize,
        actual: usize,
    },
    #[error("{channel} value at index {index} is not finite")]
    NonFinite { channel: Channel, index: usize },
    /// A noise model failed for a reason other than shape.
    #[error("{channel} noise failed: {message}")]
    Noise { channel: Channel, message: String },
}
