//! Error types for the nixpy library.

use thiserror::Error;

/// Main error type for data array and dimension operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Sampling interval is zero, negative or not finite
    #[error("Invalid sampling interval: {0} (must be positive)")]
    InvalidSamplingInterval(f64),

    /// Dimension index out of bounds (indices are 1-based)
    #[error("Dimension index {index} out of bounds (count: {count})")]
    DimensionOutOfBounds { index: usize, count: usize },

    /// Dimension exists but has a different variant
    #[error("Dimension type mismatch: expected {expected}, got {actual}")]
    DimensionTypeMismatch { expected: String, actual: String },

    /// Tick index out of bounds on a range dimension
    #[error("Tick index {index} out of bounds (count: {count})")]
    TickOutOfBounds { index: usize, count: usize },

    /// Mandatory field was given no value
    #[error("Missing value for mandatory field '{0}'")]
    MissingValue(&'static str),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        Self::DimensionTypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Result type alias for nixpy operations.
pub type Result<T> = std::result::Result<T, Error>;
