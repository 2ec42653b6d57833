//! SemiorderError: Unified error type for lex-semiorder public APIs
//!
//! Every fallible operation in the crate (tracker construction, ingest,
//! batch extraction over caller-supplied point sets) returns this error
//! instead of panicking. Querying an empty tracker is *not* an error; those
//! queries return empty splits or `None`.

use thiserror::Error;

/// Unified error type for lex-semiorder operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SemiorderError {
    /// Slack and epsilon vectors must describe the same number of dimensions.
    #[error("Configuration error: slack has {slack} dimensions but epsilon has {epsilon}")]
    ThresholdLengthMismatch { slack: usize, epsilon: usize },
    /// A threshold vector needs at least one dimension.
    #[error("Configuration error: threshold vector must not be empty")]
    EmptyThresholds,
    /// Thresholds must be finite and non-negative.
    #[error("Configuration error: threshold {value} at dimension {dim} must be finite and >= 0")]
    InvalidThreshold { dim: usize, value: f64 },
    /// A point does not have the dimensionality the tracker was built for.
    #[error("Dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// NaN coordinates cannot be ordered and are rejected on entry.
    #[error("Point coordinate at dimension {dim} is NaN")]
    NanCoordinate { dim: usize },
    /// Internal state broke the candidate/discarded partition.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
