use thiserror::Error;

/// Result type for weft-core operations
pub type Result<T> = std::result::Result<T, WeftError>;

/// Precondition violations detected by the transformations.
///
/// Nothing in the core recovers from these: the caller decides whether to
/// suppress the operation or surface the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WeftError {
    /// A pattern with zero length was given where one is required
    #[error("{transform}: pattern must contain at least one step")]
    InvalidPattern { transform: &'static str },

    /// A sequence with zero length was given where at least one step is required
    #[error("{operation}: sequence must contain at least one step")]
    EmptySequence { operation: &'static str },

    /// An explicit length that is not a positive step count
    #[error("length must be at least 1, got {0}")]
    InvalidLength(i64),
}
