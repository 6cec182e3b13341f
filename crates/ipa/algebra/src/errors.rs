//! Error types for algebra operations

use thiserror::Error;

/// Result type for algebra operations
pub type Result<T> = std::result::Result<T, AlgebraError>;

/// Errors reported by the algebra layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Two operands of an inner product have different lengths
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Attempted to invert the additive identity
    #[error("Scalar is not invertible")]
    NonInvertible,
}
