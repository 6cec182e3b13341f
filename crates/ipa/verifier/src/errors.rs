//! Error types for verification
//!
//! A proof that fails its check is not an error: verifiers return `Ok(false)`.
//! Errors mean the call itself was malformed.

use ipa_algebra::AlgebraError;
use thiserror::Error;

/// Result type for verification
pub type Result<T> = std::result::Result<T, VerifyError>;

/// Errors that can occur during verification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Malformed statement: length mismatch, empty vectors, or a size that
    /// is not a power of two
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The algebra provider refused an operation
    #[error("Algebra failure: {0}")]
    AlgebraFailure(String),
}

impl VerifyError {
    /// Whether this error reports a malformed statement
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<AlgebraError> for VerifyError {
    fn from(err: AlgebraError) -> Self {
        match err {
            AlgebraError::LengthMismatch { .. } => Self::InvalidInput(err.to_string()),
            AlgebraError::NonInvertible => Self::AlgebraFailure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebra_error_mapping() {
        let mismatch: VerifyError = AlgebraError::LengthMismatch { expected: 4, actual: 2 }.into();
        assert_eq!(
            mismatch,
            VerifyError::InvalidInput("Length mismatch: expected 4, got 2".to_string())
        );

        let inversion: VerifyError = AlgebraError::NonInvertible.into();
        assert!(matches!(inversion, VerifyError::AlgebraFailure(_)));
        assert!(!inversion.is_invalid_input());
    }
}
