//! # IPA Verifier
//!
//! Verification engine for the inner-product relation
//!
//! ```text
//! C = <a, b> * W + <a, G>
//! ```
//!
//! Two interchangeable strategies are provided:
//!
//! - [`FoldingVerifier`]: one large statement, reduced in `log2(n)` rounds
//! - [`BatchVerifier`]: many small statements sharing `W`, checked
//!   independently and in parallel
//!
//! Both are generic over an [`AlgebraProvider`] and draw their randomness
//! from a [`ChallengeSource`]. A rejected statement is `Ok(false)`; errors are
//! reserved for malformed calls.

pub mod batch;
pub mod config;
pub mod errors;
pub mod fold;
pub mod relation;

#[cfg(test)]
mod property_tests;

// Re-export key types
pub use batch::{verify_batch, BatchVerifier};
pub use config::{BatchConfig, FoldConfig, VerifierConfig};
pub use errors::{Result, VerifyError};
pub use fold::{fold_round, verify_fold, FoldRound, FoldingVerifier};
pub use relation::{commit, commit_value, encode_index, BatchStatement, FoldStatement};

/// Re-export the algebra layer for convenience
pub use ipa_algebra;
pub use ipa_algebra::{AlgebraProvider, Bls12G1, Bls12G2, ChallengeSource, RandomChallenges};
