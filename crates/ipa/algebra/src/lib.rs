//! # IPA Algebra
//!
//! Group and scalar-field plumbing consumed by the inner-product relation
//! verifiers. Nothing in this crate implements curve arithmetic itself: the
//! [`AlgebraProvider`] trait adapts an existing `group::Group` implementation
//! and the rest of the crate is written against that trait.
//!
//! ## Components
//!
//! - [`AlgebraProvider`]: the operations the verifiers are allowed to use
//! - [`msm`]: scalar and group-valued inner products
//! - [`challenge`]: non-zero challenge sampling
//! - [`errors`]: algebra error type

pub mod challenge;
pub mod errors;
pub mod msm;
pub mod provider;

// Re-export key types
pub use challenge::{random_nonzero, ChallengeSource, RandomChallenges};
pub use errors::{AlgebraError, Result};
pub use msm::{msm, parallel_msm, scalar_inner_product};
pub use provider::{AlgebraProvider, GroupAlgebra};

/// BLS12-381 G1 algebra, the default provider
pub type Bls12G1 = GroupAlgebra<bls12_381::G1Projective>;

/// BLS12-381 G2 algebra
pub type Bls12G2 = GroupAlgebra<bls12_381::G2Projective>;
