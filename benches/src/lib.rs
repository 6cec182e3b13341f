//! # IPA Benchmarks
//!
//! Criterion benchmarks comparing the two verification strategies.
//!
//! ## Usage
//!
//! ```bash
//! cargo bench --bench verification
//! ```

use bls12_381::G1Projective;
use ipa_verifier::{AlgebraProvider, BatchStatement, Bls12G1, FoldStatement};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Honest fold statement of size `n`, encoding the bits of `n`
pub fn fold_fixture(n: usize, seed: u64) -> (FoldStatement<Bls12G1>, G1Projective) {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = Bls12G1::random_element(&mut rng);
    let statement = FoldStatement::random(&mut rng, n, n as u64, &w)
        .expect("fixture sizes are non-zero");
    (statement, w)
}

/// `m` honest batch statements of width `n` sharing one blinding base
pub fn batch_fixture(m: usize, n: usize, seed: u64) -> (Vec<BatchStatement<Bls12G1>>, G1Projective) {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = Bls12G1::random_element(&mut rng);
    let statements = (0..m)
        .map(|_| {
            BatchStatement::random(&mut rng, n, n as u64, &w).expect("fixture sizes are non-zero")
        })
        .collect();
    (statements, w)
}
