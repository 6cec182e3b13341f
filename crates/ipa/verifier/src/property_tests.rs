//! Property-based tests for verifier completeness and soundness

use crate::{
    commit, fold_round, verify_batch, BatchStatement, Bls12G1, FoldStatement, FoldingVerifier,
    RandomChallenges,
};
use bls12_381::{G1Projective, Scalar};
use ff::Field;
use group::Group;
use ipa_algebra::AlgebraProvider;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fold_setup(log_n: usize, index: u64, seed: u64) -> (FoldStatement<Bls12G1>, G1Projective, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = Bls12G1::random_element(&mut rng);
    let statement = FoldStatement::random(&mut rng, 1 << log_n, index, &w).unwrap();
    (statement, w, rng)
}

/// Honest statements are accepted for every challenge sequence
proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_fold_completeness(
        log_n in 0usize..6,
        index in any::<u64>(),
        seed in any::<u64>(),
    ) {
        let (statement, w, rng) = fold_setup(log_n, index, seed);
        let mut verifier = FoldingVerifier::new(RandomChallenges::new(rng));

        prop_assert!(verifier.verify(&statement, &w).unwrap());
    }
}

/// A single corrupted coordinate flips the result
proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_fold_soundness(
        log_n in 0usize..6,
        position in any::<usize>(),
        target in 0u8..4,
        seed in any::<u64>(),
    ) {
        let (mut statement, w, mut rng) = fold_setup(log_n, u64::MAX, seed);
        let i = position % statement.len();

        match target {
            0 => statement.witness[i] += Scalar::ONE,
            1 => statement.generators[i] += G1Projective::random(&mut rng),
            2 => statement.encoding[i] += Scalar::ONE,
            _ => statement.commitment += G1Projective::random(&mut rng),
        }

        let mut verifier = FoldingVerifier::new(RandomChallenges::new(rng));
        prop_assert!(!verifier.verify(&statement, &w).unwrap());
    }
}

/// One round keeps the folded commitment consistent with L, R and t
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_fold_round_consistency(
        log_n in 1usize..5,
        challenge in 1u64..,
        seed in any::<u64>(),
    ) {
        let (statement, w, _) = fold_setup(log_n, 0b0110, seed);
        let t = Scalar::from(challenge);
        let t_inv = t.invert().unwrap();

        let round = fold_round(&statement, &w, t).unwrap();
        let folded = &round.folded;

        prop_assert_eq!(folded.len(), statement.len() / 2);
        prop_assert_eq!(
            folded.commitment,
            round.l * t + statement.commitment + round.r * t_inv
        );
        prop_assert_eq!(
            folded.commitment,
            commit::<Bls12G1>(&folded.witness, &folded.generators, &folded.encoding, &w).unwrap()
        );
    }
}

/// A batch is accepted iff no statement is corrupted
proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_batch_single_corruption(
        m in 1usize..8,
        corrupted in proptest::option::of(any::<usize>()),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let w = Bls12G1::random_element(&mut rng);
        let mut statements: Vec<BatchStatement<Bls12G1>> = (0..m)
            .map(|_| BatchStatement::random(&mut rng, 8, 0b1000_0001, &w).unwrap())
            .collect();

        if let Some(position) = corrupted {
            let i = position % m;
            // Bit 7 of the index is set, so the witness change alters <a, b>
            statements[i].witness[7] += Scalar::ONE;
        }

        let accepted = verify_batch(RandomChallenges::new(rng), &statements, &w).unwrap();
        prop_assert_eq!(accepted, corrupted.is_none());
    }
}
