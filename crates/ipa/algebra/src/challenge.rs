//! Challenge sampling
//!
//! Verifiers draw every round challenge and every per-statement coin through
//! a [`ChallengeSource`]. Each drawn value is used exactly once. The shipped
//! source samples directly from an RNG, standing in for a random oracle; a
//! transcript-hash source can implement the same trait to make the
//! verification non-interactive.

use ff::Field;
use rand_core::RngCore;

/// Source of fresh non-zero challenge scalars
pub trait ChallengeSource<F: Field> {
    /// Draw a fresh non-zero challenge
    fn challenge(&mut self) -> F;
}

impl<F: Field, C: ChallengeSource<F> + ?Sized> ChallengeSource<F> for &mut C {
    fn challenge(&mut self) -> F {
        (**self).challenge()
    }
}

/// Sample a uniformly random non-zero field element by rejection
pub fn random_nonzero<F: Field>(mut rng: impl RngCore) -> F {
    loop {
        let candidate = F::random(&mut rng);
        if !candidate.is_zero_vartime() {
            return candidate;
        }
    }
}

/// Challenges sampled uniformly from an injected RNG, rejecting zero
#[derive(Clone, Debug)]
pub struct RandomChallenges<R> {
    rng: R,
    drawn: u64,
}

impl<R: RngCore> RandomChallenges<R> {
    /// Wrap an RNG. Seed it for reproducible runs.
    pub fn new(rng: R) -> Self {
        Self { rng, drawn: 0 }
    }

    /// Number of challenges drawn so far
    pub fn drawn(&self) -> u64 {
        self.drawn
    }

    /// Recover the underlying RNG
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<F: Field, R: RngCore> ChallengeSource<F> for RandomChallenges<R> {
    fn challenge(&mut self) -> F {
        self.drawn += 1;
        random_nonzero(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bls12_381::Scalar;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_challenges_never_zero() {
        let mut source = RandomChallenges::new(StdRng::seed_from_u64(0));

        for _ in 0..10_000 {
            let t: Scalar = source.challenge();
            assert!(!bool::from(t.is_zero()));
        }
        assert_eq!(source.drawn(), 10_000);
    }

    #[test]
    fn test_source_matches_provider_sampling() {
        use crate::{AlgebraProvider, Bls12G1};

        let mut source = RandomChallenges::new(StdRng::seed_from_u64(17));
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..8 {
            let t: Scalar = source.challenge();
            assert_eq!(t, Bls12G1::random_nonzero_scalar(&mut rng));
        }
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RandomChallenges::new(StdRng::seed_from_u64(99));
        let mut b = RandomChallenges::new(StdRng::seed_from_u64(99));

        for _ in 0..16 {
            let x: Scalar = a.challenge();
            let y: Scalar = b.challenge();
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_consecutive_challenges_differ() {
        let mut source = RandomChallenges::new(StdRng::seed_from_u64(5));

        let x: Scalar = source.challenge();
        let y: Scalar = source.challenge();
        assert_ne!(x, y);
    }

    #[test]
    fn test_borrowed_source() {
        fn draw<C: ChallengeSource<Scalar>>(mut source: C) -> Scalar {
            source.challenge()
        }

        let mut source = RandomChallenges::new(StdRng::seed_from_u64(8));
        draw(&mut source);
        draw(&mut source);
        assert_eq!(source.drawn(), 2);
    }
}
