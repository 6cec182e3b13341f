//! Folding verifier
//!
//! Reduces one relation instance of size `n = 2^k` to a single-element
//! instance in `k` rounds. Each round commits to the two cross terms
//!
//! ```text
//! L = <aL, bR> * W + <aL, GR>
//! R = <aR, bL> * W + <aR, GL>
//! ```
//!
//! draws a fresh challenge `t` and folds
//!
//! ```text
//! a' = aL + t^-1 * aR      b' = bL + t * bR      G' = GL + t * GR
//! C' = t * L + C + t^-1 * R
//! ```
//!
//! The relation value of the folded vectors equals the old relation value
//! plus `t * L + t^-1 * R`, so any gap between `C` and the relation value
//! is carried unchanged down to the base case.

use crate::relation::{check_lengths, FoldStatement};
use crate::{FoldConfig, Result, VerifyError};
use ipa_algebra::{parallel_msm, scalar_inner_product, AlgebraProvider, ChallengeSource};
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Data produced by one fold round
pub struct FoldRound<A: AlgebraProvider> {
    /// Left cross term
    pub l: A::Element,
    /// Right cross term
    pub r: A::Element,
    /// Challenge the round was folded with
    pub challenge: A::Scalar,
    /// The half-size statement
    pub folded: FoldStatement<A>,
}

impl<A: AlgebraProvider> fmt::Debug for FoldRound<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoldRound")
            .field("l", &self.l)
            .field("r", &self.r)
            .field("challenge", &self.challenge)
            .field("folded", &self.folded)
            .finish()
    }
}

/// Fold `statement` once with challenge `t`.
///
/// The statement must have an even, non-zero size. A zero challenge is
/// reported as [`VerifyError::AlgebraFailure`].
pub fn fold_round<A: AlgebraProvider>(
    statement: &FoldStatement<A>,
    blinding_base: &A::Element,
    challenge: A::Scalar,
) -> Result<FoldRound<A>> {
    let n = statement.len();
    check_lengths(
        n,
        &[
            ("generators", statement.generators.len()),
            ("encoding", statement.encoding.len()),
        ],
    )?;
    if n % 2 != 0 {
        return Err(VerifyError::InvalidInput(format!(
            "cannot fold a statement of odd size {n}"
        )));
    }

    fold_parts(
        &statement.generators,
        &statement.witness,
        &statement.encoding,
        &statement.commitment,
        blinding_base,
        challenge,
    )
}

fn fold_parts<A: AlgebraProvider>(
    generators: &[A::Element],
    witness: &[A::Scalar],
    encoding: &[A::Scalar],
    commitment: &A::Element,
    blinding_base: &A::Element,
    t: A::Scalar,
) -> Result<FoldRound<A>> {
    let half = witness.len() / 2;
    let (g_lo, g_hi) = generators.split_at(half);
    let (a_lo, a_hi) = witness.split_at(half);
    let (b_lo, b_hi) = encoding.split_at(half);

    let l = A::add(
        &A::scale(&scalar_inner_product(a_lo, b_hi)?, blinding_base),
        &parallel_msm::<A>(a_lo, g_hi)?,
    );
    let r = A::add(
        &A::scale(&scalar_inner_product(a_hi, b_lo)?, blinding_base),
        &parallel_msm::<A>(a_hi, g_lo)?,
    );

    let t_inv = A::invert(&t)?;

    let folded = FoldStatement {
        generators: g_lo
            .iter()
            .zip(g_hi)
            .map(|(lo, hi)| A::add(lo, &A::scale(&t, hi)))
            .collect(),
        witness: a_lo.iter().zip(a_hi).map(|(lo, hi)| *lo + t_inv * hi).collect(),
        encoding: b_lo.iter().zip(b_hi).map(|(lo, hi)| *lo + t * hi).collect(),
        commitment: A::add(
            &A::add(&A::scale(&t, &l), commitment),
            &A::scale(&t_inv, &r),
        ),
    };

    Ok(FoldRound {
        l,
        r,
        challenge: t,
        folded,
    })
}

/// Logarithmic-round verifier for a single large statement
pub struct FoldingVerifier<A, C> {
    config: FoldConfig,
    challenges: C,
    _algebra: PhantomData<A>,
}

impl<A, C> FoldingVerifier<A, C>
where
    A: AlgebraProvider,
    C: ChallengeSource<A::Scalar>,
{
    /// Create a verifier with the default configuration
    pub fn new(challenges: C) -> Self {
        Self::with_config(FoldConfig::default(), challenges)
    }

    /// Create a verifier with an explicit configuration
    pub fn with_config(config: FoldConfig, challenges: C) -> Self {
        Self {
            config,
            challenges,
            _algebra: PhantomData,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &FoldConfig {
        &self.config
    }

    /// Verify a statement whose size is its witness length
    pub fn verify(&mut self, statement: &FoldStatement<A>, blinding_base: &A::Element) -> Result<bool> {
        self.verify_parts(
            &statement.generators,
            &statement.witness,
            &statement.encoding,
            &statement.commitment,
            blinding_base,
            statement.len(),
        )
    }

    /// Verify that `commitment` encodes `<witness, encoding>` under
    /// `generators` and `blinding_base`. Every vector must have length `n`,
    /// a power of two.
    #[instrument(skip_all, fields(n = n), level = "debug")]
    pub fn verify_parts(
        &mut self,
        generators: &[A::Element],
        witness: &[A::Scalar],
        encoding: &[A::Scalar],
        commitment: &A::Element,
        blinding_base: &A::Element,
        n: usize,
    ) -> Result<bool> {
        if n == 0 || !n.is_power_of_two() {
            return Err(VerifyError::InvalidInput(format!(
                "statement size {n} is not a power of two"
            )));
        }
        if n > self.config.max_size() {
            return Err(VerifyError::InvalidInput(format!(
                "statement size {n} exceeds {} fold rounds",
                self.config.max_rounds
            )));
        }
        if witness.len() != n {
            return Err(VerifyError::InvalidInput(format!(
                "witness vector has length {}, expected {n}",
                witness.len()
            )));
        }
        check_lengths(
            n,
            &[("generators", generators.len()), ("encoding", encoding.len())],
        )?;

        self.reduce(generators, witness, encoding, commitment, blinding_base, 0)
    }

    fn reduce(
        &mut self,
        generators: &[A::Element],
        witness: &[A::Scalar],
        encoding: &[A::Scalar],
        commitment: &A::Element,
        blinding_base: &A::Element,
        round: usize,
    ) -> Result<bool> {
        if witness.len() == 1 {
            let value = witness[0] * encoding[0];
            let expected = A::add(
                &A::scale(&value, blinding_base),
                &A::scale(&witness[0], &generators[0]),
            );
            let accepted = A::equal(commitment, &expected);
            debug!(rounds = round, accepted, "base case reached");
            return Ok(accepted);
        }

        let t = self.challenges.challenge();
        let FoldRound { folded, .. } =
            fold_parts::<A>(generators, witness, encoding, commitment, blinding_base, t)?;
        debug!(round, size = folded.len(), "folded statement");

        self.reduce(
            &folded.generators,
            &folded.witness,
            &folded.encoding,
            &folded.commitment,
            blinding_base,
            round + 1,
        )
    }
}

impl<A, C: fmt::Debug> fmt::Debug for FoldingVerifier<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoldingVerifier")
            .field("config", &self.config)
            .field("challenges", &self.challenges)
            .finish()
    }
}

/// Verify one statement by folding, with the default configuration
pub fn verify_fold<A, C>(
    challenges: C,
    generators: &[A::Element],
    witness: &[A::Scalar],
    encoding: &[A::Scalar],
    commitment: &A::Element,
    blinding_base: &A::Element,
    n: usize,
) -> Result<bool>
where
    A: AlgebraProvider,
    C: ChallengeSource<A::Scalar>,
{
    FoldingVerifier::<A, C>::new(challenges).verify_parts(
        generators,
        witness,
        encoding,
        commitment,
        blinding_base,
        n,
    )
}
