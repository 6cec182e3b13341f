//! Batch verifier
//!
//! Checks M independent statements that share one blinding base `W`. Each
//! statement gets its own single-round Sigma check with fresh coins `r`, `u`:
//!
//! ```text
//! R = r * W
//! z = r + u * <a, b>
//! z * W == R + u * C
//! ```
//!
//! There is no mixing across statements, so the checks run on the rayon pool
//! and the batch result is the AND of the statement results.

use crate::relation::{check_lengths, BatchStatement};
use crate::{BatchConfig, Result, VerifyError};
use ipa_algebra::{scalar_inner_product, AlgebraProvider, ChallengeSource};
use rayon::prelude::*;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Per-statement verifier coins
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct StatementCoins<F> {
    /// `r`, masks the response
    blinding: F,
    /// `u`, scales the claimed commitment
    combination: F,
}

/// Verifier for many small independent statements
pub struct BatchVerifier<A, C> {
    config: BatchConfig,
    challenges: C,
    _algebra: PhantomData<A>,
}

impl<A, C> BatchVerifier<A, C>
where
    A: AlgebraProvider,
    C: ChallengeSource<A::Scalar>,
{
    /// Create a verifier with the default configuration
    pub fn new(challenges: C) -> Self {
        Self::with_config(BatchConfig::default(), challenges)
    }

    /// Create a verifier with an explicit configuration
    pub fn with_config(config: BatchConfig, challenges: C) -> Self {
        Self {
            config,
            challenges,
            _algebra: PhantomData,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Accept iff every statement passes its check. Stops at the first
    /// rejected statement; an empty batch is accepted.
    #[instrument(skip_all, fields(statements = statements.len()), level = "debug")]
    pub fn verify(
        &mut self,
        statements: &[BatchStatement<A>],
        blinding_base: &A::Element,
    ) -> Result<bool> {
        for (index, statement) in statements.iter().enumerate() {
            check_lengths(
                statement.witness.len(),
                &[("encoding", statement.encoding.len())],
            )
            .map_err(|err| match err {
                VerifyError::InvalidInput(msg) => {
                    VerifyError::InvalidInput(format!("statement {index}: {msg}"))
                }
                other => other,
            })?;
        }

        // Coins are drawn on this thread so workers never share RNG state
        let coins: Vec<StatementCoins<A::Scalar>> = statements
            .iter()
            .map(|_| StatementCoins {
                blinding: self.challenges.challenge(),
                combination: self.challenges.challenge(),
            })
            .collect();

        let check = |(index, (statement, coins)): (usize, (&BatchStatement<A>, &StatementCoins<A::Scalar>))| {
            let outcome = check_statement::<A>(statement, coins, blinding_base);
            if let Ok(false) = outcome {
                debug!(statement = index, "batch statement rejected");
            }
            outcome
        };

        let parallel = self.config.parallel && statements.len() >= self.config.min_parallel_batch;
        let failure = if parallel {
            statements
                .par_iter()
                .zip(coins.par_iter())
                .enumerate()
                .map(check)
                .find_any(|outcome| !matches!(outcome, Ok(true)))
        } else {
            statements
                .iter()
                .zip(coins.iter())
                .enumerate()
                .map(check)
                .find(|outcome| !matches!(outcome, Ok(true)))
        };

        match failure {
            None => Ok(true),
            Some(outcome) => outcome,
        }
    }
}

impl<A, C: fmt::Debug> fmt::Debug for BatchVerifier<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchVerifier")
            .field("config", &self.config)
            .field("challenges", &self.challenges)
            .finish()
    }
}

fn check_statement<A: AlgebraProvider>(
    statement: &BatchStatement<A>,
    coins: &StatementCoins<A::Scalar>,
    blinding_base: &A::Element,
) -> Result<bool> {
    let value = scalar_inner_product(&statement.witness, &statement.encoding)?;

    let announcement = A::scale(&coins.blinding, blinding_base);
    let response = coins.blinding + coins.combination * value;

    let lhs = A::scale(&response, blinding_base);
    let rhs = A::add(
        &announcement,
        &A::scale(&coins.combination, &statement.commitment),
    );
    Ok(A::equal(&lhs, &rhs))
}

/// Verify a batch with the default configuration
pub fn verify_batch<A, C>(
    challenges: C,
    statements: &[BatchStatement<A>],
    blinding_base: &A::Element,
) -> Result<bool>
where
    A: AlgebraProvider,
    C: ChallengeSource<A::Scalar>,
{
    BatchVerifier::<A, C>::new(challenges).verify(statements, blinding_base)
}
