//! The inner-product relation
//!
//! A statement binds a witness vector `a` to a public commitment
//!
//! ```text
//! C = <a, b> * W + <a, G>
//! ```
//!
//! where `b` is the encoding vector, `G` the generator vector and `W` the
//! blinding base. The witness and encoding vectors are scalars, so `<a, b>` is
//! a scalar that scales `W`. The generators are group elements, so `<a, G>` is
//! an MSM. Batch statements carry no generators and commit to `<a, b> * W`
//! alone.

use crate::{Result, VerifyError};
use ff::Field;
use ipa_algebra::{parallel_msm, scalar_inner_product, AlgebraProvider};
use rand_core::RngCore;
use std::fmt;

/// `C = <witness, encoding> * blinding_base + <witness, generators>`
pub fn commit<A: AlgebraProvider>(
    witness: &[A::Scalar],
    generators: &[A::Element],
    encoding: &[A::Scalar],
    blinding_base: &A::Element,
) -> Result<A::Element> {
    check_lengths(
        witness.len(),
        &[("generators", generators.len()), ("encoding", encoding.len())],
    )?;

    let value = scalar_inner_product(witness, encoding)?;
    let binding = parallel_msm::<A>(witness, generators)?;
    Ok(A::add(&A::scale(&value, blinding_base), &binding))
}

/// `C = <witness, encoding> * blinding_base`, the commitment of a batch statement
pub fn commit_value<A: AlgebraProvider>(
    witness: &[A::Scalar],
    encoding: &[A::Scalar],
    blinding_base: &A::Element,
) -> Result<A::Element> {
    check_lengths(witness.len(), &[("encoding", encoding.len())])?;

    let value = scalar_inner_product(witness, encoding)?;
    Ok(A::scale(&value, blinding_base))
}

/// Bit decomposition of `index`, least significant bit first, as `n`
/// scalars. Positions past bit 63 are zero.
pub fn encode_index<F: Field>(index: u64, n: usize) -> Vec<F> {
    (0..n)
        .map(|i| {
            if i < u64::BITS as usize && (index >> i) & 1 == 1 {
                F::ONE
            } else {
                F::ZERO
            }
        })
        .collect()
}

/// Witness length must be non-zero and match every other vector
pub(crate) fn check_lengths(witness_len: usize, others: &[(&str, usize)]) -> Result<()> {
    if witness_len == 0 {
        return Err(VerifyError::InvalidInput("witness vector is empty".to_string()));
    }

    for &(name, len) in others {
        if len != witness_len {
            return Err(VerifyError::InvalidInput(format!(
                "{name} vector has length {len}, witness has length {witness_len}"
            )));
        }
    }
    Ok(())
}

/// A single relation instance, reduced by the folding verifier
pub struct FoldStatement<A: AlgebraProvider> {
    /// Public generator vector `G`
    pub generators: Vec<A::Element>,
    /// Witness vector `a`
    pub witness: Vec<A::Scalar>,
    /// Encoding vector `b`
    pub encoding: Vec<A::Scalar>,
    /// Claimed commitment `C`
    pub commitment: A::Element,
}

impl<A: AlgebraProvider> FoldStatement<A> {
    /// Build an honest statement by committing to `witness`
    pub fn new(
        generators: Vec<A::Element>,
        witness: Vec<A::Scalar>,
        encoding: Vec<A::Scalar>,
        blinding_base: &A::Element,
    ) -> Result<Self> {
        let commitment = commit::<A>(&witness, &generators, &encoding, blinding_base)?;
        Ok(Self {
            generators,
            witness,
            encoding,
            commitment,
        })
    }

    /// Honest statement of size `n` with random generators and witness,
    /// encoding the bits of `index`
    pub fn random(
        mut rng: impl RngCore,
        n: usize,
        index: u64,
        blinding_base: &A::Element,
    ) -> Result<Self> {
        let generators = (0..n).map(|_| A::random_element(&mut rng)).collect();
        let witness = (0..n).map(|_| A::random_scalar(&mut rng)).collect();
        Self::new(generators, witness, encode_index(index, n), blinding_base)
    }

    /// Statement size `n`
    pub fn len(&self) -> usize {
        self.witness.len()
    }

    /// Whether the statement has no coordinates
    pub fn is_empty(&self) -> bool {
        self.witness.is_empty()
    }
}

impl<A: AlgebraProvider> Clone for FoldStatement<A> {
    fn clone(&self) -> Self {
        Self {
            generators: self.generators.clone(),
            witness: self.witness.clone(),
            encoding: self.encoding.clone(),
            commitment: self.commitment,
        }
    }
}

impl<A: AlgebraProvider> fmt::Debug for FoldStatement<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoldStatement")
            .field("generators", &self.generators)
            .field("witness", &self.witness)
            .field("encoding", &self.encoding)
            .field("commitment", &self.commitment)
            .finish()
    }
}

/// One entry of a batch. All statements of a batch share a blinding base.
pub struct BatchStatement<A: AlgebraProvider> {
    /// Claimed commitment `C = <a, b> * W`
    pub commitment: A::Element,
    /// Witness vector `a`
    pub witness: Vec<A::Scalar>,
    /// Encoding vector `b`
    pub encoding: Vec<A::Scalar>,
}

impl<A: AlgebraProvider> BatchStatement<A> {
    /// Build an honest statement by committing to `witness`
    pub fn new(
        witness: Vec<A::Scalar>,
        encoding: Vec<A::Scalar>,
        blinding_base: &A::Element,
    ) -> Result<Self> {
        let commitment = commit_value::<A>(&witness, &encoding, blinding_base)?;
        Ok(Self {
            commitment,
            witness,
            encoding,
        })
    }

    /// Honest statement of width `n` with a random witness, encoding the
    /// bits of `index`
    pub fn random(
        mut rng: impl RngCore,
        n: usize,
        index: u64,
        blinding_base: &A::Element,
    ) -> Result<Self> {
        let witness = (0..n).map(|_| A::random_scalar(&mut rng)).collect();
        Self::new(witness, encode_index(index, n), blinding_base)
    }
}

impl<A: AlgebraProvider> Clone for BatchStatement<A> {
    fn clone(&self) -> Self {
        Self {
            commitment: self.commitment,
            witness: self.witness.clone(),
            encoding: self.encoding.clone(),
        }
    }
}

impl<A: AlgebraProvider> fmt::Debug for BatchStatement<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchStatement")
            .field("commitment", &self.commitment)
            .field("witness", &self.witness)
            .field("encoding", &self.encoding)
            .finish()
    }
}
