//! The algebra provider seam
//!
//! Verifiers never touch a concrete curve. They are generic over an
//! [`AlgebraProvider`], which names a scalar field and a prime-order group and
//! exposes exactly the operations the relation needs. [`GroupAlgebra`] adapts
//! any `group::Group` to that interface.

use crate::challenge::random_nonzero;
use crate::{AlgebraError, Result};
use ff::{Field, PrimeFieldBits};
use group::Group;
use rand_core::RngCore;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Group and field operations consumed by the verifiers
pub trait AlgebraProvider: Send + Sync + 'static {
    /// Scalar field of the group order
    type Scalar: PrimeFieldBits;

    /// Prime-order group element
    type Element: Copy + Eq + Debug + Send + Sync + 'static;

    /// Group composition
    fn add(a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Scalar action on a group element
    fn scale(scalar: &Self::Scalar, element: &Self::Element) -> Self::Element;

    /// Additive inverse of a group element
    fn negate(element: &Self::Element) -> Self::Element;

    /// The group identity
    fn identity() -> Self::Element;

    /// Whether `element` is the group identity
    fn is_identity(element: &Self::Element) -> bool;

    /// Sample a uniformly random group element
    fn random_element(rng: impl RngCore) -> Self::Element;

    /// `element + element`
    fn double(element: &Self::Element) -> Self::Element {
        Self::add(element, element)
    }

    /// Element equality
    fn equal(a: &Self::Element, b: &Self::Element) -> bool {
        a == b
    }

    /// Multiplicative inverse of a scalar
    fn invert(scalar: &Self::Scalar) -> Result<Self::Scalar> {
        Option::from(scalar.invert()).ok_or(AlgebraError::NonInvertible)
    }

    /// Sample a uniformly random scalar, zero included
    fn random_scalar(rng: impl RngCore) -> Self::Scalar {
        Self::Scalar::random(rng)
    }

    /// Sample a uniformly random non-zero scalar
    fn random_nonzero_scalar(rng: impl RngCore) -> Self::Scalar {
        random_nonzero(rng)
    }
}

/// [`AlgebraProvider`] over any `group::Group`
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupAlgebra<G>(PhantomData<G>);

impl<G> AlgebraProvider for GroupAlgebra<G>
where
    G: Group,
    G::Scalar: PrimeFieldBits,
{
    type Scalar = G::Scalar;
    type Element = G;

    fn add(a: &G, b: &G) -> G {
        *a + b
    }

    fn scale(scalar: &G::Scalar, element: &G) -> G {
        *element * scalar
    }

    fn negate(element: &G) -> G {
        -*element
    }

    fn identity() -> G {
        G::identity()
    }

    fn is_identity(element: &G) -> bool {
        element.is_identity().into()
    }

    fn random_element(rng: impl RngCore) -> G {
        G::random(rng)
    }

    fn double(element: &G) -> G {
        element.double()
    }
}
