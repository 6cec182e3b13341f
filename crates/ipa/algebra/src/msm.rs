//! Inner products
//!
//! The relation uses two inner products: a scalar-valued one between two
//! scalar vectors, and a group-valued one between a scalar vector and a vector
//! of group elements. The latter is a multi-scalar multiplication (MSM) and
//! dominates verification cost, so it has a bucketed path for long inputs.

use crate::{AlgebraError, AlgebraProvider, Result};
use ff::{Field, PrimeField, PrimeFieldBits};
use rayon::prelude::*;
use std::cmp;

/// Below this length the MSM is computed term by term
const DIRECT_MSM_THRESHOLD: usize = 32;

/// Below this length [`parallel_msm`] falls back to [`msm`]
const PARALLEL_MSM_THRESHOLD: usize = 1024;

/// `sum_i a[i] * b[i]` over the scalar field
pub fn scalar_inner_product<F: Field>(a: &[F], b: &[F]) -> Result<F> {
    check_lengths(a.len(), b.len())?;

    Ok(a.iter().zip(b).fold(F::ZERO, |acc, (x, y)| acc + *x * y))
}

/// `sum_i scalars[i] * points[i]`
pub fn msm<A: AlgebraProvider>(scalars: &[A::Scalar], points: &[A::Element]) -> Result<A::Element> {
    check_lengths(scalars.len(), points.len())?;

    if scalars.is_empty() {
        return Ok(A::identity());
    }

    if scalars.len() <= DIRECT_MSM_THRESHOLD {
        return Ok(direct_msm::<A>(scalars, points));
    }

    Ok(pippenger_msm::<A>(scalars, points))
}

/// MSM split into rayon chunks, each reduced with [`msm`]
pub fn parallel_msm<A: AlgebraProvider>(
    scalars: &[A::Scalar],
    points: &[A::Element],
) -> Result<A::Element> {
    check_lengths(scalars.len(), points.len())?;

    if scalars.len() <= PARALLEL_MSM_THRESHOLD {
        return msm::<A>(scalars, points);
    }

    let chunk_size = cmp::max(
        PARALLEL_MSM_THRESHOLD,
        scalars.len() / rayon::current_num_threads(),
    );

    let partials: Vec<A::Element> = scalars
        .par_chunks(chunk_size)
        .zip(points.par_chunks(chunk_size))
        .map(|(scalar_chunk, point_chunk)| msm::<A>(scalar_chunk, point_chunk))
        .collect::<Result<_>>()?;

    Ok(partials
        .iter()
        .fold(A::identity(), |acc, partial| A::add(&acc, partial)))
}

fn check_lengths(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(AlgebraError::LengthMismatch { expected, actual });
    }
    Ok(())
}

fn direct_msm<A: AlgebraProvider>(scalars: &[A::Scalar], points: &[A::Element]) -> A::Element {
    scalars
        .iter()
        .zip(points)
        .map(|(scalar, point)| A::scale(scalar, point))
        .fold(A::identity(), |acc, term| A::add(&acc, &term))
}

/// Pippenger's bucket method. Windows are reduced in parallel and then
/// combined from the most significant window down.
fn pippenger_msm<A: AlgebraProvider>(scalars: &[A::Scalar], points: &[A::Element]) -> A::Element {
    let num_bits = <A::Scalar as PrimeField>::NUM_BITS as usize;
    let window_size = optimal_window_size(scalars.len());
    let num_windows = (num_bits + window_size - 1) / window_size;

    let digits: Vec<Vec<usize>> = scalars
        .par_iter()
        .map(|scalar| window_digits(scalar, num_bits, window_size))
        .collect();

    let window_sums: Vec<A::Element> = (0..num_windows)
        .into_par_iter()
        .map(|window| window_sum::<A>(&digits, points, window, window_size))
        .collect();

    let mut result = A::identity();
    for sum in window_sums.iter().rev() {
        for _ in 0..window_size {
            result = A::double(&result);
        }
        result = A::add(&result, sum);
    }
    result
}

fn window_sum<A: AlgebraProvider>(
    digits: &[Vec<usize>],
    points: &[A::Element],
    window: usize,
    window_size: usize,
) -> A::Element {
    let mut buckets = vec![A::identity(); (1 << window_size) - 1];

    for (scalar_digits, point) in digits.iter().zip(points) {
        let digit = scalar_digits[window];
        if digit > 0 {
            buckets[digit - 1] = A::add(&buckets[digit - 1], point);
        }
    }

    // sum_d d * bucket[d] via running sums
    let mut running_sum = A::identity();
    let mut result = A::identity();
    for bucket in buckets.iter().rev() {
        running_sum = A::add(&running_sum, bucket);
        result = A::add(&result, &running_sum);
    }
    result
}

/// Little-endian base-2^window_size digits of a scalar
fn window_digits<F: PrimeFieldBits>(scalar: &F, num_bits: usize, window_size: usize) -> Vec<usize> {
    let bits: Vec<bool> = scalar.to_le_bits().into_iter().take(num_bits).collect();

    bits.chunks(window_size)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .filter(|&(_, &bit)| bit)
                .fold(0usize, |acc, (offset, _)| acc | (1 << offset))
        })
        .collect()
}

/// Window size by input length
fn optimal_window_size(n: usize) -> usize {
    if n <= 1 {
        1
    } else if n <= 32 {
        3
    } else if n <= 128 {
        4
    } else if n <= 512 {
        5
    } else if n <= 2048 {
        6
    } else if n <= 8192 {
        7
    } else {
        8
    }
}
