//! Vector-specific operations
//!
//! Binary operations accept any two vector kinds and fail with
//! [`OrthoError::DimensionMismatch`] when their lengths differ. In-place
//! `*_assign` forms cover the case where the result aliases an operand.

use orthobasis_core::{OrthoError, Result};
use tracing::trace;

use crate::helpers::check_same_len;
use crate::traits::{NumericMatrix, NumericVector};

/// Sum of element-wise products
pub fn scalar_product<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: NumericVector,
    B: NumericVector,
{
    check_same_len(a, b)?;
    Ok(a.as_slice().iter().zip(b.as_slice()).map(|(x, y)| x * y).sum())
}

/// Euclidean norm
pub fn norm2<V: NumericVector>(a: &V) -> f64 {
    a.as_slice().iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// `result = a - b`
pub fn subtract_into<A, B, R>(a: &A, b: &B, result: &mut R) -> Result<()>
where
    A: NumericVector,
    B: NumericVector,
    R: NumericVector,
{
    check_same_len(a, b)?;
    check_same_len(a, &*result)?;
    for ((r, x), y) in result.as_mut_slice().iter_mut().zip(a.as_slice()).zip(b.as_slice()) {
        *r = x - y;
    }
    Ok(())
}

/// `target = target - b`
pub fn subtract_assign<T, B>(target: &mut T, b: &B) -> Result<()>
where
    T: NumericVector,
    B: NumericVector,
{
    add_scaled_assign(target, b, -1.0)
}

/// `result = a * factor`
pub fn scale_into<A, R>(a: &A, factor: f64, result: &mut R) -> Result<()>
where
    A: NumericVector,
    R: NumericVector,
{
    check_same_len(a, &*result)?;
    for (r, x) in result.as_mut_slice().iter_mut().zip(a.as_slice()) {
        *r = x * factor;
    }
    Ok(())
}

/// `target = target * factor`
pub fn scale_assign<T: NumericVector>(target: &mut T, factor: f64) {
    for x in target.as_mut_slice() {
        *x *= factor;
    }
}

/// `target = target + b * factor`
pub fn add_scaled_assign<T, B>(target: &mut T, b: &B, factor: f64) -> Result<()>
where
    T: NumericVector,
    B: NumericVector,
{
    check_same_len(&*target, b)?;
    for (t, y) in target.as_mut_slice().iter_mut().zip(b.as_slice()) {
        *t += y * factor;
    }
    Ok(())
}

/// Outer product `a bᵀ`, built as the matrix kind paired with `a`
pub fn dyadic_product<A, B>(a: &A, b: &B) -> Result<A::Matrix>
where
    A: NumericVector,
    B: NumericVector,
{
    let mut result = a.new_matrix_of_same_kind(a.len(), b.len())?;
    for (i, x) in a.as_slice().iter().enumerate() {
        for (j, y) in b.as_slice().iter().enumerate() {
            result.set(i, j, x * y)?;
        }
    }
    Ok(result)
}

/// Coefficient `c` such that `c * onto` is the projection of `original` onto `onto`
///
/// `onto_squared_norm` is supplied by the caller and must exceed `tolerance`.
pub fn projection_coefficient<A, B>(
    original: &A,
    onto: &B,
    onto_squared_norm: f64,
    tolerance: f64,
) -> Result<f64>
where
    A: NumericVector,
    B: NumericVector,
{
    if !(onto_squared_norm > tolerance) {
        return Err(OrthoError::DegenerateProjectionTarget {
            squared_norm: onto_squared_norm,
            tolerance,
        });
    }
    let coefficient = scalar_product(original, onto)? / onto_squared_norm;
    trace!(coefficient, onto_squared_norm, "projection");
    Ok(coefficient)
}

/// Component of `original` along `onto`: `onto * (original · onto / onto_squared_norm)`
///
/// The result is a new vector of `onto`'s kind.
pub fn project<A, B>(original: &A, onto: &B, onto_squared_norm: f64, tolerance: f64) -> Result<B>
where
    A: NumericVector,
    B: NumericVector,
{
    let coefficient = projection_coefficient(original, onto, onto_squared_norm, tolerance)?;
    let mut result = onto.new_of_same_kind(onto.len())?;
    scale_into(onto, coefficient, &mut result)?;
    Ok(result)
}
