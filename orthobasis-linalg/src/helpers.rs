//! Helper functions for dimension checks

use orthobasis_core::{OrthoError, Result};

use crate::traits::{NumericMatrix, NumericVector};

/// Check that two vectors have the same length
pub fn check_same_len<A, B>(a: &A, b: &B) -> Result<()>
where
    A: NumericVector,
    B: NumericVector,
{
    if a.len() != b.len() {
        return Err(OrthoError::dimension_mismatch(a.len(), b.len()));
    }
    Ok(())
}

/// Check that every vector in `vectors` has length `dim`
pub fn check_common_len<V: NumericVector>(vectors: &[V], dim: usize) -> Result<()> {
    match vectors.iter().find(|v| v.len() != dim) {
        Some(v) => Err(OrthoError::dimension_mismatch(dim, v.len())),
        None => Ok(()),
    }
}

/// Check that every component of every vector is finite
pub fn check_finite<V: NumericVector>(vectors: &[V]) -> Result<()> {
    for (vector, v) in vectors.iter().enumerate() {
        if let Some(index) = v.as_slice().iter().position(|x| !x.is_finite()) {
            return Err(OrthoError::NonFiniteComponent { vector, index });
        }
    }
    Ok(())
}

/// Check that a matrix is square
pub fn check_square<M: NumericMatrix>(m: &M) -> Result<()> {
    if !m.is_square() {
        return Err(OrthoError::dimension_mismatch(m.rows(), m.cols()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{vec3, DenseMatrix};

    #[test]
    fn test_check_same_len() {
        assert!(check_same_len(&vec3(1.0, 2.0, 3.0), &vec![0.0; 3]).is_ok());
        assert_eq!(
            check_same_len(&vec![0.0; 2], &vec3(1.0, 2.0, 3.0)),
            Err(OrthoError::DimensionMismatch { expected: 2, actual: 3 })
        );
    }

    #[test]
    fn test_check_common_len() {
        let vectors = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0]];
        assert!(check_common_len(&vectors[..2], 2).is_ok());
        assert_eq!(
            check_common_len(&vectors, 2),
            Err(OrthoError::DimensionMismatch { expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_check_finite() {
        let vectors = vec![vec3(1.0, 0.0, 0.0), vec3(0.0, f64::INFINITY, 0.0)];
        assert!(check_finite(&vectors[..1]).is_ok());
        assert_eq!(
            check_finite(&vectors),
            Err(OrthoError::NonFiniteComponent { vector: 1, index: 1 })
        );
        assert!(check_finite(&vec![vec![f64::NAN]]).is_err());
    }

    #[test]
    fn test_check_square() {
        assert!(check_square(&DenseMatrix::identity(3)).is_ok());
        assert!(check_square(&DenseMatrix::zeros(2, 3)).is_err());
    }
}
