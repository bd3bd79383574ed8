//! Matrix decompositions
//!
//! The numerical work is delegated to `nalgebra`. Only the LU wrapper keeps
//! state: its determinant and inverse are computed on first use and cached.

use std::sync::OnceLock;

use nalgebra::{Dyn, LU};
use orthobasis_core::{OrthoError, Result};

use crate::helpers::check_square;
use crate::traits::NumericVector;
use crate::types::{DenseMatrix, DenseVector};

/// LU decomposition with partial pivoting and memoized derived values
#[derive(Debug)]
pub struct LuDecomposition {
    lu: LU<f64, Dyn, Dyn>,
    determinant: OnceLock<f64>,
    inverse: OnceLock<Option<DenseMatrix>>,
}

impl LuDecomposition {
    pub fn new(matrix: &DenseMatrix) -> Result<Self> {
        check_square(matrix)?;
        Ok(Self {
            lu: matrix.as_dmatrix().clone().lu(),
            determinant: OnceLock::new(),
            inverse: OnceLock::new(),
        })
    }

    pub fn determinant(&self) -> f64 {
        *self.determinant.get_or_init(|| self.lu.determinant())
    }

    pub fn inverse(&self) -> Result<DenseMatrix> {
        self.inverse
            .get_or_init(|| self.lu.try_inverse().map(DenseMatrix::from_dmatrix))
            .clone()
            .ok_or_else(|| OrthoError::DecompositionFailed("matrix is singular".to_string()))
    }

    /// Solve `A x = b`
    pub fn solve(&self, b: &DenseVector) -> Result<DenseVector> {
        let n = self.lu.l().nrows();
        if b.len() != n {
            return Err(OrthoError::dimension_mismatch(n, b.len()));
        }
        let x = self
            .lu
            .solve(b.as_dvector())
            .ok_or_else(|| OrthoError::DecompositionFailed("matrix is singular".to_string()))?;
        DenseVector::from_dvector(x)
    }

    /// Returns `(P, L, U)` with `P A = L U`
    pub fn unpack(&self) -> (DenseMatrix, DenseMatrix, DenseMatrix) {
        let l = self.lu.l();
        let u = self.lu.u();

        // Convert permutation to matrix by applying to identity
        let n = l.nrows();
        let mut p = nalgebra::DMatrix::<f64>::identity(n, n);
        self.lu.p().permute_rows(&mut p);

        (
            DenseMatrix::from_dmatrix(p),
            DenseMatrix::from_dmatrix(l),
            DenseMatrix::from_dmatrix(u),
        )
    }
}

/// QR decomposition, returns `(Q, R)`
pub fn qr(matrix: &DenseMatrix) -> (DenseMatrix, DenseMatrix) {
    let qr = matrix.as_dmatrix().clone().qr();
    (DenseMatrix::from_dmatrix(qr.q()), DenseMatrix::from_dmatrix(qr.r()))
}

/// Lower-triangular Cholesky factor `L` with `A = L Lᵀ`
pub fn cholesky(matrix: &DenseMatrix) -> Result<DenseMatrix> {
    check_square(matrix)?;
    let chol = matrix
        .as_dmatrix()
        .clone()
        .cholesky()
        .ok_or_else(|| {
            OrthoError::DecompositionFailed("matrix is not positive definite".to_string())
        })?;
    Ok(DenseMatrix::from_dmatrix(chol.l()))
}

/// Singular value decomposition `A = U Σ Vᵀ`
#[derive(Debug, Clone)]
pub struct Svd {
    pub u: DenseMatrix,
    pub singular_values: DenseVector,
    pub v_t: DenseMatrix,
}

pub fn svd(matrix: &DenseMatrix) -> Result<Svd> {
    let svd = matrix.as_dmatrix().clone().svd(true, true);
    let missing =
        || OrthoError::DecompositionFailed("SVD did not produce singular vectors".to_string());

    Ok(Svd {
        u: DenseMatrix::from_dmatrix(svd.u.ok_or_else(missing)?),
        singular_values: DenseVector::from_dvector(svd.singular_values)?,
        v_t: DenseMatrix::from_dmatrix(svd.v_t.ok_or_else(missing)?),
    })
}

/// Eigenvalues and column eigenvectors of a symmetric matrix
pub fn symmetric_eigen(matrix: &DenseMatrix) -> Result<(DenseVector, DenseMatrix)> {
    check_square(matrix)?;
    let eigen = matrix.as_dmatrix().clone().symmetric_eigen();
    Ok((
        DenseVector::from_dvector(eigen.eigenvalues)?,
        DenseMatrix::from_dmatrix(eigen.eigenvectors),
    ))
}

/// Numerical rank: singular values above `tolerance`
pub fn rank(matrix: &DenseMatrix, tolerance: f64) -> usize {
    matrix.as_dmatrix().rank(tolerance)
}
