//! Concrete vector and matrix kinds
//!
//! - [`DenseVector`] / [`DenseMatrix`]: heap storage of any size
//! - [`FixedVector`] / [`FixedMatrix`]: stack storage whose size is part of the type
//! - `Vec<f64>`: plain buffers, paired with [`DenseMatrix`]

use std::fmt;
use std::ops::{Index, IndexMut};

use nalgebra::{DMatrix, DVector, SMatrix, SVector};
use orthobasis_core::{OrthoError, Result};
use serde::{Deserialize, Serialize};

use crate::traits::{NumericMatrix, NumericVector};

/// A 2-dimensional fixed vector.
pub type Vec2 = FixedVector<2>;
/// A 3-dimensional fixed vector.
pub type Vec3 = FixedVector<3>;
/// A 4-dimensional fixed vector.
pub type Vec4 = FixedVector<4>;

/// Creates a [`Vec3`] from its components.
pub fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    FixedVector::new([x, y, z])
}

/// Heap-allocated vector of any positive length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct DenseVector(DVector<f64>);

impl DenseVector {
    /// Create from a list of elements; fails on an empty list
    pub fn from_vec(data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(OrthoError::EmptyVector);
        }
        Ok(DenseVector(DVector::from_vec(data)))
    }

    /// Create a zero vector of length `len`
    pub fn zeros(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(OrthoError::EmptyVector);
        }
        Ok(DenseVector(DVector::zeros(len)))
    }

    /// Create from nalgebra DVector
    pub fn from_dvector(data: DVector<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(OrthoError::EmptyVector);
        }
        Ok(DenseVector(data))
    }

    pub fn as_dvector(&self) -> &DVector<f64> {
        &self.0
    }

    pub fn into_dvector(self) -> DVector<f64> {
        self.0
    }

    /// Convert to Vec<f64>
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.as_slice().to_vec()
    }
}

impl NumericVector for DenseVector {
    type Matrix = DenseMatrix;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        self.0.as_mut_slice()
    }

    fn new_of_same_kind(&self, len: usize) -> Result<Self> {
        DenseVector::zeros(len)
    }

    fn new_matrix_of_same_kind(&self, rows: usize, cols: usize) -> Result<DenseMatrix> {
        Ok(DenseMatrix::zeros(rows, cols))
    }
}

impl TryFrom<Vec<f64>> for DenseVector {
    type Error = OrthoError;

    fn try_from(data: Vec<f64>) -> Result<Self> {
        DenseVector::from_vec(data)
    }
}

impl From<DenseVector> for Vec<f64> {
    fn from(v: DenseVector) -> Vec<f64> {
        v.to_vec()
    }
}

impl Index<usize> for DenseVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl IndexMut<usize> for DenseVector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

/// Stack-allocated vector whose length `N` is part of its type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedVector<const N: usize>(SVector<f64, N>);

impl<const N: usize> FixedVector<N> {
    pub fn new(elems: [f64; N]) -> Self {
        FixedVector(SVector::from(elems))
    }

    pub fn zeros() -> Self {
        FixedVector(SVector::zeros())
    }

    pub fn as_svector(&self) -> &SVector<f64, N> {
        &self.0
    }
}

impl<const N: usize> NumericVector for FixedVector<N> {
    type Matrix = FixedMatrix<N, N>;

    fn len(&self) -> usize {
        N
    }

    fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        self.0.as_mut_slice()
    }

    fn new_of_same_kind(&self, len: usize) -> Result<Self> {
        if len != N {
            return Err(OrthoError::dimension_mismatch(N, len));
        }
        Ok(FixedVector::zeros())
    }

    fn new_matrix_of_same_kind(&self, rows: usize, cols: usize) -> Result<FixedMatrix<N, N>> {
        if rows != N {
            return Err(OrthoError::dimension_mismatch(N, rows));
        }
        if cols != N {
            return Err(OrthoError::dimension_mismatch(N, cols));
        }
        Ok(FixedMatrix::zeros())
    }
}

impl<const N: usize> From<[f64; N]> for FixedVector<N> {
    fn from(elems: [f64; N]) -> Self {
        FixedVector::new(elems)
    }
}

impl<const N: usize> Index<usize> for FixedVector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for FixedVector<N> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl NumericVector for Vec<f64> {
    type Matrix = DenseMatrix;

    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn as_slice(&self) -> &[f64] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        self
    }

    fn new_of_same_kind(&self, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(OrthoError::EmptyVector);
        }
        Ok(vec![0.0; len])
    }

    fn new_matrix_of_same_kind(&self, rows: usize, cols: usize) -> Result<DenseMatrix> {
        Ok(DenseMatrix::zeros(rows, cols))
    }
}

/// Heap-allocated matrix of any shape
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix(DMatrix<f64>);

impl DenseMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        DenseMatrix(DMatrix::zeros(rows, cols))
    }

    pub fn identity(n: usize) -> Self {
        DenseMatrix(DMatrix::identity(n, n))
    }

    /// Create from a list of rows, checking that every row has the same length
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let first = rows.first().ok_or_else(|| OrthoError::null_operand("matrix rows"))?;
        let cols = first.len();

        for row in rows {
            if row.len() != cols {
                return Err(OrthoError::dimension_mismatch(cols, row.len()));
            }
        }

        Ok(DenseMatrix(DMatrix::from_fn(rows.len(), cols, |i, j| rows[i][j])))
    }

    /// Create a matrix whose columns are the given vectors
    pub fn from_columns<V: NumericVector>(columns: &[V]) -> Result<Self> {
        let first = columns.first().ok_or_else(|| OrthoError::null_operand("matrix columns"))?;
        let rows = first.len();

        for col in columns {
            if col.len() != rows {
                return Err(OrthoError::dimension_mismatch(rows, col.len()));
            }
        }

        Ok(DenseMatrix(DMatrix::from_fn(rows, columns.len(), |i, j| {
            columns[j].as_slice()[i]
        })))
    }

    /// Create from nalgebra DMatrix
    pub fn from_dmatrix(data: DMatrix<f64>) -> Self {
        DenseMatrix(data)
    }

    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.0
    }

    pub fn into_dmatrix(self) -> DMatrix<f64> {
        self.0
    }

    pub fn transpose(&self) -> Self {
        DenseMatrix(self.0.transpose())
    }

    pub fn matmul(&self, other: &DenseMatrix) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(OrthoError::dimension_mismatch(self.cols(), other.rows()));
        }
        Ok(DenseMatrix(&self.0 * &other.0))
    }
}

impl NumericMatrix for DenseMatrix {
    fn rows(&self) -> usize {
        self.0.nrows()
    }

    fn cols(&self) -> usize {
        self.0.ncols()
    }

    fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.0.get((row, col)).copied()
    }

    fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let (rows, cols) = self.0.shape();
        match self.0.get_mut((row, col)) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(OrthoError::IndexOutOfRange {
                index: col * rows + row,
                len: rows * cols,
            }),
        }
    }
}

/// Stack-allocated `R × C` matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMatrix<const R: usize, const C: usize>(SMatrix<f64, R, C>);

impl<const R: usize, const C: usize> FixedMatrix<R, C> {
    pub fn zeros() -> Self {
        FixedMatrix(SMatrix::zeros())
    }

    pub fn as_smatrix(&self) -> &SMatrix<f64, R, C> {
        &self.0
    }
}

impl<const R: usize, const C: usize> NumericMatrix for FixedMatrix<R, C> {
    fn rows(&self) -> usize {
        R
    }

    fn cols(&self) -> usize {
        C
    }

    fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.0.get((row, col)).copied()
    }

    fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        match self.0.get_mut((row, col)) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(OrthoError::IndexOutOfRange {
                index: col * R + row,
                len: R * C,
            }),
        }
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.cols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", self.0[(i, j)])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

fn fmt_elements(elems: &[f64], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    for (i, val) in elems.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:.4}", val)?;
    }
    write!(f, "]")
}

impl fmt::Display for DenseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(self.as_slice(), f)
    }
}

impl<const N: usize> fmt::Display for FixedVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(self.as_slice(), f)
    }
}
