//! The numeric vector and matrix contract
//!
//! Algorithms in this workspace are written against these traits only. Every
//! vector they return is built through the factory methods of an input
//! vector, so the output keeps the caller's concrete representation.

use std::fmt;

use orthobasis_core::{OrthoError, Result};

/// A dense, two-dimensional array of reals.
pub trait NumericMatrix: Clone + fmt::Debug {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Returns the element at (`row`, `col`), or `None` outside the matrix.
    fn get(&self, row: usize, col: usize) -> Option<f64>;

    /// Overwrites the element at (`row`, `col`).
    ///
    /// Fails with [`OrthoError::IndexOutOfRange`] when either index is outside the matrix; the
    /// reported index is the flattened column-major position.
    fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()>;

    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }
}

/// An ordered, fixed-length sequence of reals.
///
/// Implementors guarantee `len() >= 1` and that [`as_slice`](Self::as_slice) exposes exactly
/// `len()` contiguous elements.
pub trait NumericVector: Clone + fmt::Debug {
    /// The matrix kind produced alongside this vector kind (e.g. for dyadic products).
    type Matrix: NumericMatrix;

    fn len(&self) -> usize;

    fn as_slice(&self) -> &[f64];

    fn as_mut_slice(&mut self) -> &mut [f64];

    /// Creates a zero-filled vector of the same concrete kind with length `len`.
    ///
    /// Kinds with a fixed length fail with [`OrthoError::DimensionMismatch`] for any other length.
    fn new_of_same_kind(&self, len: usize) -> Result<Self>;

    /// Creates a zero-filled `rows × cols` matrix of the kind paired with this vector kind.
    fn new_matrix_of_same_kind(&self, rows: usize, cols: usize) -> Result<Self::Matrix>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<f64> {
        self.as_slice().get(index).copied()
    }

    fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.len();
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(OrthoError::IndexOutOfRange { index, len }),
        }
    }
}
