//! The orthogonal set produced by both procedures

use orthobasis_core::Result;
use orthobasis_linalg::vector_ops::scale_assign;
use orthobasis_linalg::{norm2, scalar_product, NumericVector};

/// Accepted vectors in acceptance order, with their recorded norms
#[derive(Debug, Clone, PartialEq)]
pub struct OrthogonalSet<V> {
    /// Mutually orthogonal vectors, first accepted first
    pub vectors: Vec<V>,
    /// Recorded norm of each vector: 1 when normalized, otherwise the residual norm
    pub norms: Vec<f64>,
    /// Norm of each vector before optional normalization
    pub residual_norms: Vec<f64>,
    /// How many vectors came from the caller's input rather than random generation
    pub num_from_original: usize,
    /// How many random candidates were tried
    pub num_generated: usize,
}

impl<V: NumericVector> OrthogonalSet<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            vectors: Vec::with_capacity(capacity),
            norms: Vec::with_capacity(capacity),
            residual_norms: Vec::with_capacity(capacity),
            num_from_original: 0,
            num_generated: 0,
        }
    }

    /// Append `candidate`, whose current norm is `residual_norm`, scaling it first if requested
    pub(crate) fn accept(&mut self, mut candidate: V, residual_norm: f64, normalize: bool) {
        if normalize {
            scale_assign(&mut candidate, 1.0 / residual_norm);
            self.norms.push(1.0);
        } else {
            self.norms.push(residual_norm);
        }
        self.residual_norms.push(residual_norm);
        self.vectors.push(candidate);
    }

    /// Squared recorded norm of the `index`-th vector, as used for projections
    pub(crate) fn squared_norm(&self, index: usize) -> f64 {
        self.norms[index] * self.norms[index]
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// True when every pair satisfies `|v_i · v_j| <= tolerance * |v_i| * |v_j|`
    pub fn is_orthogonal(&self, tolerance: f64) -> Result<bool> {
        for (i, a) in self.vectors.iter().enumerate() {
            for b in &self.vectors[i + 1..] {
                let bound = tolerance * norm2(a) * norm2(b);
                if scalar_product(a, b)?.abs() > bound {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    pub fn into_vectors(self) -> Vec<V> {
        self.vectors
    }
}
