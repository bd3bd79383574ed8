//! Orthobasis Linalg - Vector and matrix contract
//!
//! Provides the numeric primitives the orthogonalizer is written against:
//! - Contract traits (`NumericVector`, `NumericMatrix`) with covariant factories
//! - Concrete kinds (dense heap storage, fixed-size stack storage, `Vec<f64>`)
//! - Vector operations (scalar product, norm, subtract, scale, dyadic product, projection)
//! - Decompositions (lu, qr, cholesky, svd, symmetric eigen, rank)
//!
//! Decompositions are delegated to `nalgebra`.

pub mod decompose;
mod helpers;
mod traits;
mod types;
pub mod vector_ops;

pub use helpers::{check_common_len, check_finite, check_same_len, check_square};
pub use traits::{NumericMatrix, NumericVector};
pub use types::{vec3, DenseMatrix, DenseVector, FixedMatrix, FixedVector, Vec2, Vec3, Vec4};
pub use vector_ops::{norm2, project, scalar_product};
