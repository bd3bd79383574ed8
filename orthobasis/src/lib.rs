//! Orthobasis - Robust orthogonalization of vector sets
//!
//! Converts an arbitrary list of vectors (possibly linearly dependent, possibly
//! too short) into an orthogonal or orthonormal set of a requested size.
//!
//! ```text
//! input vectors ──► validate dimensions ──► for each candidate (input, then random):
//!                                              subtract projections onto accepted set
//!                                              accept if residual clears tolerance
//! ```
//!
//! Two procedures are available through [`Variant`]:
//! - `Robust`: dependent inputs are skipped; missing rank is filled with random
//!   candidates drawn from a caller-supplied [`RandomSource`], within an explicit budget
//! - `NonRobust`: a single pass that fails on the first dependent input
//!
//! Outputs are created through the factory methods of the input vectors, so a
//! caller orthogonalizing [`Vec3`]s gets [`Vec3`]s back.

mod cancel;
mod classical;
mod orthogonalizer;
mod random;
mod request;
mod robust;
mod set;

pub use cancel::CancelToken;
pub use classical::gram_schmidt;
pub use orthogonalizer::{orthogonalize, Orthogonalizer};
pub use random::{entropy_source, fill_uniform, seeded, RandomSource};
pub use request::{execute_json, OrthoRequest, OrthoResponse};
pub use robust::robust_gram_schmidt;
pub use set::OrthogonalSet;

pub use orthobasis_core::{
    codes, ErrorReport, ExcessBudget, OrthoConfig, OrthoError, ProjectionMode, Result, Variant,
};
pub use orthobasis_linalg::{
    vec3, DenseMatrix, DenseVector, FixedMatrix, FixedVector, NumericMatrix, NumericVector, Vec2,
    Vec3, Vec4,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use orthobasis_linalg::{norm2, scalar_product};

    fn check_orthogonal<V: NumericVector>(set: &OrthogonalSet<V>, tolerance: f64) {
        for i in 0..set.len() {
            for j in i + 1..set.len() {
                let dot = scalar_product(&set.vectors[i], &set.vectors[j]).unwrap();
                let bound = tolerance * norm2(&set.vectors[i]) * norm2(&set.vectors[j]);
                assert!(dot.abs() <= bound, "vectors {} and {} not orthogonal: {}", i, j, dot);
            }
        }
    }

    #[test]
    fn test_rank_preservation_on_standard_basis() {
        let basis: Vec<DenseVector> = (0..4)
            .map(|i| {
                let mut v = DenseVector::zeros(4).unwrap();
                v[i] = 1.0;
                v
            })
            .collect();
        let set = orthogonalize(&basis, &OrthoConfig::new(), &mut seeded(0)).unwrap();
        assert_eq!(set.num_from_original, 4);
        assert_eq!(set.vectors, basis);
    }

    #[test]
    fn test_degeneracy_recovery() {
        let input = vec![vec3(1.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)];
        let config = OrthoConfig::new()
            .with_num_requested(3)
            .with_excess_budget(ExcessBudget::Excess(1));
        let set = orthogonalize(&input, &config, &mut seeded(99)).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.num_from_original, 1);
        check_orthogonal(&set, 1e-10);
    }

    #[test]
    fn test_budget_enforcement() {
        let input = vec![vec3(1.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)];
        let config = OrthoConfig::new()
            .with_num_requested(3)
            .with_excess_budget(ExcessBudget::Disabled);
        let err = orthogonalize(&input, &config, &mut seeded(99)).unwrap_err();
        assert_eq!(err.code(), codes::INSUFFICIENT_VECTORS);
    }

    #[test]
    fn test_over_request_rejection() {
        let input = vec![vec3(1.0, 2.0, 3.0)];
        let config = OrthoConfig::new().with_num_requested(4);
        assert_eq!(
            orthogonalize(&input, &config, &mut seeded(0)),
            Err(OrthoError::OverRequestedRank { requested: 4, dim: 3 })
        );
    }

    #[test]
    fn test_general_input_orthonormal() {
        let input = vec![
            vec![4.0, 1.0, 0.0, 2.0, 1.0],
            vec![1.0, 3.0, 1.0, 0.0, 0.0],
            vec![0.0, 1.0, 5.0, 1.0, 2.0],
        ];
        let config = OrthoConfig::new().with_excess_budget(ExcessBudget::Excess(3));
        let set = orthogonalize(&input, &config, &mut seeded(31)).unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.num_from_original, 3);
        check_orthogonal(&set, 1e-10);
        for v in &set.vectors {
            assert_abs_diff_eq!(norm2(v), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_determinism_across_runs() {
        let input = vec![vec3(1.0, 1.0, 1.0)];
        let config = OrthoConfig::new().with_excess_budget(ExcessBudget::Excess(2));
        let a = orthogonalize(&input, &config, &mut seeded(123)).unwrap();
        let b = orthogonalize(&input, &config, &mut seeded(123)).unwrap();
        assert_eq!(a, b);
    }
}
