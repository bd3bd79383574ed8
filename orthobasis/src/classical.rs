//! Single-pass Gram-Schmidt without recovery
//!
//! Orthogonalizes the input in order and fails on the first vector whose
//! residual norm does not clear the tolerance.

use orthobasis_core::{OrthoConfig, OrthoError, ProjectionMode, Result};
use orthobasis_linalg::vector_ops::{add_scaled_assign, projection_coefficient};
use orthobasis_linalg::{check_common_len, check_finite, norm2, NumericVector};
use tracing::debug;

use crate::cancel::{self, CancelToken};
use crate::set::OrthogonalSet;

/// Accepted vectors always have a positive recorded norm, so any positive
/// squared norm is a valid projection target.
const PROJECTION_FLOOR: f64 = 0.0;

/// Orthogonalize `original` in a single pass.
///
/// With `num_requested == 0` every input vector is processed; otherwise only the first
/// `num_requested`. The residual check here is absolute: a residual norm at or below
/// `tolerance_dependent` fails with [`OrthoError::LinearlyDependentInput`].
pub fn gram_schmidt<V: NumericVector>(
    original: &[V],
    config: &OrthoConfig,
    cancel: Option<&CancelToken>,
) -> Result<OrthogonalSet<V>> {
    config.validate()?;

    let dim = original.first().ok_or(OrthoError::UndeterminedDimension)?.len();
    if dim == 0 {
        return Err(OrthoError::EmptyVector);
    }
    check_common_len(original, dim)?;
    check_finite(original)?;

    let count = if config.num_requested == 0 {
        if original.len() > dim {
            return Err(OrthoError::OverRequestedRank { requested: original.len(), dim });
        }
        original.len()
    } else {
        let requested = config.resolve_requested(dim)?;
        if original.len() < requested {
            return Err(OrthoError::InsufficientIndependentVectors {
                found: original.len(),
                requested,
            });
        }
        requested
    };

    let mut set = OrthogonalSet::with_capacity(count);

    for (index, source) in original[..count].iter().enumerate() {
        cancel::check(cancel, index)?;

        let mut candidate = source.clone();
        for j in 0..set.len() {
            let basis = &set.vectors[j];
            let reduced_from = match config.projection {
                ProjectionMode::Modified => &candidate,
                ProjectionMode::Classical => source,
            };
            let coefficient =
                projection_coefficient(reduced_from, basis, set.squared_norm(j), PROJECTION_FLOOR)?;
            add_scaled_assign(&mut candidate, basis, -coefficient)?;
        }

        let residual = norm2(&candidate);
        if residual <= config.tolerance_dependent {
            debug!(index, residual, "input vector is linearly dependent");
            return Err(OrthoError::LinearlyDependentInput { index });
        }

        debug!(index, residual, "accepted input vector");
        set.accept(candidate, residual, config.normalize);
        set.num_from_original += 1;
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use orthobasis_core::Variant;
    use orthobasis_linalg::{scalar_product, vec3, DenseVector, Vec3};

    fn config() -> OrthoConfig {
        OrthoConfig::new().with_variant(Variant::NonRobust)
    }

    #[test]
    fn test_orthonormalizes_independent_input() {
        let input = vec![vec3(1.0, 1.0, 0.0), vec3(1.0, 0.0, 1.0), vec3(0.0, 1.0, 1.0)];
        let set = gram_schmidt(&input, &config(), None).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.num_from_original, 3);
        for v in &set.vectors {
            assert_abs_diff_eq!(norm2(v), 1.0, epsilon = 1e-12);
        }
        assert!(set.is_orthogonal(1e-12).unwrap());

        // First direction is the first input, scaled
        let s = 1.0 / 2.0_f64.sqrt();
        assert_abs_diff_eq!(set.vectors[0][0], s, epsilon = 1e-12);
        assert_abs_diff_eq!(set.vectors[0][1], s, epsilon = 1e-12);
    }

    #[test]
    fn test_unnormalized_norms() {
        let input = vec![vec![3.0, 4.0], vec![1.0, 0.0]];
        let set = gram_schmidt(&input, &config().with_normalize(false), None).unwrap();
        assert_abs_diff_eq!(set.norms[0], 5.0, epsilon = 1e-12);
        // (1,0) minus its projection on (3,4): (1,0) - 3/25 (3,4) = (16/25, -12/25)
        assert_abs_diff_eq!(set.norms[1], 0.8, epsilon = 1e-12);
        let dot = scalar_product(&set.vectors[0], &set.vectors[1]).unwrap();
        assert_abs_diff_eq!(dot, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let input = vec![vec3(1.0, 0.0, 0.0), vec3(0.0, f64::NAN, 0.0)];
        assert_eq!(
            gram_schmidt(&input, &config(), None),
            Err(OrthoError::NonFiniteComponent { vector: 1, index: 1 })
        );
    }

    #[test]
    fn test_zero_length_input_rejected() {
        let input = vec![Vec::<f64>::new()];
        assert_eq!(gram_schmidt(&input, &config(), None), Err(OrthoError::EmptyVector));
    }

    #[test]
    fn test_dependent_input_fails() {
        let input = vec![vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), vec3(2.0, -3.0, 0.0)];
        assert_eq!(
            gram_schmidt(&input, &config(), None),
            Err(OrthoError::LinearlyDependentInput { index: 2 })
        );
    }

    #[test]
    fn test_zero_vector_fails_even_with_zero_tolerance() {
        let input = vec![vec![0.0, 0.0]];
        assert_eq!(
            gram_schmidt(&input, &config().with_tolerance(0.0), None),
            Err(OrthoError::LinearlyDependentInput { index: 0 })
        );
    }

    #[test]
    fn test_classical_projection_matches_modified_on_easy_input() {
        let input = vec![vec3(2.0, 1.0, 0.0), vec3(1.0, 3.0, 1.0), vec3(0.0, 1.0, 4.0)];
        let modified = gram_schmidt(&input, &config(), None).unwrap();
        let classical_cfg = config().with_projection(ProjectionMode::Classical);
        let classical = gram_schmidt(&input, &classical_cfg, None).unwrap();
        for (a, b) in modified.vectors.iter().zip(&classical.vectors) {
            for i in 0..3 {
                assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_modified_is_more_orthogonal_on_near_dependent_input() {
        // Läuchli-style columns: classical Gram-Schmidt loses orthogonality here
        let eps = 1e-8;
        let input = vec![
            vec![1.0, eps, 0.0, 0.0],
            vec![1.0, 0.0, eps, 0.0],
            vec![1.0, 0.0, 0.0, eps],
        ];
        let cfg = config().with_tolerance(0.0);
        let worst = |set: &OrthogonalSet<Vec<f64>>| {
            let mut worst: f64 = 0.0;
            for i in 0..set.len() {
                for j in i + 1..set.len() {
                    let dot = scalar_product(&set.vectors[i], &set.vectors[j]).unwrap();
                    worst = worst.max(dot.abs());
                }
            }
            worst
        };
        let modified = gram_schmidt(&input, &cfg, None).unwrap();
        let classical_cfg = cfg.clone().with_projection(ProjectionMode::Classical);
        let classical = gram_schmidt(&input, &classical_cfg, None).unwrap();
        assert!(worst(&modified) < 1e-6);
        assert!(worst(&classical) > worst(&modified));
    }

    #[test]
    fn test_requested_prefix() {
        let input = vec![vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), vec3(1.0, 1.0, 0.0)];
        let set = gram_schmidt(&input, &config().with_num_requested(2), None).unwrap();
        assert_eq!(set.len(), 2);

        let short = vec![vec3(1.0, 0.0, 0.0)];
        assert_eq!(
            gram_schmidt(&short, &config().with_num_requested(2), None),
            Err(OrthoError::InsufficientIndependentVectors { found: 1, requested: 2 })
        );
    }

    #[test]
    fn test_dimension_errors() {
        let empty: Vec<Vec3> = vec![];
        assert_eq!(gram_schmidt(&empty, &config(), None), Err(OrthoError::UndeterminedDimension));

        let too_many = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
        assert_eq!(
            gram_schmidt(&too_many, &config(), None),
            Err(OrthoError::OverRequestedRank { requested: 3, dim: 2 })
        );

        let mixed = vec![
            DenseVector::from_vec(vec![1.0, 0.0]).unwrap(),
            DenseVector::from_vec(vec![1.0, 0.0, 0.0]).unwrap(),
        ];
        assert_eq!(
            gram_schmidt(&mixed, &config(), None),
            Err(OrthoError::DimensionMismatch { expected: 2, actual: 3 })
        );
    }

    #[test]
    fn test_cancelled_before_first_trial() {
        let token = CancelToken::new();
        token.cancel();
        let input = vec![vec3(1.0, 0.0, 0.0)];
        assert_eq!(
            gram_schmidt(&input, &config(), Some(&token)),
            Err(OrthoError::Cancelled { trials: 0 })
        );
    }
}
