//! Robust Gram-Schmidt with budgeted random recovery
//!
//! Candidates are drawn from the stream `original[0], original[1], ...,
//! random, random, ...`. A candidate that is (numerically) dependent on the
//! accepted subspace is skipped instead of failing the call. Once the input is
//! exhausted, random candidates scaled to the input's magnitude fill the
//! remaining rank, up to `(requested - accepted_from_input) + max_excess`
//! random trials.

use orthobasis_core::{ExcessBudget, OrthoConfig, OrthoError, Result};
use orthobasis_linalg::vector_ops::{add_scaled_assign, projection_coefficient};
use orthobasis_linalg::{check_common_len, check_finite, norm2, NumericVector};
use tracing::{debug, warn};

use crate::cancel::{self, CancelToken};
use crate::random::{fill_uniform, RandomSource};
use crate::set::OrthogonalSet;

const PROJECTION_FLOOR: f64 = 0.0;

/// Where a trial's candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Original(usize),
    Generated,
}

/// Orthogonalize `original`, substituting random candidates for missing rank.
///
/// `template` stands in for a pre-populated result slot: it supplies the dimension and the
/// factory for random candidates when `original` is empty. Returns a set of exactly the
/// requested size, or fails with one of the budget errors.
pub fn robust_gram_schmidt<V, R>(
    original: &[V],
    template: Option<&V>,
    config: &OrthoConfig,
    random: &mut R,
    cancel: Option<&CancelToken>,
) -> Result<OrthogonalSet<V>>
where
    V: NumericVector,
    R: RandomSource + ?Sized,
{
    config.validate()?;

    let factory = original.first().or(template).ok_or(OrthoError::UndeterminedDimension)?;
    let dim = factory.len();
    if dim == 0 {
        return Err(OrthoError::EmptyVector);
    }
    check_common_len(original, dim)?;
    check_finite(original)?;
    if let Some(t) = template {
        if t.len() != dim {
            return Err(OrthoError::dimension_mismatch(dim, t.len()));
        }
    }
    let requested = config.resolve_requested(dim)?;
    let tolerance = config.tolerance_dependent;

    let mut set = OrthogonalSet::with_capacity(requested);
    let mut max_norm_original = 0.0_f64;
    let mut trial = 0;

    while set.len() < requested {
        cancel::check(cancel, trial)?;
        let which = trial;
        trial += 1;

        let (mut candidate, source) = match original.get(which) {
            Some(v) => (v.clone(), Source::Original(which)),
            None => {
                let max_excess = match config.max_excess_generated {
                    ExcessBudget::Disabled => {
                        warn!(
                            found = set.num_from_original,
                            requested, "input exhausted and generation disabled"
                        );
                        return Err(OrthoError::InsufficientIndependentVectors {
                            found: set.num_from_original,
                            requested,
                        });
                    }
                    ExcessBudget::Excess(n) => n,
                };
                let budget = max_excess.saturating_add(requested - set.num_from_original);
                if set.num_generated >= budget {
                    warn!(
                        generated = set.num_generated,
                        requested, "random candidate budget exhausted"
                    );
                    return Err(OrthoError::GenerationBudgetExceeded {
                        generated: set.num_generated,
                        requested,
                    });
                }

                let mut v = factory.new_of_same_kind(dim)?;
                fill_uniform(&mut v, random, reference_norm(max_norm_original));
                set.num_generated += 1;
                (v, Source::Generated)
            }
        };

        let original_norm = norm2(&candidate);
        if let Source::Original(_) = source {
            max_norm_original = max_norm_original.max(original_norm);
        }

        // Global-scale check against the largest input seen so far
        let scale_ratio = original_norm / reference_norm(max_norm_original);
        if scale_ratio <= tolerance {
            debug!(trial = which, ?source, scale_ratio, "rejected negligible candidate");
            continue;
        }

        for j in 0..set.len() {
            let basis = &set.vectors[j];
            let coefficient =
                projection_coefficient(&candidate, basis, set.squared_norm(j), PROJECTION_FLOOR)?;
            add_scaled_assign(&mut candidate, basis, -coefficient)?;
        }

        // Per-candidate check against the candidate's own norm
        let residual = norm2(&candidate);
        let residual_ratio = residual / original_norm;
        if residual_ratio <= tolerance {
            debug!(trial = which, ?source, residual_ratio, "rejected dependent candidate");
            continue;
        }

        debug!(trial = which, ?source, residual_ratio, "accepted candidate");
        set.accept(candidate, residual, config.normalize);
        if let Source::Original(_) = source {
            set.num_from_original += 1;
        }
    }

    Ok(set)
}

/// Magnitude used to scale random candidates and to judge negligible ones
fn reference_norm(max_norm_original: f64) -> f64 {
    if max_norm_original > 0.0 {
        max_norm_original
    } else {
        1.0
    }
}
