//! Entry point dispatching to the configured procedure

use orthobasis_core::{OrthoConfig, Result, Variant};
use orthobasis_linalg::NumericVector;
use tracing::debug;

use crate::cancel::CancelToken;
use crate::classical::gram_schmidt;
use crate::random::{entropy_source, RandomSource};
use crate::robust::robust_gram_schmidt;
use crate::set::OrthogonalSet;

/// Orthogonalize `original` with `config`, drawing random candidates from `random`.
pub fn orthogonalize<V, R>(
    original: &[V],
    config: &OrthoConfig,
    random: &mut R,
) -> Result<OrthogonalSet<V>>
where
    V: NumericVector,
    R: RandomSource + ?Sized,
{
    Orthogonalizer::new(config.clone()).run(original, random)
}

/// Configured orthogonalizer with an optional cancellation token
#[derive(Debug, Clone, Default)]
pub struct Orthogonalizer {
    config: OrthoConfig,
    cancel: Option<CancelToken>,
}

impl Orthogonalizer {
    pub fn new(config: OrthoConfig) -> Self {
        Self { config, cancel: None }
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &OrthoConfig {
        &self.config
    }

    pub fn run<V, R>(&self, original: &[V], random: &mut R) -> Result<OrthogonalSet<V>>
    where
        V: NumericVector,
        R: RandomSource + ?Sized,
    {
        self.run_with_template(original, None, random)
    }

    /// Like [`run`](Self::run), with `template` supplying the dimension when `original` is empty.
    ///
    /// The non-robust variant ignores the template.
    pub fn run_with_template<V, R>(
        &self,
        original: &[V],
        template: Option<&V>,
        random: &mut R,
    ) -> Result<OrthogonalSet<V>>
    where
        V: NumericVector,
        R: RandomSource + ?Sized,
    {
        debug!(
            inputs = original.len(),
            variant = ?self.config.variant,
            requested = self.config.num_requested,
            "orthogonalizing"
        );
        let cancel = self.cancel.as_ref();
        match self.config.variant {
            Variant::Robust => {
                robust_gram_schmidt(original, template, &self.config, random, cancel)
            }
            Variant::NonRobust => gram_schmidt(original, &self.config, cancel),
        }
    }

    /// Run with a generator seeded from the operating system
    pub fn run_with_default_rng<V: NumericVector>(
        &self,
        original: &[V],
    ) -> Result<OrthogonalSet<V>> {
        self.run(original, &mut entropy_source())
    }
}
