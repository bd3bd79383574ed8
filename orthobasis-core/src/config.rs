//! Per-call orthogonalization configuration

use crate::error::{OrthoError, Result};
use serde::{Deserialize, Serialize};

/// Default relative tolerance below which a candidate counts as dependent
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Which Gram-Schmidt procedure to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Skip dependent input and fill missing rank with random candidates
    #[default]
    Robust,
    /// Single pass over the input; fails on the first dependent vector
    #[serde(rename = "classical-nonrobust")]
    NonRobust,
}

impl Variant {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "robust" => Some(Variant::Robust),
            "classical-nonrobust" | "nonrobust" | "classical" => Some(Variant::NonRobust),
            _ => None,
        }
    }
}

/// How the non-robust procedure projects a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Project the partially reduced candidate at each step
    #[default]
    Modified,
    /// Always project the untouched original vector
    Classical,
}

/// Allowance of random candidates beyond the strict minimum
///
/// Serialized as an integer: `-1` disables generation, `n >= 0` allows `n`
/// extra candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ExcessBudget {
    Disabled,
    Excess(usize),
}

impl Default for ExcessBudget {
    fn default() -> Self {
        ExcessBudget::Excess(0)
    }
}

impl TryFrom<i64> for ExcessBudget {
    type Error = OrthoError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            -1 => Ok(ExcessBudget::Disabled),
            n if n >= 0 => Ok(ExcessBudget::Excess(n as usize)),
            n => Err(OrthoError::invalid_config(format!(
                "max_excess_generated must be >= -1, got {}",
                n
            ))),
        }
    }
}

impl From<ExcessBudget> for i64 {
    fn from(budget: ExcessBudget) -> i64 {
        match budget {
            ExcessBudget::Disabled => -1,
            ExcessBudget::Excess(n) => n as i64,
        }
    }
}

/// Configuration for one orthogonalization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrthoConfig {
    /// Minimum residual-to-original norm ratio for acceptance
    pub tolerance_dependent: f64,
    /// Scale accepted vectors to unit norm
    pub normalize: bool,
    /// Target count; 0 means the common vector dimension
    pub num_requested: usize,
    pub max_excess_generated: ExcessBudget,
    pub variant: Variant,
    pub projection: ProjectionMode,
}

impl Default for OrthoConfig {
    fn default() -> Self {
        Self {
            tolerance_dependent: DEFAULT_TOLERANCE,
            normalize: true,
            num_requested: 0,
            max_excess_generated: ExcessBudget::default(),
            variant: Variant::default(),
            projection: ProjectionMode::default(),
        }
    }
}

impl OrthoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance_dependent = tolerance;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_num_requested(mut self, count: usize) -> Self {
        self.num_requested = count;
        self
    }

    pub fn with_excess_budget(mut self, budget: ExcessBudget) -> Self {
        self.max_excess_generated = budget;
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_projection(mut self, projection: ProjectionMode) -> Self {
        self.projection = projection;
        self
    }

    /// Check the numeric fields. A tolerance of exactly 0 is valid.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance_dependent.is_finite() || self.tolerance_dependent < 0.0 {
            return Err(OrthoError::invalid_config(format!(
                "tolerance_dependent must be finite and >= 0, got {}",
                self.tolerance_dependent
            )));
        }
        Ok(())
    }

    /// Resolve the requested count against the space dimension
    pub fn resolve_requested(&self, dim: usize) -> Result<usize> {
        let requested = if self.num_requested == 0 { dim } else { self.num_requested };
        if requested > dim {
            return Err(OrthoError::OverRequestedRank { requested, dim });
        }
        Ok(requested)
    }
}
