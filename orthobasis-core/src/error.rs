//! Structured errors for orthogonalization
//!
//! Every failure terminates the call. There is no partial result: either a
//! complete orthogonal set is returned or one of these kinds is surfaced.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const NULL_OPERAND: &str = "NULL_OPERAND";
    pub const INDEX_OUT_OF_RANGE: &str = "INDEX_OUT_OF_RANGE";
    pub const EMPTY_VECTOR: &str = "EMPTY_VECTOR";
    pub const NON_FINITE: &str = "NON_FINITE";
    pub const UNDETERMINED_DIMENSION: &str = "UNDETERMINED_DIMENSION";
    pub const OVER_REQUESTED_RANK: &str = "OVER_REQUESTED_RANK";
    pub const DEGENERATE_PROJECTION: &str = "DEGENERATE_PROJECTION";
    pub const LINEARLY_DEPENDENT: &str = "LINEARLY_DEPENDENT";
    pub const INSUFFICIENT_VECTORS: &str = "INSUFFICIENT_VECTORS";
    pub const BUDGET_EXCEEDED: &str = "BUDGET_EXCEEDED";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
    pub const CANCELLED: &str = "CANCELLED";
    pub const DECOMPOSITION_FAILED: &str = "DECOMPOSITION_FAILED";
}

/// Result alias used across the workspace
pub type Result<T, E = OrthoError> = std::result::Result<T, E>;

/// Error kinds raised by the vector contract and the orthogonalizer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrthoError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Missing operand: {0}")]
    NullOperand(String),

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Empty vector: length must be at least 1")]
    EmptyVector,

    #[error("Input vector {vector} has a non-finite component at index {index}")]
    NonFiniteComponent { vector: usize, index: usize },

    #[error("Cannot determine vector dimension: no input vectors and no template")]
    UndeterminedDimension,

    #[error("Requested {requested} orthogonal vectors in a {dim}-dimensional space")]
    OverRequestedRank { requested: usize, dim: usize },

    #[error("Projection target has squared norm {squared_norm}, not above tolerance {tolerance}")]
    DegenerateProjectionTarget { squared_norm: f64, tolerance: f64 },

    #[error("Input vector {index} is linearly dependent on the preceding vectors")]
    LinearlyDependentInput { index: usize },

    #[error(
        "Found {found} independent input vectors, {requested} requested, and generation is disabled"
    )]
    InsufficientIndependentVectors { found: usize, requested: usize },

    #[error("Generated {generated} random candidates without reaching {requested} vectors")]
    GenerationBudgetExceeded { generated: usize, requested: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cancelled after {trials} trials")]
    Cancelled { trials: usize },

    #[error("Decomposition failed: {0}")]
    DecompositionFailed(String),
}

impl OrthoError {
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        OrthoError::DimensionMismatch { expected, actual }
    }

    pub fn null_operand(what: impl Into<String>) -> Self {
        OrthoError::NullOperand(what.into())
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        OrthoError::InvalidConfig(reason.into())
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            OrthoError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            OrthoError::NullOperand(_) => codes::NULL_OPERAND,
            OrthoError::IndexOutOfRange { .. } => codes::INDEX_OUT_OF_RANGE,
            OrthoError::EmptyVector => codes::EMPTY_VECTOR,
            OrthoError::NonFiniteComponent { .. } => codes::NON_FINITE,
            OrthoError::UndeterminedDimension => codes::UNDETERMINED_DIMENSION,
            OrthoError::OverRequestedRank { .. } => codes::OVER_REQUESTED_RANK,
            OrthoError::DegenerateProjectionTarget { .. } => codes::DEGENERATE_PROJECTION,
            OrthoError::LinearlyDependentInput { .. } => codes::LINEARLY_DEPENDENT,
            OrthoError::InsufficientIndependentVectors { .. } => codes::INSUFFICIENT_VECTORS,
            OrthoError::GenerationBudgetExceeded { .. } => codes::BUDGET_EXCEEDED,
            OrthoError::InvalidConfig(_) => codes::INVALID_CONFIG,
            OrthoError::Cancelled { .. } => codes::CANCELLED,
            OrthoError::DecompositionFailed(_) => codes::DECOMPOSITION_FAILED,
        }
    }

    /// Suggestion for fixing the error, if one applies
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            OrthoError::DimensionMismatch { .. } => Some("Ensure all vectors share one length"),
            OrthoError::NonFiniteComponent { .. } => Some("Remove NaN and infinite components"),
            OrthoError::UndeterminedDimension => {
                Some("Supply at least one input vector or a template vector")
            }
            OrthoError::OverRequestedRank { .. } => {
                Some("Request at most as many vectors as the space dimension")
            }
            OrthoError::LinearlyDependentInput { .. } => {
                Some("Use the robust variant to replace dependent vectors")
            }
            OrthoError::InsufficientIndependentVectors { .. } => {
                Some("Allow random generation by setting max_excess_generated >= 0")
            }
            OrthoError::GenerationBudgetExceeded { .. } => {
                Some("Raise max_excess_generated or lower tolerance_dependent")
            }
            OrthoError::InvalidConfig(_) => Some("tolerance_dependent must be finite and >= 0"),
            _ => None,
        }
    }
}

/// Structured, serializable form of an [`OrthoError`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&OrthoError> for ErrorReport {
    fn from(err: &OrthoError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion().map(str::to_string),
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
