//! Orthobasis Core - Fundamental types
//!
//! This crate provides the core types used throughout Orthobasis:
//! - `OrthoError`: Error kinds raised by vector operations and orthogonalization
//! - `ErrorReport`: Structured, serializable error form
//! - `OrthoConfig`: Per-call configuration (tolerance, normalization, budget)

mod config;
mod error;

pub use config::{ExcessBudget, OrthoConfig, ProjectionMode, Variant, DEFAULT_TOLERANCE};
pub use error::{codes, ErrorReport, OrthoError, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{ExcessBudget, OrthoConfig, OrthoError, Variant};
}
