//! Cooperative cancellation, checked once per trial

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use orthobasis_core::{OrthoError, Result};
use tracing::warn;

/// Shared flag a caller can raise to stop a running orthogonalization
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Fails with [`OrthoError::Cancelled`] if `token` has been raised
pub(crate) fn check(token: Option<&CancelToken>, trials: usize) -> Result<()> {
    match token {
        Some(t) if t.is_cancelled() => {
            warn!(trials, "orthogonalization cancelled");
            Err(OrthoError::Cancelled { trials })
        }
        _ => Ok(()),
    }
}
