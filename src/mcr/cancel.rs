//! Cooperative cancellation for long-running transforms.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Returned when a run is aborted at a checkpoint. Partial output is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HumanizeError {
    #[error("Operation cancelled after {processed} of {total} commands")]
    Cancelled { processed: usize, total: usize },
}

/// Shared flag checked at every yield point.
///
/// Clones share the same flag, so one clone can be handed to a signal
/// handler while another is passed into the transform.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
