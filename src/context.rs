//! Cancellation token threaded through every operation that performs I/O.
//!
//! Cancellation is cooperative: it is observed before each external call is
//! issued, never in the middle of a running subprocess.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{PackagesError, Result};

/// Caller-owned cancellation token
///
/// Clones share the same flag, so a clone handed to a signal handler or
/// another thread can cancel work running on the original.
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
}

impl Context {
    /// A context that is never cancelled unless [`Context::cancel`] is called
    pub fn background() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Fails with [`PackagesError::Cancelled`] once the context was cancelled
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(PackagesError::Cancelled);
        }
        Ok(())
    }
}
