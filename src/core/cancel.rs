//! Cooperative cancellation.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared flag checked by the integrators at the top of every step.
///
/// Clones share the same flag, so one clone can be handed to the integrator
/// settings while another is kept by a signal handler, another thread or the
/// derivative function itself. Once cancelled, a running `integrate` returns
/// the trajectory accumulated so far with [`crate::Status::Interrupted`].
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancel_requested: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancel_requested.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_requested.load(Ordering::Relaxed)
    }

    /// Clear a previous request so the token can be reused for another run.
    pub fn reset(&self) {
        self.cancel_requested.store(false, Ordering::Relaxed);
    }
}
