//! Transient user-facing notifications

use nodeplan_core::prelude::*;

/// Surfaces a short-lived message to the user (snackbar, toast, status line)
///
/// Fire-and-forget: implementations must not block the dialog loop.
pub trait Notifier: Send + Sync {
    fn show(&self, message: &str, duration_ms: u64);
}

/// Notifier that only writes to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show(&self, message: &str, duration_ms: u64) {
        info!(duration_ms, "notification: {}", message);
    }
}
