//! Headless mode - NDJSON event output for scripted dialog sessions
//!
//! Runs one edit dialog without any UI. Inputs come from a script (or stdin)
//! and everything the user would see is written to stdout as structured JSON
//! events, one per line.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","candidates":3,"action_types":2,"timestamp":1704700001000}
//! {"event":"notification","message":"Please fill in required fields","duration_ms":2000,"timestamp":1704700001200}
//! {"event":"submitted","node":{"id":"P1!a.DEPLOY",...},"timestamp":1704700002000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use nodeplan_app::services::{Diagnostic, DiagnosticSink, Notifier, TracingDiagnostics};
use nodeplan_app::SessionPhase;
use nodeplan_core::{Error, Node};

pub use runner::{run_edit, EditOptions};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Lookups arrived and the dialog accepts submits
    Ready {
        candidates: usize,
        action_types: usize,
        timestamp: i64,
    },

    /// Transient message shown to the user
    Notification {
        message: String,
        duration_ms: u64,
        timestamp: i64,
    },

    /// The dialog closed with a node
    Submitted { node: Box<Node>, timestamp: i64 },

    /// The dialog closed without a node
    Cancelled { timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(candidates: usize, action_types: usize) -> Self {
        Self::Ready {
            candidates,
            action_types,
            timestamp: Self::now(),
        }
    }

    pub fn notification(message: &str, duration_ms: u64) -> Self {
        Self::Notification {
            message: message.to_string(),
            duration_ms,
            timestamp: Self::now(),
        }
    }

    pub fn submitted(node: Node) -> Self {
        Self::Submitted {
            node: Box::new(node),
            timestamp: Self::now(),
        }
    }

    pub fn cancelled() -> Self {
        Self::Cancelled {
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Error event for a failed session, fatal per [`Error::is_fatal`]
    pub fn from_error(err: &Error) -> Self {
        Self::error(err.to_string(), err.is_fatal())
    }
}

/// Notifier that prints notifications as events
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessNotifier;

impl Notifier for HeadlessNotifier {
    fn show(&self, message: &str, duration_ms: u64) {
        HeadlessEvent::notification(message, duration_ms).emit();
    }
}

/// Logs every diagnostic and announces when the dialog becomes ready
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessDiagnostics;

impl DiagnosticSink for HeadlessDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        if let Diagnostic::PhaseChanged {
            from: SessionPhase::Initializing,
            to: SessionPhase::Ready,
            candidates,
            action_types,
        } = &diagnostic
        {
            HeadlessEvent::ready(*candidates, *action_types).emit();
        }
        TracingDiagnostics.report(diagnostic);
    }
}
