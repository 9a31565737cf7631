//! Injectable diagnostic sink
//!
//! Collaborator failures and session phase changes are reported here so a
//! host can surface them (the headless runner turns phase changes into NDJSON
//! events). The default sink discards everything.

use nodeplan_core::prelude::*;

use crate::state::SessionPhase;

/// Something worth telling a host about, outside the normal result flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The node list could not be fetched; candidates degrade to empty
    NodeListFailed { error: String },
    /// The action-type catalog could not be fetched
    ActionTypesFailed { error: String },
    /// A predecessor or timer-trigger lookup for the edited node failed
    LookupFailed { node_id: String, error: String },
    /// A name availability check failed and was treated as available
    NameCheckFailed { name: String, error: String },
    /// The session moved to a new phase
    PhaseChanged {
        from: SessionPhase,
        to: SessionPhase,
        candidates: usize,
        action_types: usize,
    },
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl DiagnosticSink for NoopDiagnostics {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::NodeListFailed { error } => {
                warn!("Failed to fetch node list: {}", error)
            }
            Diagnostic::ActionTypesFailed { error } => {
                warn!("Failed to fetch action types: {}", error)
            }
            Diagnostic::LookupFailed { node_id, error } => {
                warn!("Lookup for {} failed: {}", node_id, error)
            }
            Diagnostic::NameCheckFailed { name, error } => {
                warn!("Name check for {} failed, treating as available: {}", name, error)
            }
            Diagnostic::PhaseChanged { from, to, .. } => {
                debug!("Edit session {:?} -> {:?}", from, to)
            }
        }
    }
}
