//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use nodeplan_core::{ActionType, Node};

use crate::handler::UpdateAction;
use crate::message::{Lookups, Message};
use crate::services::{ActionTypeCatalog, Diagnostic, NodeDirectory, Services};

/// Execute an action, spawning a background task where it needs I/O
///
/// Task results come back to the dialog loop as messages on `msg_tx`. A send
/// that fails means the dialog already closed, so the result is dropped.
pub fn handle_action<D, C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, services: &Services<D, C>)
where
    D: NodeDirectory + Send + Sync + 'static,
    C: ActionTypeCatalog + Send + Sync + 'static,
{
    match action {
        UpdateAction::LoadLookups { editing } => {
            let services = services.clone();
            tokio::spawn(async move {
                let lookups = load_lookups(&services, editing.as_deref()).await;
                let _ = msg_tx
                    .send(Message::LookupsLoaded(Box::new(lookups)))
                    .await;
            });
        }

        UpdateAction::ScheduleNameSettle { generation, delay } => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = msg_tx.send(Message::NameSettled { generation }).await;
            });
        }

        UpdateAction::CheckName { generation, name } => {
            let services = services.clone();
            tokio::spawn(async move {
                let result = services
                    .directory
                    .is_name_taken(&name)
                    .await
                    .map_err(|e| {
                        services.diagnostics.report(Diagnostic::NameCheckFailed {
                            name: name.clone(),
                            error: e.to_string(),
                        });
                        e.to_string()
                    });
                let _ = msg_tx
                    .send(Message::NameCheckCompleted {
                        generation,
                        name,
                        result,
                    })
                    .await;
            });
        }

        UpdateAction::Notify {
            message,
            duration_ms,
        } => {
            services.notifier.show(&message, duration_ms);
        }
    }
}

/// Fetch the node list, then the catalog; failures degrade to empty lists
async fn load_lookups<D, C>(services: &Services<D, C>, editing: Option<&Node>) -> Lookups
where
    D: NodeDirectory + Send + Sync,
    C: ActionTypeCatalog + Send + Sync,
{
    let nodes = match services.directory.list().await {
        Ok(nodes) => nodes,
        Err(e) => {
            log_lookup_failure("node list", &e);
            services.diagnostics.report(Diagnostic::NodeListFailed {
                error: e.to_string(),
            });
            Vec::new()
        }
    };

    let action_types: Vec<ActionType> = match services.catalog.list().await {
        Ok(types) => types,
        Err(e) => {
            log_lookup_failure("action types", &e);
            services.diagnostics.report(Diagnostic::ActionTypesFailed {
                error: e.to_string(),
            });
            Vec::new()
        }
    };

    let mut lookups = Lookups {
        nodes,
        action_types,
        ..Default::default()
    };

    if let Some(node) = editing {
        lookups.predecessors = match services.directory.predecessors_of(node).await {
            Ok(predecessors) => predecessors,
            Err(e) => {
                log_lookup_failure("predecessors", &e);
                services.diagnostics.report(Diagnostic::LookupFailed {
                    node_id: node.id.clone(),
                    error: e.to_string(),
                });
                Vec::new()
            }
        };

        if let Some(trigger_id) = &node.timer_trigger {
            lookups.timer_trigger = match services.directory.by_id(trigger_id).await {
                Ok(trigger) => trigger,
                Err(e) => {
                    log_lookup_failure("timer trigger", &e);
                    services.diagnostics.report(Diagnostic::LookupFailed {
                        node_id: trigger_id.clone(),
                        error: e.to_string(),
                    });
                    None
                }
            };
        }
    }

    debug!(
        "Lookups ready: {} nodes, {} action types, {} predecessors",
        lookups.nodes.len(),
        lookups.action_types.len(),
        lookups.predecessors.len()
    );
    lookups
}

fn log_lookup_failure(what: &str, e: &nodeplan_core::Error) {
    if e.is_recoverable() {
        warn!("Failed to fetch {}, continuing without: {}", what, e);
    } else {
        error!("Failed to fetch {}: {}", what, e);
    }
}
