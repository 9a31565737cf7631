//! The node edit dialog: one event loop per open session
//!
//! [`NodeEditDialog::open`] drives an [`EditSession`] until it closes. User
//! edits arrive on the `inputs` channel; background task results arrive on an
//! internal channel. Both are processed one at a time through
//! [`handler::update`], so the session needs no locking.

use tokio::sync::mpsc;
use tracing::{debug, info};

use nodeplan_core::Node;

use crate::actions::handle_action;
use crate::config::DialogSettings;
use crate::handler;
use crate::message::{DialogInput, Message};
use crate::services::{ActionTypeCatalog, Diagnostic, NodeDirectory, Services};
use crate::state::EditSession;

/// Capacity of the internal task-result channel
const MESSAGE_CHANNEL_CAPACITY: usize = 64;

pub struct NodeEditDialog<D, C> {
    services: Services<D, C>,
    settings: DialogSettings,
}

impl<D, C> NodeEditDialog<D, C>
where
    D: NodeDirectory + Send + Sync + 'static,
    C: ActionTypeCatalog + Send + Sync + 'static,
{
    pub fn new(services: Services<D, C>, settings: DialogSettings) -> Self {
        Self { services, settings }
    }

    pub fn services(&self) -> &Services<D, C> {
        &self.services
    }

    /// Run a session to completion
    ///
    /// Returns the submitted node, or `None` when the user cancels. A closed
    /// `inputs` channel counts as a cancel.
    pub async fn open(
        &self,
        existing: Option<Node>,
        parent_id: impl Into<String>,
        mut inputs: mpsc::Receiver<DialogInput>,
    ) -> Option<Node> {
        let mut session = EditSession::open(existing, parent_id, self.settings.clone());
        info!("{}", session.title());

        let (msg_tx, mut msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        handle_action(handler::initialize(&session), msg_tx.clone(), &self.services);

        while !session.is_closed() {
            let message = tokio::select! {
                Some(msg) = msg_rx.recv() => msg,
                input = inputs.recv() => match input {
                    Some(input) => Message::Input(input),
                    None => {
                        debug!("Input channel closed, cancelling");
                        Message::Input(DialogInput::Cancel)
                    }
                },
            };
            self.process_message(&mut session, message, &msg_tx);
        }

        info!("Edit session closed: {:?}", session.outcome());
        session.into_result()
    }

    /// Run one message (and any follow-ups) through the update function
    pub fn process_message(
        &self,
        session: &mut EditSession,
        message: Message,
        msg_tx: &mpsc::Sender<Message>,
    ) {
        let mut msg = Some(message);
        while let Some(m) = msg {
            let before = session.phase;
            let result = handler::update(session, m);

            if session.phase != before {
                self.services.diagnostics.report(Diagnostic::PhaseChanged {
                    from: before,
                    to: session.phase,
                    candidates: session.candidates.len(),
                    action_types: session.action_types.len(),
                });
            }

            if let Some(action) = result.action {
                handle_action(action, msg_tx.clone(), &self.services);
            }

            msg = result.message;
        }
    }
}
