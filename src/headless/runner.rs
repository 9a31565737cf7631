//! Headless mode runner - one scripted dialog session without UI
//!
//! Loads the node directory and action-type catalog from JSON fixtures, opens
//! the dialog and feeds it scripted steps. The session result is emitted as
//! a `submitted` or `cancelled` event.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use nodeplan_app::config::load_settings;
use nodeplan_app::services::{InMemoryDirectory, NodeDirectory, StaticCatalog};
use nodeplan_app::{DialogInput, NodeEditDialog, Services};
use nodeplan_core::prelude::*;

use super::{HeadlessDiagnostics, HeadlessEvent, HeadlessNotifier};

/// Capacity of the scripted input channel
const INPUT_CHANNEL_CAPACITY: usize = 32;

/// What `nodeplan edit` was asked to do
#[derive(Debug, Clone)]
pub struct EditOptions {
    /// JSON array of nodes backing the directory
    pub nodes: PathBuf,
    /// JSON array of action types; empty catalog when absent
    pub action_types: Option<PathBuf>,
    pub parent_id: String,
    /// Id of the node to edit; create mode when absent
    pub node_id: Option<String>,
    /// NDJSON script; stdin when absent
    pub script: Option<PathBuf>,
    /// Directory holding `.nodeplan/config.toml`
    pub project: PathBuf,
}

/// One line of a dialog script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    /// Let timers run for a while
    Wait { wait_ms: u64 },
    /// Deliver an input to the dialog
    Input(DialogInput),
}

/// Parse one script line; blank lines and `#` comments yield `None`
pub fn parse_script_line(line: &str) -> Option<std::result::Result<ScriptStep, serde_json::Error>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(serde_json::from_str(trimmed))
}

/// Run one headless edit session
pub async fn run_edit(options: EditOptions) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("nodeplan starting in HEADLESS mode");
    info!("Nodes: {}", options.nodes.display());
    info!("═══════════════════════════════════════════════════════");

    let settings = load_settings(&options.project);

    let directory =
        InMemoryDirectory::from_json_file(&options.nodes).context("Loading node fixtures")?;
    let catalog = match &options.action_types {
        Some(path) => StaticCatalog::from_json_file(path).context("Loading action types")?,
        None => StaticCatalog::default(),
    };

    let existing = match &options.node_id {
        Some(id) => Some(
            directory
                .by_id(id)
                .await?
                .ok_or_else(|| Error::node_not_found(id.clone()))?,
        ),
        None => None,
    };

    let services = Services::new(directory, catalog, HeadlessNotifier)
        .with_diagnostics(HeadlessDiagnostics);
    let dialog = NodeEditDialog::new(services, settings.dialog);

    let (input_tx, input_rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
    let feeder = match &options.script {
        Some(path) => {
            let file = open_script(path).await?;
            Some(tokio::spawn(feed_script(BufReader::new(file), input_tx)))
        }
        None => {
            // Plain thread: a pending tokio stdin read would stall runtime shutdown
            std::thread::spawn(move || spawn_stdin_reader_blocking(input_tx));
            None
        }
    };

    match dialog.open(existing, options.parent_id.clone(), input_rx).await {
        Some(node) => HeadlessEvent::submitted(node).emit(),
        None => HeadlessEvent::cancelled().emit(),
    }

    if let Some(feeder) = feeder {
        feeder.abort();
    }

    info!("nodeplan headless mode exiting");
    Ok(())
}

async fn open_script(path: &Path) -> Result<tokio::fs::File> {
    tokio::fs::File::open(path)
        .await
        .map_err(|e| Error::fixture(path, e.to_string()))
}

/// Forward script steps to the dialog until the script ends or the dialog closes
///
/// Returning drops `input_tx`, which the dialog treats as a cancel.
pub async fn feed_script<R>(reader: R, input_tx: mpsc::Sender<DialogInput>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        match step_for_line(line_no, &line) {
            None => {}
            Some(ScriptStep::Wait { wait_ms }) => {
                tokio::time::sleep(Duration::from_millis(wait_ms)).await;
            }
            Some(ScriptStep::Input(input)) => {
                if input_tx.send(input).await.is_err() {
                    debug!("Dialog closed, stopping script at line {}", line_no);
                    break;
                }
            }
        }
    }

    debug!("Script finished after {} lines", line_no);
    Ok(())
}

/// Blocking counterpart of [`feed_script`] reading stdin
fn spawn_stdin_reader_blocking(input_tx: mpsc::Sender<DialogInput>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for (idx, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };
        match step_for_line(idx + 1, &line) {
            None => {}
            Some(ScriptStep::Wait { wait_ms }) => {
                std::thread::sleep(Duration::from_millis(wait_ms));
            }
            Some(ScriptStep::Input(input)) => {
                if input_tx.blocking_send(input).is_err() {
                    break;
                }
            }
        }
    }

    info!("Stdin reader exiting");
}

/// Parse a numbered script line, reporting invalid ones as non-fatal errors
fn step_for_line(line_no: usize, line: &str) -> Option<ScriptStep> {
    match parse_script_line(line)? {
        Ok(step) => {
            debug!("Script line {}: {:?}", line_no, step);
            Some(step)
        }
        Err(e) => {
            warn!("Invalid script line {}: {}", line_no, e);
            HeadlessEvent::error(format!("Invalid script line {}: {}", line_no, e), false).emit();
            None
        }
    }
}
