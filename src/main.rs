//! nodeplan - plan-node edit dialog, driven headless
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nodeplan::EditOptions;
use nodeplan_app::config::init_config_dir;
use nodeplan_app::routes;
use nodeplan_core::prelude::*;

/// nodeplan - create and edit plan nodes from a script
#[derive(Parser, Debug)]
#[command(name = "nodeplan")]
#[command(about = "Plan-node edit dialog with NDJSON output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one create/edit dialog session
    Edit(EditArgs),

    /// Resolve a product-area path to its page
    Route {
        /// Path to resolve, e.g. `/nodedashboard`
        path: String,
    },

    /// Write a default `.nodeplan/config.toml`
    Init {
        /// Project directory (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        project: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct EditArgs {
    /// JSON array of existing nodes
    #[arg(long, value_name = "FILE")]
    nodes: PathBuf,

    /// JSON array of allowed action types
    #[arg(long, value_name = "FILE")]
    action_types: Option<PathBuf>,

    /// Parent the node belongs to
    #[arg(long, value_name = "ID")]
    parent: String,

    /// Edit this existing node instead of creating one
    #[arg(long, value_name = "ID")]
    node: Option<String>,

    /// NDJSON script of dialog inputs (stdin when omitted)
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Project directory holding `.nodeplan/config.toml`
    #[arg(long, value_name = "DIR")]
    project: Option<PathBuf>,
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    color_eyre::install().map_err(|e| Error::setup(e.to_string()))?;

    match cli.command {
        Command::Edit(args) => {
            nodeplan_core::logging::init()?;

            let result = nodeplan::run_edit(EditOptions {
                nodes: args.nodes,
                action_types: args.action_types,
                parent_id: args.parent,
                node_id: args.node,
                script: args.script,
                project: args.project.unwrap_or_else(current_dir),
            })
            .await;

            if let Err(ref e) = result {
                error!("Headless session failed: {:?}", e);
                nodeplan::headless::HeadlessEvent::from_error(e).emit();
            }
            result
        }

        Command::Route { path } => match routes::resolve(&path) {
            Some(page) => {
                println!("{}", page);
                Ok(())
            }
            None => {
                eprintln!("No page for path: {}", path);
                std::process::exit(1);
            }
        },

        Command::Init { project } => {
            let project = project.unwrap_or_else(current_dir);
            init_config_dir(&project)?;
            eprintln!(
                "Config ready at {}",
                project.join(".nodeplan").join("config.toml").display()
            );
            Ok(())
        }
    }
}
