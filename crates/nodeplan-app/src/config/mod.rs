//! Configuration file parsing for nodeplan
//!
//! Supports:
//! - `.nodeplan/config.toml` - Dialog settings

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings};
pub use types::*;
