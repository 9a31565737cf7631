//! Settings parser for .nodeplan/config.toml

use super::types::Settings;
use nodeplan_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const NODEPLAN_DIR: &str = ".nodeplan";

/// Load settings from `.nodeplan/config.toml`, falling back to defaults
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(NODEPLAN_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create default config files in .nodeplan/ directory
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let nodeplan_dir = project_path.join(NODEPLAN_DIR);

    if !nodeplan_dir.exists() {
        std::fs::create_dir_all(&nodeplan_dir)
            .map_err(|e| Error::config(format!("Failed to create .nodeplan dir: {}", e)))?;
    }

    let config_path = nodeplan_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# nodeplan configuration

[dialog]
# Quiet period (ms) before a typed name is upper-cased and checked for uniqueness
name_debounce_ms = 300

# How long (ms) validation notifications stay visible
notification_duration_ms = 2000

# Minimum description length
description_min_len = 2
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
