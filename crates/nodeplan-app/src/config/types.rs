//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application settings (.nodeplan/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub dialog: DialogSettings,
}

/// Node edit dialog settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DialogSettings {
    /// Quiet period before a name edit is normalized and checked
    #[serde(default = "default_name_debounce_ms")]
    pub name_debounce_ms: u64,

    /// How long validation notifications stay visible
    #[serde(default = "default_notification_duration_ms")]
    pub notification_duration_ms: u64,

    /// Minimum description length in characters
    #[serde(default = "default_description_min_len")]
    pub description_min_len: usize,
}

impl DialogSettings {
    pub fn name_debounce(&self) -> Duration {
        Duration::from_millis(self.name_debounce_ms)
    }
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            name_debounce_ms: default_name_debounce_ms(),
            notification_duration_ms: default_notification_duration_ms(),
            description_min_len: default_description_min_len(),
        }
    }
}

fn default_name_debounce_ms() -> u64 {
    300
}

fn default_notification_duration_ms() -> u64 {
    2000
}

fn default_description_min_len() -> usize {
    2
}
