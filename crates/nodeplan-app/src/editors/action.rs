//! Action sub-editor

use nodeplan_core::{ActionDetails, ActionType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionEditor {
    action_type_id: Option<String>,
    pub action_data: serde_json::Value,
    pub expected_duration_minutes: u32,
}

impl ActionEditor {
    pub fn init(existing: Option<&ActionDetails>) -> Self {
        match existing {
            Some(details) => Self {
                action_type_id: Some(details.action_type_id.clone()).filter(|id| !id.is_empty()),
                action_data: details.action_data.clone(),
                expected_duration_minutes: details.expected_duration_minutes,
            },
            None => Self::default(),
        }
    }

    pub fn action_type_id(&self) -> Option<&str> {
        self.action_type_id.as_deref()
    }

    /// Select an action type; unknown ids are refused unless the catalog is
    /// empty (unavailable), in which case the id is taken as given
    pub fn select_action_type(&mut self, id: &str, catalog: &[ActionType]) -> bool {
        if !catalog.is_empty() && !catalog.iter().any(|t| t.id == id) {
            return false;
        }
        self.action_type_id = Some(id.to_string());
        true
    }

    pub fn value(&self) -> ActionDetails {
        ActionDetails {
            action_type_id: self.action_type_id.clone().unwrap_or_default(),
            action_data: self.action_data.clone(),
            expected_duration_minutes: self.expected_duration_minutes,
        }
    }
}
