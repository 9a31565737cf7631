//! Action type catalog entries

use serde::{Deserialize, Serialize};

/// An allowed action type for Action nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionType {
    pub id: String,
    pub name: String,
}

impl ActionType {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
