//! Allowed action types for Action nodes

use std::path::Path;

use nodeplan_core::prelude::*;
use nodeplan_core::ActionType;

/// Source of the action types an Action node may use
#[trait_variant::make(ActionTypeCatalog: Send)]
pub trait LocalActionTypeCatalog {
    async fn list(&self) -> Result<Vec<ActionType>>;
}

/// Catalog with a fixed list of action types
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    action_types: Vec<ActionType>,
}

impl StaticCatalog {
    pub fn new(action_types: Vec<ActionType>) -> Self {
        Self { action_types }
    }

    /// Load a catalog from a JSON array of `{ "id", "name" }` objects
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::fixture(path, e.to_string()))?;
        let action_types: Vec<ActionType> =
            serde_json::from_str(&content).map_err(|e| Error::fixture(path, e.to_string()))?;
        debug!("Loaded {} action types from {:?}", action_types.len(), path);
        Ok(Self::new(action_types))
    }
}

impl ActionTypeCatalog for StaticCatalog {
    async fn list(&self) -> Result<Vec<ActionType>> {
        Ok(self.action_types.clone())
    }
}
