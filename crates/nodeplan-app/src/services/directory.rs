//! Node lookup and name availability
//!
//! The dialog never owns node storage. It reads the current node set and asks
//! whether a name is free through [`NodeDirectory`]; the persistence layer
//! behind it is free to be a database, an HTTP API, or the in-memory
//! implementation below.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use nodeplan_core::prelude::*;
use nodeplan_core::Node;

/// Lookup of known nodes
#[trait_variant::make(NodeDirectory: Send)]
pub trait LocalNodeDirectory {
    /// Snapshot of every known node
    async fn list(&self) -> Result<Vec<Node>>;

    /// Whether a node with this name already exists
    async fn is_name_taken(&self, name: &str) -> Result<bool>;

    /// The nodes listed as predecessors of `node`
    async fn predecessors_of(&self, node: &Node) -> Result<Vec<Node>>;

    /// Look up a node by id
    async fn by_id(&self, id: &str) -> Result<Option<Node>>;
}

/// Directory backed by a shared in-memory node list
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    nodes: Arc<RwLock<Vec<Node>>>,
}

impl InMemoryDirectory {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes: Arc::new(RwLock::new(nodes)),
        }
    }

    /// Load a directory from a JSON array of nodes
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::fixture(path, e.to_string()))?;
        let nodes: Vec<Node> =
            serde_json::from_str(&content).map_err(|e| Error::fixture(path, e.to_string()))?;
        debug!("Loaded {} nodes from {:?}", nodes.len(), path);
        Ok(Self::new(nodes))
    }

    /// Add or replace a node (matched by id)
    pub async fn upsert(&self, node: Node) {
        let mut nodes = self.nodes.write().await;
        match nodes.iter_mut().find(|n| n.id == node.id) {
            Some(existing) => *existing = node,
            None => nodes.push(node),
        }
    }

    pub async fn len(&self) -> usize {
        self.nodes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.nodes.read().await.is_empty()
    }
}

impl NodeDirectory for InMemoryDirectory {
    async fn list(&self) -> Result<Vec<Node>> {
        Ok(self.nodes.read().await.clone())
    }

    async fn is_name_taken(&self, name: &str) -> Result<bool> {
        let wanted = name.to_uppercase();
        Ok(self
            .nodes
            .read()
            .await
            .iter()
            .any(|n| n.name.to_uppercase() == wanted))
    }

    async fn predecessors_of(&self, node: &Node) -> Result<Vec<Node>> {
        let nodes = self.nodes.read().await;
        // Keep the order the node lists them in.
        Ok(node
            .predecessors
            .iter()
            .filter_map(|id| nodes.iter().find(|n| &n.id == id).cloned())
            .collect())
    }

    async fn by_id(&self, id: &str) -> Result<Option<Node>> {
        Ok(self.nodes.read().await.iter().find(|n| n.id == id).cloned())
    }
}
