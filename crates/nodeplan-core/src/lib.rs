//! # nodeplan-core - Core Domain Types
//!
//! Foundation crate for nodeplan. Provides the plan-node model, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Plan Nodes (`node`)
//! - [`Node`] - A unit in the plan graph: common fields plus a [`NodeKind`]
//! - [`NodeKind`] - Variant payload (Milestone, Action, LinkPoint)
//! - [`NodeType`] - The three-way node variant tag
//! - [`MilestoneType`] - Enumerated milestone classification
//! - [`LinkPointView`] - The public state a LinkPoint mirrors from a Milestone
//! - [`assemble_node_id()`] - Deterministic id generation for new nodes
//! - [`same_selection()`] - Selection equality by `id`
//!
//! ### Action Types (`action_type`)
//! - [`ActionType`] - An entry of the action-type catalog
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use nodeplan_core::prelude::*;
//! ```

pub mod action_type;
pub mod error;
pub mod logging;
pub mod node;

/// Prelude for common imports used throughout all nodeplan crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use action_type::ActionType;
pub use error::{Error, Result, ResultExt};
pub use node::{
    assemble_node_id, same_selection, ActionDetails, LinkPointView, MilestoneDetails,
    MilestoneType, Node, NodeId, NodeKind, NodeType,
};
