// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while resolving permissions.

use crate::node::NodeId;
use thiserror::Error;

/// Errors that can occur while resolving a node's permissions.
///
/// Cycles and unrecognized field kinds are not errors; they contribute
/// nothing to the merged map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The node claims a custom provider but none could be supplied.
    #[error("Node {node} declares a custom permission provider but none is available")]
    ProviderUnavailable { node: NodeId },

    /// A related node could not be loaded from the store.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// The relation chain is deeper than the configured limit.
    #[error("Relation depth limit of {max_depth} exceeded at node {node}")]
    DepthExceeded { node: NodeId, max_depth: usize },

    /// The traversal visited more nodes than the configured step budget.
    #[error("Resolution step budget of {max_steps} exhausted")]
    BudgetExhausted { max_steps: usize },

    /// A stored tri-state value was not one of `allow`, `deny`, `inherit`.
    #[error("Invalid permission value '{0}' (expected allow, deny or inherit)")]
    InvalidPermissionValue(String),
}
