// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-call resolution state.

use super::cache::PermissionCache;
use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::node::NodeId;
use crate::permission::PermissionMap;
use std::collections::HashSet;
use std::sync::Arc;

/// State threaded through one top-level resolution.
///
/// The visited set holds the ids of the nodes currently being resolved
/// (the ancestors of the node at hand), so a relation pointing back at one of
/// them is cut. A context must never be shared between concurrent
/// resolutions; the cache it points at may be.
#[derive(Debug)]
pub struct ResolutionContext {
    visited: HashSet<NodeId>,
    cache: Arc<PermissionCache>,
    depth: usize,
    steps: usize,
}

impl ResolutionContext {
    /// Create a context backed by `cache`.
    pub fn new(cache: Arc<PermissionCache>) -> Self {
        Self {
            visited: HashSet::new(),
            cache,
            depth: 0,
            steps: 0,
        }
    }

    /// Create a context with a private cache that dies with it.
    pub fn isolated() -> Self {
        Self::new(Arc::new(PermissionCache::new()))
    }

    pub fn cache(&self) -> &Arc<PermissionCache> {
        &self.cache
    }

    pub fn cached(&self, id: &NodeId) -> Option<Arc<PermissionMap>> {
        self.cache.get(id)
    }

    pub fn store(&self, id: NodeId, permissions: Arc<PermissionMap>) {
        self.cache.insert(id, permissions);
    }

    pub fn is_visited(&self, id: &NodeId) -> bool {
        self.visited.contains(id)
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Nodes entered so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Mark `id` as being resolved, enforcing depth and step limits.
    pub fn enter(&mut self, id: &NodeId, config: &ResolverConfig) -> Result<(), ResolveError> {
        if self.depth >= config.max_depth {
            tracing::warn!(node = %id, max_depth = config.max_depth, "relation depth limit reached");
            return Err(ResolveError::DepthExceeded {
                node: id.clone(),
                max_depth: config.max_depth,
            });
        }
        if let Some(max_steps) = config.max_steps {
            if self.steps >= max_steps {
                tracing::warn!(node = %id, max_steps, "resolution step budget exhausted");
                return Err(ResolveError::BudgetExhausted { max_steps });
            }
        }
        self.steps += 1;
        self.depth += 1;
        self.visited.insert(id.clone());
        Ok(())
    }

    /// Undo [`enter`](Self::enter) once `id` is resolved.
    pub fn leave(&mut self, id: &NodeId) {
        self.visited.remove(id);
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
