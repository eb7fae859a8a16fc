// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Memoized permission maps keyed by node id.

use crate::node::NodeId;
use crate::permission::PermissionMap;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Thread-safe cache of resolved permission maps.
///
/// Entries have no per-user dimension. Only plain nodes are cached, and
/// plain-node resolution does not depend on the user.
#[derive(Debug, Default)]
pub struct PermissionCache {
    entries: RwLock<HashMap<NodeId, Arc<PermissionMap>>>,
}

impl PermissionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &NodeId) -> Option<Arc<PermissionMap>> {
        self.entries.read().get(id).cloned()
    }

    pub fn insert(&self, id: NodeId, permissions: Arc<PermissionMap>) {
        self.entries.write().insert(id, permissions);
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.entries.read().contains_key(id)
    }

    /// Drop a single entry, e.g. after the node was edited.
    pub fn invalidate(&self, id: &NodeId) -> Option<Arc<PermissionMap>> {
        self.entries.write().remove(id)
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
