// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Optimistic merge of a related node's permissions into a base node.

use super::map::PermissionMap;
use super::value::PermissionValue;

/// Fold `incoming` (a related node's permissions) into `merged`.
///
/// Precedence rules:
/// 1. An explicit `Allow`/`Deny` in `base` (the node's own declarations) is
///    never overridden.
/// 2. Where `base` is silent or `Inherit`, the incoming value is applied,
///    unless `merged` already holds `Allow` for the key. Once a related node
///    grants a resource it stays granted.
///
/// The result depends on the order related nodes are merged in, so callers
/// must merge in field declaration order.
pub fn merge_optimistic(
    mut merged: PermissionMap,
    base: &PermissionMap,
    incoming: &PermissionMap,
) -> PermissionMap {
    for (resource, value) in incoming.iter() {
        let base_defers = !base.get(resource).is_some_and(|own| own.is_explicit());
        let already_allowed = merged.get(resource) == Some(PermissionValue::Allow);
        if base_defers && !already_allowed {
            merged.insert(resource, value);
        }
    }
    merged
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
