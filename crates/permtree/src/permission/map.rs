// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resource name to permission value mapping.

use super::value::PermissionValue;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Permissions keyed by resource name.
///
/// Keys iterate in sorted order so serialized output is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionMap(BTreeMap<String, PermissionValue>);

impl PermissionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, resource: &str) -> Option<PermissionValue> {
        self.0.get(resource).copied()
    }

    /// Set a value, returning the previous one.
    pub fn insert(
        &mut self,
        resource: impl Into<String>,
        value: PermissionValue,
    ) -> Option<PermissionValue> {
        self.0.insert(resource.into(), value)
    }

    pub fn contains(&self, resource: &str) -> bool {
        self.0.contains_key(resource)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PermissionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Copy every entry of `other` over this map. Later entries win.
    pub fn extend_from(&mut self, other: &PermissionMap) {
        for (resource, value) in &other.0 {
            self.0.insert(resource.clone(), *value);
        }
    }

    /// Default decision rule: only an explicit `Allow` grants access.
    pub fn is_allowed(&self, resource: &str) -> bool {
        self.get(resource) == Some(PermissionValue::Allow)
    }
}

impl FromIterator<(String, PermissionValue)> for PermissionMap {
    fn from_iter<I: IntoIterator<Item = (String, PermissionValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, PermissionValue)> for PermissionMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, PermissionValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

impl IntoIterator for PermissionMap {
    type Item = (String, PermissionValue);
    type IntoIter = btree_map::IntoIter<String, PermissionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PermissionMap {
    type Item = (&'a String, &'a PermissionValue);
    type IntoIter = btree_map::Iter<'a, String, PermissionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "map_tests.rs"]
mod tests;
