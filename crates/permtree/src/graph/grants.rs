// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative per-user provider.

use super::document::ProviderSpec;
use crate::error::ResolveError;
use crate::identity::User;
use crate::permission::{PermissionMap, PermissionValue};
use crate::provider::PermissionProvider;
use std::collections::HashMap;

/// Provider that looks up a fixed permission map per user id.
///
/// Anonymous and unknown users get an empty map, so every check denies.
#[derive(Clone, Debug, Default)]
pub struct GrantProvider {
    grants: HashMap<String, PermissionMap>,
}

impl GrantProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, user: impl Into<String>, permissions: PermissionMap) -> Self {
        self.grants.insert(user.into(), permissions);
        self
    }

    /// Build from a document entry, validating every value.
    pub fn from_spec(spec: &ProviderSpec) -> Result<Self, ResolveError> {
        let mut provider = Self::new();
        for (user, resources) in &spec.grants {
            let mut permissions = PermissionMap::new();
            for (resource, value) in resources {
                permissions.insert(resource.clone(), value.parse::<PermissionValue>()?);
            }
            provider.grants.insert(user.clone(), permissions);
        }
        Ok(provider)
    }
}

impl<N> PermissionProvider<N> for GrantProvider {
    fn permissions(&self, _node: &N, user: Option<&User>) -> Result<PermissionMap, ResolveError> {
        Ok(user
            .and_then(|user| self.grants.get(user.id()))
            .cloned()
            .unwrap_or_default())
    }
}
