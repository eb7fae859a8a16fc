// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-node custom permission providers.
//!
//! A node with a provider skips classification, merging and caching
//! entirely; the provider is authoritative for it.

use crate::error::ResolveError;
use crate::identity::User;
use crate::permission::PermissionMap;
use crate::schema::FieldClassifier;
use std::fmt;
use std::sync::Arc;

/// Bespoke permission logic attached to a node.
pub trait PermissionProvider<N>: Send + Sync {
    /// Compute the node's permissions for `user`.
    ///
    /// Called on every resolution of the node; results are never cached.
    fn permissions(&self, node: &N, user: Option<&User>) -> Result<PermissionMap, ResolveError>;

    /// Decide whether `resource` is allowed given the computed permissions.
    fn is_allowed(&self, permissions: &PermissionMap, _node: &N, resource: &str) -> bool {
        permissions.is_allowed(resource)
    }
}

/// A node as seen at a resolution entry point.
pub enum Resolvable<'a, N> {
    /// Resolved by classification and merge.
    Plain(&'a N),
    /// Resolved by its own provider.
    Provided(&'a N, Arc<dyn PermissionProvider<N>>),
}

impl<'a, N> Resolvable<'a, N> {
    /// Check `node` for the provider capability.
    pub fn of<C>(classifier: &C, node: &'a N) -> Result<Self, ResolveError>
    where
        C: FieldClassifier<Node = N> + ?Sized,
    {
        Ok(match classifier.provider(node)? {
            Some(provider) => Self::Provided(node, provider),
            None => Self::Plain(node),
        })
    }
}

impl<N> fmt::Debug for Resolvable<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(_) => f.write_str("Plain"),
            Self::Provided(..) => f.write_str("Provided"),
        }
    }
}
