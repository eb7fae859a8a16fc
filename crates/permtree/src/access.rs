// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Yes/no access decisions on top of the resolver.

use crate::error::ResolveError;
use crate::identity::User;
use crate::provider::Resolvable;
use crate::resolver::PermissionResolver;
use crate::schema::FieldClassifier;

/// Answers "may `user` use `resource` on `node`?".
///
/// This is the entry point surrounding components depend on.
pub struct AccessChecker<C: FieldClassifier> {
    resolver: PermissionResolver<C>,
}

impl<C: FieldClassifier> AccessChecker<C> {
    pub fn new(resolver: PermissionResolver<C>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &PermissionResolver<C> {
        &self.resolver
    }

    /// Check whether `resource` is allowed on `node`.
    ///
    /// Nodes with a custom provider are decided by the provider. For every
    /// other node only an explicit `allow` grants access; a missing key,
    /// `deny` and `inherit` all deny.
    pub fn is_allowed(
        &self,
        node: &C::Node,
        resource: &str,
        user: Option<&User>,
    ) -> Result<bool, ResolveError> {
        let allowed = match self.resolver.classifier().resolvable(node)? {
            Resolvable::Provided(node, provider) => {
                let permissions = provider.permissions(node, user)?;
                provider.is_allowed(&permissions, node, resource)
            }
            Resolvable::Plain(node) => {
                let mut ctx = self.resolver.context();
                self.resolver.resolve_plain(node, &mut ctx)?.is_allowed(resource)
            }
        };
        tracing::debug!(
            node = %self.resolver.classifier().node_id(node),
            resource,
            allowed,
            "access check"
        );
        Ok(allowed)
    }
}

impl<C: FieldClassifier> From<PermissionResolver<C>> for AccessChecker<C> {
    fn from(resolver: PermissionResolver<C>) -> Self {
        Self::new(resolver)
    }
}

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;
