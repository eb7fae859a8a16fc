// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The permission resolver.

use super::cache::PermissionCache;
use super::context::ResolutionContext;
use super::hooks::{FnHook, HookChain, PostResolveHook};
use crate::config::{CachePolicy, ResolverConfig};
use crate::error::ResolveError;
use crate::identity::User;
use crate::node::NodeId;
use crate::permission::{merge_optimistic, PermissionMap};
use crate::provider::Resolvable;
use crate::schema::{Classification, FieldClassifier};
use std::sync::Arc;

/// Computes the effective permission map of a node.
///
/// Merging rules:
/// - A value set to `allow`/`deny` directly on the node always wins
/// - Otherwise related nodes are merged optimistically: once one of them
///   allows a resource, it stays allowed
///
/// Nodes with a custom provider bypass all of this, including the cache.
pub struct PermissionResolver<C: FieldClassifier> {
    classifier: C,
    cache: Arc<PermissionCache>,
    hooks: HookChain<C>,
    config: ResolverConfig,
}

impl<C: FieldClassifier> PermissionResolver<C> {
    /// Create a resolver with default configuration.
    pub fn new(classifier: C) -> Self {
        Self::with_config(classifier, ResolverConfig::default())
    }

    /// Create a resolver with custom configuration.
    pub fn with_config(classifier: C, config: ResolverConfig) -> Self {
        Self {
            classifier,
            cache: Arc::new(PermissionCache::new()),
            hooks: HookChain::new(),
            config,
        }
    }

    /// Use an externally owned cache, e.g. one shared by several resolvers.
    pub fn with_cache(mut self, cache: Arc<PermissionCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Append a post-resolve hook.
    pub fn with_hook(mut self, hook: impl PostResolveHook<C> + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Append a closure as a post-resolve hook.
    pub fn with_hook_fn<F>(self, f: F) -> Self
    where
        F: Fn(
                PermissionMap,
                &C::Node,
                &mut ResolutionContext,
                &PermissionResolver<C>,
            ) -> Result<PermissionMap, ResolveError>
            + Send
            + Sync
            + 'static,
    {
        self.with_hook(FnHook::new(f))
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The resolver's shared cache.
    pub fn cache(&self) -> &Arc<PermissionCache> {
        &self.cache
    }

    /// Forget every memoized map.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Start a top-level resolution according to the cache policy.
    pub fn context(&self) -> ResolutionContext {
        match self.config.cache {
            CachePolicy::Shared => ResolutionContext::new(Arc::clone(&self.cache)),
            CachePolicy::PerRequest => ResolutionContext::isolated(),
        }
    }

    /// Resolve `node` in a fresh context.
    pub fn resolve_node(
        &self,
        node: &C::Node,
        user: Option<&User>,
    ) -> Result<Arc<PermissionMap>, ResolveError> {
        let mut ctx = self.context();
        self.resolve(node, &mut ctx, user)
    }

    /// Resolve `node` within an existing context.
    pub fn resolve(
        &self,
        node: &C::Node,
        ctx: &mut ResolutionContext,
        user: Option<&User>,
    ) -> Result<Arc<PermissionMap>, ResolveError> {
        match self.classifier.resolvable(node)? {
            Resolvable::Provided(node, provider) => {
                tracing::debug!(
                    node = %self.classifier.node_id(node),
                    "resolving through custom provider"
                );
                provider.permissions(node, user).map(Arc::new)
            }
            Resolvable::Plain(node) => self.resolve_plain(node, ctx),
        }
    }

    /// Resolve a node already known to have no custom provider.
    pub(crate) fn resolve_plain(
        &self,
        node: &C::Node,
        ctx: &mut ResolutionContext,
    ) -> Result<Arc<PermissionMap>, ResolveError> {
        let id = self.classifier.node_id(node);
        if let Some(permissions) = ctx.cached(&id) {
            tracing::debug!(node = %id, "permission cache hit");
            return Ok(permissions);
        }
        if ctx.is_visited(&id) {
            tracing::debug!(node = %id, "relation cycle cut");
            return Ok(Arc::new(PermissionMap::new()));
        }

        ctx.enter(&id, &self.config)?;
        let result = self.merge_related(node, id.clone(), ctx);
        ctx.leave(&id);
        result
    }

    fn merge_related(
        &self,
        node: &C::Node,
        id: NodeId,
        ctx: &mut ResolutionContext,
    ) -> Result<Arc<PermissionMap>, ResolveError> {
        let Classification { direct, related } = Classification::fold(self.classifier.classify(node)?);

        let mut merged = direct.clone();
        for related_node in &related {
            // The user is only consulted at the entry point; related nodes
            // are always resolved anonymously.
            let incoming = self.resolve(related_node, ctx, None)?;
            merged = merge_optimistic(merged, &direct, &incoming);
        }

        // Hooks run before `leave`, so their lookups still see this node as visited.
        let merged = Arc::new(self.hooks.run(merged, node, ctx, self)?);
        tracing::debug!(node = %id, resources = merged.len(), "resolved permissions");
        ctx.store(id, Arc::clone(&merged));
        Ok(merged)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
