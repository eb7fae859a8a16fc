// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Post-resolve hooks for adjusting a merged map before it is cached.

use super::context::ResolutionContext;
use super::engine::PermissionResolver;
use crate::error::ResolveError;
use crate::permission::PermissionMap;
use crate::schema::FieldClassifier;

/// Callback run after a plain node's permissions are merged.
///
/// The returned map replaces the merged one and is what gets cached.
/// Hooks run synchronously while the node is still being resolved. A hook
/// that needs other nodes' permissions must look them up with
/// [`PermissionResolver::resolve`] and the `ctx` it was handed, so the
/// lookup sees the current path: a relation back to the hooked node is cut
/// and the depth limit keeps counting.
pub trait PostResolveHook<C: FieldClassifier>: Send + Sync {
    fn after_resolve(
        &self,
        permissions: PermissionMap,
        node: &C::Node,
        ctx: &mut ResolutionContext,
        resolver: &PermissionResolver<C>,
    ) -> Result<PermissionMap, ResolveError>;
}

/// Adapter turning a closure into a [`PostResolveHook`].
pub struct FnHook<F>(F);

impl<F> FnHook<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<C, F> PostResolveHook<C> for FnHook<F>
where
    C: FieldClassifier,
    F: Fn(
            PermissionMap,
            &C::Node,
            &mut ResolutionContext,
            &PermissionResolver<C>,
        ) -> Result<PermissionMap, ResolveError>
        + Send
        + Sync,
{
    fn after_resolve(
        &self,
        permissions: PermissionMap,
        node: &C::Node,
        ctx: &mut ResolutionContext,
        resolver: &PermissionResolver<C>,
    ) -> Result<PermissionMap, ResolveError> {
        (self.0)(permissions, node, ctx, resolver)
    }
}

/// Hooks run in registration order, each fed the previous one's output.
pub struct HookChain<C: FieldClassifier> {
    hooks: Vec<Box<dyn PostResolveHook<C>>>,
}

impl<C: FieldClassifier> HookChain<C> {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn push(&mut self, hook: Box<dyn PostResolveHook<C>>) {
        self.hooks.push(hook);
    }

    /// Feed `permissions` through every hook. The first error stops the chain.
    pub fn run(
        &self,
        permissions: PermissionMap,
        node: &C::Node,
        ctx: &mut ResolutionContext,
        resolver: &PermissionResolver<C>,
    ) -> Result<PermissionMap, ResolveError> {
        self.hooks.iter().try_fold(permissions, |permissions, hook| {
            hook.after_resolve(permissions, node, ctx, resolver)
        })
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<C: FieldClassifier> Default for HookChain<C> {
    fn default() -> Self {
        Self::new()
    }
}
