// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive permission resolution.
//!
//! [`PermissionResolver`] walks a node's classified fields, resolves every
//! related node, and folds the results into the node's own declarations
//! with [`merge_optimistic`](crate::permission::merge_optimistic).
//! Per-call state lives in a [`ResolutionContext`]; finished maps are
//! memoized in a [`PermissionCache`].

pub mod cache;
pub mod context;
pub mod engine;
pub mod hooks;

pub use cache::PermissionCache;
pub use context::ResolutionContext;
pub use engine::PermissionResolver;
pub use hooks::{HookChain, PostResolveHook};
