// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_enter_and_leave_track_visited() {
    let mut ctx = ResolutionContext::isolated();
    let config = ResolverConfig::default();
    let a = NodeId::from("a");

    assert!(!ctx.is_visited(&a));
    ctx.enter(&a, &config).unwrap();
    assert!(ctx.is_visited(&a));
    assert_eq!(ctx.depth(), 1);

    ctx.leave(&a);
    assert!(!ctx.is_visited(&a));
    assert_eq!(ctx.depth(), 0);
    assert_eq!(ctx.steps(), 1);
}

#[test]
fn test_depth_limit() {
    let mut ctx = ResolutionContext::isolated();
    let config = ResolverConfig::default().with_max_depth(2);

    ctx.enter(&NodeId::from("a"), &config).unwrap();
    ctx.enter(&NodeId::from("b"), &config).unwrap();
    let err = ctx.enter(&NodeId::from("c"), &config).unwrap_err();

    assert_eq!(
        err,
        ResolveError::DepthExceeded {
            node: NodeId::from("c"),
            max_depth: 2,
        }
    );
    assert!(!ctx.is_visited(&NodeId::from("c")));
}

#[test]
fn test_step_budget_counts_siblings() {
    let mut ctx = ResolutionContext::isolated();
    let config = ResolverConfig::default().with_max_steps(Some(2));

    for id in ["a", "b"] {
        let id = NodeId::from(id);
        ctx.enter(&id, &config).unwrap();
        ctx.leave(&id);
    }
    let err = ctx.enter(&NodeId::from("c"), &config).unwrap_err();
    assert_eq!(err, ResolveError::BudgetExhausted { max_steps: 2 });
}

#[test]
fn test_contexts_share_cache() {
    let cache = Arc::new(PermissionCache::new());
    let first = ResolutionContext::new(Arc::clone(&cache));
    let second = ResolutionContext::new(Arc::clone(&cache));

    first.store(NodeId::from("a"), Arc::new(PermissionMap::new()));
    assert!(second.cached(&NodeId::from("a")).is_some());
    assert!(Arc::ptr_eq(second.cache(), &cache));
}
