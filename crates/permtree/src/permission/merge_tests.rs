// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;
use crate::permission::PermissionValue::{Allow, Deny, Inherit};

fn map(entries: &[(&str, PermissionValue)]) -> PermissionMap {
    entries.iter().copied().collect()
}

#[test]
fn test_empty_incoming_leaves_merged_untouched() {
    let base = map(&[("view", Inherit)]);
    let merged = merge_optimistic(base.clone(), &base, &PermissionMap::new());
    assert_eq!(merged, base);
}

#[rstest]
#[case(Allow, Deny)]
#[case(Allow, Inherit)]
#[case(Deny, Allow)]
#[case(Deny, Inherit)]
fn test_explicit_base_wins(#[case] base_value: PermissionValue, #[case] nested: PermissionValue) {
    let base = map(&[("view", base_value)]);
    let merged = merge_optimistic(base.clone(), &base, &map(&[("view", nested)]));
    assert_eq!(merged.get("view"), Some(base_value));
}

#[rstest]
#[case(Allow)]
#[case(Deny)]
#[case(Inherit)]
fn test_inherit_base_takes_nested_value(#[case] nested: PermissionValue) {
    let base = map(&[("view", Inherit)]);
    let merged = merge_optimistic(base.clone(), &base, &map(&[("view", nested)]));
    assert_eq!(merged.get("view"), Some(nested));
}

#[test]
fn test_silent_base_takes_nested_keys() {
    let base = map(&[("view", Deny)]);
    let merged = merge_optimistic(base.clone(), &base, &map(&[("edit", Allow)]));
    assert_eq!(merged.get("view"), Some(Deny));
    assert_eq!(merged.get("edit"), Some(Allow));
}

#[test]
fn test_first_allow_sticks() {
    let base = PermissionMap::new();
    let mut merged = base.clone();
    for nested in [Inherit, Allow, Deny] {
        merged = merge_optimistic(merged, &base, &map(&[("view", nested)]));
    }
    assert_eq!(merged.get("view"), Some(Allow));
}

#[test]
fn test_later_nested_value_replaces_non_allow() {
    let base = map(&[("view", Inherit)]);
    let mut merged = base.clone();
    merged = merge_optimistic(merged, &base, &map(&[("view", Deny)]));
    merged = merge_optimistic(merged, &base, &map(&[("view", Inherit)]));
    assert_eq!(merged.get("view"), Some(Inherit));
}

fn permission_value() -> impl Strategy<Value = PermissionValue> {
    prop_oneof![Just(Allow), Just(Deny), Just(Inherit)]
}

fn permission_map() -> impl Strategy<Value = PermissionMap> {
    proptest::collection::btree_map("[a-d]", permission_value(), 0..4)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn explicit_base_values_never_change(
        base in permission_map(),
        nested in proptest::collection::vec(permission_map(), 0..5),
    ) {
        let mut merged = base.clone();
        for incoming in &nested {
            merged = merge_optimistic(merged, &base, incoming);
        }
        for (resource, value) in base.iter() {
            if value.is_explicit() {
                prop_assert_eq!(merged.get(resource), Some(value));
            }
        }
    }

    #[test]
    fn allow_is_never_downgraded(
        base in permission_map(),
        nested in proptest::collection::vec(permission_map(), 1..5),
    ) {
        let mut merged = base.clone();
        for incoming in &nested {
            let before = merged.clone();
            merged = merge_optimistic(merged, &base, incoming);
            for (resource, value) in before.iter() {
                if value == Allow {
                    prop_assert_eq!(merged.get(resource), Some(Allow));
                }
            }
        }
    }

    #[test]
    fn merged_keys_are_union_of_inputs(
        base in permission_map(),
        incoming in permission_map(),
    ) {
        let merged = merge_optimistic(base.clone(), &base, &incoming);
        for (resource, _) in merged.iter() {
            prop_assert!(base.contains(resource) || incoming.contains(resource));
        }
        for (resource, _) in incoming.iter() {
            prop_assert!(merged.contains(resource));
        }
    }
}
