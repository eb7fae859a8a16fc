// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::graph::{Graph, NodeRef};
use crate::node::NodeId;
use crate::resolver::PermissionResolver;

const MENU: &str = r#"
[[nodes]]
id = "home"
children = ["about", "members", "blank", "staff", "admin"]

[[nodes.fields]]
name = "view"
kind = "permission_resource"
value = "allow"

[[nodes]]
id = "about"

[[nodes]]
id = "members"
properties = { permission_resource = "view" }

[[nodes.fields]]
name = "view"
kind = "permission_resource"
value = "inherit"

[[nodes.fields]]
name = "parent"
kind = "many_to_one"
value = "home"

[[nodes]]
id = "blank"
properties = { permission_resource = "" }

[[nodes]]
id = "staff"
properties = { permission_resource = "view", menu_resource = "edit" }
provider = "staff"

[[nodes]]
id = "admin"
properties = { permission_resource = "view" }

[[nodes.fields]]
name = "view"
kind = "permission_resource"
value = "deny"

[[providers]]
name = "staff"
[providers.grants.alice]
view = "allow"
"#;

fn setup() -> (AccessChecker<Graph>, Vec<NodeRef>) {
    let graph = Graph::from_toml_str(MENU).unwrap();
    let home = graph.node(&NodeId::from("home")).unwrap();
    let children = graph.children(&home).unwrap();
    (AccessChecker::new(PermissionResolver::new(graph)), children)
}

fn ids(nodes: &[NodeRef]) -> Vec<String> {
    nodes.iter().map(|node| node.id.to_string()).collect()
}

#[test]
fn test_anonymous_filter() {
    let (checker, children) = setup();
    let visible = NavigationFilter::new(&checker)
        .filter_children(children, None)
        .unwrap();
    assert_eq!(ids(&visible), vec!["about", "members", "blank"]);
}

#[test]
fn test_user_sensitive_provider_child() {
    let (checker, children) = setup();
    let alice = User::new("alice");
    let visible = NavigationFilter::new(&checker)
        .filter_children(children, Some(&alice))
        .unwrap();
    assert_eq!(ids(&visible), vec!["about", "members", "blank", "staff"]);
}

#[test]
fn test_custom_marker_property() {
    let (checker, children) = setup();
    let alice = User::new("alice");
    let visible = NavigationFilter::new(&checker)
        .with_property("menu_resource")
        .filter_children(children, Some(&alice))
        .unwrap();
    // only staff carries menu_resource, and alice has no `edit` grant
    assert_eq!(ids(&visible), vec!["about", "members", "blank", "admin"]);
}

#[test]
fn test_empty_children() {
    let (checker, _) = setup();
    let visible = NavigationFilter::new(&checker)
        .filter_children(Vec::new(), None)
        .unwrap();
    assert!(visible.is_empty());
}

#[test]
fn test_resolution_error_aborts_filter() {
    let graph = Graph::from_toml_str(
        r#"
[[nodes]]
id = "broken"
properties = { permission_resource = "view" }
provider = "missing"
"#,
    )
    .unwrap();
    let broken = graph.node(&NodeId::from("broken")).unwrap();
    let checker = AccessChecker::new(PermissionResolver::new(graph));

    let err = NavigationFilter::new(&checker)
        .filter_children(vec![broken], None)
        .unwrap_err();
    assert!(matches!(err, ResolveError::ProviderUnavailable { .. }));
}
