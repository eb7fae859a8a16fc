// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serialized graph document types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level graph document
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,

    /// Declarative per-user providers
    #[serde(default)]
    pub providers: Vec<ProviderSpec>,
}

/// A node and its fields
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    pub id: String,

    /// Ordered child ids, used by navigation
    #[serde(default)]
    pub children: Vec<String>,

    /// Free-form string properties (e.g. `permission_resource`)
    #[serde(default)]
    pub properties: BTreeMap<String, String>,

    /// Name of the custom provider that replaces default resolution
    #[serde(default)]
    pub provider: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// A field definition with its stored value
///
/// `kind` is one of `permission_resource`, `dynamic_permission_resource`,
/// `many_to_one`, `many_to_many` or `composite`. Any other kind is kept but
/// ignored by resolution.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub name: String,

    pub kind: String,

    /// Stored value; its shape depends on `kind`
    #[serde(default)]
    pub value: Option<serde_json::Value>,

    /// Sub-fields of a composite
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// Per-user permission grants for a provider-backed node
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderSpec {
    pub name: String,

    /// user id -> resource -> "allow" | "deny" | "inherit"
    #[serde(default)]
    pub grants: BTreeMap<String, BTreeMap<String, String>>,
}
