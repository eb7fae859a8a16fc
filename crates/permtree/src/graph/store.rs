// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Graph storage and field classification.

use super::document::{FieldSpec, GraphDocument, NodeSpec};
use super::grants::GrantProvider;
use crate::error::ResolveError;
use crate::navigation::MarkerSource;
use crate::node::NodeId;
use crate::permission::{PermissionMap, PermissionValue};
use crate::provider::PermissionProvider;
use crate::schema::{Field, FieldClassifier, FieldKind};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur when loading a graph
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Failed to read graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Value(#[from] ResolveError),
}

/// Shared handle to a stored node.
pub type NodeRef = Arc<NodeRecord>;

/// A stored node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: NodeId,
    pub children: Vec<NodeId>,
    pub properties: BTreeMap<String, String>,
    pub provider: Option<String>,
    pub fields: Vec<StoredField>,
}

impl NodeRecord {
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

/// A stored field, relations held as ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredField {
    pub name: String,
    pub kind: StoredKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredKind {
    Resource(PermissionValue),
    Dynamic(PermissionMap),
    ManyToOne(Option<NodeId>),
    ManyToMany(Vec<NodeId>),
    Composite(Vec<StoredField>),
    /// Unrecognized kind, kept by name.
    Other(String),
}

/// In-memory node store.
#[derive(Default)]
pub struct Graph {
    nodes: HashMap<NodeId, NodeRef>,
    providers: HashMap<String, Arc<dyn PermissionProvider<NodeRef>>>,
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.len())
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a graph from a TOML or JSON file (by extension).
    pub fn load(path: &Path) -> Result<Self, GraphError> {
        let content = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|e| e == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, GraphError> {
        let document: GraphDocument = toml::from_str(content)?;
        Self::from_document(document)
    }

    pub fn from_json_str(content: &str) -> Result<Self, GraphError> {
        let document: GraphDocument = serde_json::from_str(content)?;
        Self::from_document(document)
    }

    pub fn from_document(document: GraphDocument) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for spec in document.nodes {
            graph.insert(parse_node(spec)?)?;
        }
        for spec in &document.providers {
            graph.register_provider(&spec.name, Arc::new(GrantProvider::from_spec(spec)?));
        }
        Ok(graph)
    }

    /// Add a node, rejecting duplicate ids.
    pub fn insert(&mut self, record: NodeRecord) -> Result<NodeRef, GraphError> {
        if self.nodes.contains_key(&record.id) {
            return Err(GraphError::Validation(format!(
                "duplicate node id '{}'",
                record.id
            )));
        }
        let node = Arc::new(record);
        self.nodes.insert(node.id.clone(), Arc::clone(&node));
        Ok(node)
    }

    /// Register (or replace) a named custom provider.
    pub fn register_provider(
        &mut self,
        name: impl Into<String>,
        provider: Arc<dyn PermissionProvider<NodeRef>>,
    ) {
        self.providers.insert(name.into(), provider);
    }

    pub fn node(&self, id: &NodeId) -> Result<NodeRef, ResolveError> {
        self.nodes
            .get(id)
            .cloned()
            .ok_or_else(|| ResolveError::NodeNotFound(id.clone()))
    }

    /// Children of `parent` in stored order.
    pub fn children(&self, parent: &NodeRecord) -> Result<Vec<NodeRef>, ResolveError> {
        parent.children.iter().map(|id| self.node(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn load_fields(&self, fields: &[StoredField]) -> Result<Vec<Field<NodeRef>>, ResolveError> {
        fields
            .iter()
            .map(|field| -> Result<Field<NodeRef>, ResolveError> {
                let kind = match &field.kind {
                    StoredKind::Resource(value) => FieldKind::PermissionResource(*value),
                    StoredKind::Dynamic(permissions) => {
                        FieldKind::DynamicPermissionResource(permissions.clone())
                    }
                    StoredKind::ManyToOne(id) => {
                        FieldKind::ManyToOne(id.as_ref().map(|id| self.node(id)).transpose()?)
                    }
                    StoredKind::ManyToMany(ids) => FieldKind::ManyToMany(
                        ids.iter().map(|id| self.node(id)).collect::<Result<_, _>>()?,
                    ),
                    StoredKind::Composite(fields) => FieldKind::Composite(self.load_fields(fields)?),
                    StoredKind::Other(_) => FieldKind::Other,
                };
                Ok(Field::new(field.name.clone(), kind))
            })
            .collect()
    }
}

impl FieldClassifier for Graph {
    type Node = NodeRef;

    fn node_id(&self, node: &NodeRef) -> NodeId {
        node.id.clone()
    }

    fn classify(&self, node: &NodeRef) -> Result<Vec<Field<NodeRef>>, ResolveError> {
        self.load_fields(&node.fields)
    }

    fn provider(
        &self,
        node: &NodeRef,
    ) -> Result<Option<Arc<dyn PermissionProvider<NodeRef>>>, ResolveError> {
        let Some(name) = &node.provider else {
            return Ok(None);
        };
        self.providers
            .get(name)
            .cloned()
            .map(Some)
            .ok_or_else(|| ResolveError::ProviderUnavailable {
                node: node.id.clone(),
            })
    }
}

impl MarkerSource for Graph {
    fn marker(&self, node: &NodeRef, property: &str) -> Option<String> {
        node.property(property).map(str::to_string)
    }
}

fn parse_node(spec: NodeSpec) -> Result<NodeRecord, GraphError> {
    let id = NodeId::new(spec.id);
    let fields = spec
        .fields
        .into_iter()
        .map(|field| parse_field(&id, field))
        .collect::<Result<_, _>>()?;
    Ok(NodeRecord {
        id,
        children: spec.children.into_iter().map(NodeId::new).collect(),
        properties: spec.properties,
        provider: spec.provider,
        fields,
    })
}

fn parse_field(node: &NodeId, spec: FieldSpec) -> Result<StoredField, GraphError> {
    let invalid = |expected: &str| {
        GraphError::Validation(format!(
            "field '{}' on node '{}': {} expects {}",
            spec.name, node, spec.kind, expected
        ))
    };

    let kind = match (spec.kind.as_str(), &spec.value) {
        ("permission_resource", Some(Value::String(value))) => StoredKind::Resource(value.parse()?),
        ("permission_resource", _) => return Err(invalid("a string value")),

        ("dynamic_permission_resource", None | Some(Value::Null)) => {
            StoredKind::Dynamic(PermissionMap::new())
        }
        ("dynamic_permission_resource", Some(Value::Object(entries))) => {
            let mut permissions = PermissionMap::new();
            for (resource, value) in entries {
                let value = value.as_str().ok_or_else(|| invalid("a table of strings"))?;
                permissions.insert(resource.clone(), value.parse()?);
            }
            StoredKind::Dynamic(permissions)
        }
        ("dynamic_permission_resource", _) => return Err(invalid("a table of strings")),

        ("many_to_one", None | Some(Value::Null)) => StoredKind::ManyToOne(None),
        ("many_to_one", Some(Value::String(id))) => StoredKind::ManyToOne(Some(NodeId::new(id.clone()))),
        ("many_to_one", _) => return Err(invalid("a node id")),

        ("many_to_many", None | Some(Value::Null)) => StoredKind::ManyToMany(Vec::new()),
        ("many_to_many", Some(Value::Array(ids))) => StoredKind::ManyToMany(
            ids.iter()
                .map(|id| id.as_str().map(NodeId::from).ok_or_else(|| invalid("an array of node ids")))
                .collect::<Result<_, _>>()?,
        ),
        ("many_to_many", _) => return Err(invalid("an array of node ids")),

        ("composite", _) => {
            let fields = spec
                .fields
                .iter()
                .cloned()
                .map(|field| parse_field(node, field))
                .collect::<Result<_, _>>()?;
            StoredKind::Composite(fields)
        }

        (other, _) => StoredKind::Other(other.to_string()),
    };

    Ok(StoredField {
        name: spec.name.clone(),
        kind,
    })
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
