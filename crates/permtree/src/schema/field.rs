// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classified node fields.

use crate::permission::{PermissionMap, PermissionValue};

/// Kind of a node field, carrying the field's stored value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind<N> {
    /// A single resource named after the field.
    PermissionResource(PermissionValue),
    /// Several resources declared directly on the node.
    DynamicPermissionResource(PermissionMap),
    /// Zero or one related node.
    ManyToOne(Option<N>),
    /// Ordered related nodes.
    ManyToMany(Vec<N>),
    /// Embedded sub-object whose fields are folded into the owner.
    Composite(Vec<Field<N>>),
    /// Any field the resolver does not understand. Contributes nothing.
    Other,
}

/// A named, classified field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field<N> {
    pub name: String,
    pub kind: FieldKind<N>,
}

impl<N> Field<N> {
    pub fn new(name: impl Into<String>, kind: FieldKind<N>) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn resource(name: impl Into<String>, value: PermissionValue) -> Self {
        Self::new(name, FieldKind::PermissionResource(value))
    }

    pub fn dynamic(name: impl Into<String>, permissions: PermissionMap) -> Self {
        Self::new(name, FieldKind::DynamicPermissionResource(permissions))
    }

    pub fn many_to_one(name: impl Into<String>, related: Option<N>) -> Self {
        Self::new(name, FieldKind::ManyToOne(related))
    }

    pub fn many_to_many(name: impl Into<String>, related: Vec<N>) -> Self {
        Self::new(name, FieldKind::ManyToMany(related))
    }

    pub fn composite(name: impl Into<String>, fields: Vec<Field<N>>) -> Self {
        Self::new(name, FieldKind::Composite(fields))
    }
}
