// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Partitioning of classified fields into direct permissions and relations.

use super::field::{Field, FieldKind};
use crate::permission::PermissionMap;

/// A node's fields, split into what it declares and what it points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification<N> {
    /// Permissions declared on the node itself, composites flattened in.
    pub direct: PermissionMap,
    /// Related nodes in field declaration order.
    pub related: Vec<N>,
}

impl<N> Default for Classification<N> {
    fn default() -> Self {
        Self {
            direct: PermissionMap::new(),
            related: Vec::new(),
        }
    }
}

impl<N> Classification<N> {
    /// Fold a node's fields.
    pub fn fold(fields: Vec<Field<N>>) -> Self {
        let mut classification = Self::default();
        classification.fold_fields(fields);
        classification
    }

    fn fold_fields(&mut self, fields: Vec<Field<N>>) {
        for field in fields {
            match field.kind {
                FieldKind::PermissionResource(value) => {
                    self.direct.insert(field.name, value);
                }
                FieldKind::DynamicPermissionResource(permissions) => {
                    self.direct.extend_from(&permissions);
                }
                FieldKind::ManyToOne(related) => self.related.extend(related),
                FieldKind::ManyToMany(related) => self.related.extend(related),
                // Sub-object keys share the owner's namespace.
                FieldKind::Composite(fields) => self.fold_fields(fields),
                FieldKind::Other => {
                    tracing::trace!(field = %field.name, "skipping unclassified field");
                }
            }
        }
    }

    /// Whether the node neither declares permissions nor relates to anything.
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.related.is_empty()
    }
}

#[cfg(test)]
#[path = "classification_tests.rs"]
mod tests;
