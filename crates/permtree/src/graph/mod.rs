// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory content graph loaded from TOML or JSON.
//!
//! The graph is a reference [`FieldClassifier`](crate::schema::FieldClassifier)
//! used by the command-line tool and by tests. Relations are stored as node
//! ids and looked up when a node is classified, so a dangling relation
//! surfaces as [`ResolveError::NodeNotFound`](crate::error::ResolveError)
//! during resolution.

pub mod document;
pub mod grants;
pub mod store;

pub use document::{FieldSpec, GraphDocument, NodeSpec, ProviderSpec};
pub use grants::GrantProvider;
pub use store::{Graph, GraphError, NodeRecord, NodeRef, StoredField, StoredKind};
