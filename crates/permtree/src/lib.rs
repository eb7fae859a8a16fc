// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Effective permission resolution for hierarchical content graphs.
//!
//! A node declares tri-state permissions (`allow`, `deny`, `inherit`) in its
//! own fields and relates to other nodes through relation fields.
//! [`PermissionResolver`] folds the permissions of related nodes into the
//! node's own declarations:
//!
//! - Values set to `allow` or `deny` on the node itself always win
//! - Where the node is silent or says `inherit`, related nodes are merged in
//!   declaration order, and once one of them allows a resource it stays
//!   allowed
//! - Relation cycles are cut, and finished maps are memoized
//!
//! [`AccessChecker`] turns the merged map into a yes/no answer, and
//! [`NavigationFilter`] hides navigation entries a user may not see.

pub mod access;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod identity;
pub mod logging;
pub mod navigation;
pub mod node;
pub mod permission;
pub mod provider;
pub mod resolver;
pub mod schema;

pub use access::AccessChecker;
pub use config::{CachePolicy, ResolverConfig};
pub use error::ResolveError;
pub use identity::User;
pub use navigation::NavigationFilter;
pub use node::NodeId;
pub use permission::{merge_optimistic, PermissionMap, PermissionValue};
pub use provider::{PermissionProvider, Resolvable};
pub use resolver::{PermissionCache, PermissionResolver, ResolutionContext};
pub use schema::{Field, FieldClassifier, FieldKind};
