// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The contract a schema system implements for the resolver.

use super::field::Field;
use crate::error::ResolveError;
use crate::node::NodeId;
use crate::provider::{PermissionProvider, Resolvable};
use std::sync::Arc;

/// Read access to nodes and their classified fields.
pub trait FieldClassifier {
    /// Node handle handed around during resolution.
    type Node;

    /// Stable identifier of `node`.
    fn node_id(&self, node: &Self::Node) -> NodeId;

    /// Classified fields of `node`, in declaration order.
    ///
    /// Related nodes are loaded here; a store failure is returned as an
    /// error and aborts the resolution.
    fn classify(&self, node: &Self::Node) -> Result<Vec<Field<Self::Node>>, ResolveError>;

    /// Custom permission provider of `node`, if it has one.
    ///
    /// Implementations return [`ResolveError::ProviderUnavailable`] for a
    /// node that claims a provider which cannot be supplied.
    fn provider(
        &self,
        _node: &Self::Node,
    ) -> Result<Option<Arc<dyn PermissionProvider<Self::Node>>>, ResolveError> {
        Ok(None)
    }

    /// `node` tagged with how it must be resolved.
    fn resolvable<'a>(
        &self,
        node: &'a Self::Node,
    ) -> Result<Resolvable<'a, Self::Node>, ResolveError> {
        Resolvable::of(self, node)
    }
}

impl<C: FieldClassifier + ?Sized> FieldClassifier for &C {
    type Node = C::Node;

    fn node_id(&self, node: &Self::Node) -> NodeId {
        (**self).node_id(node)
    }

    fn classify(&self, node: &Self::Node) -> Result<Vec<Field<Self::Node>>, ResolveError> {
        (**self).classify(node)
    }

    fn provider(
        &self,
        node: &Self::Node,
    ) -> Result<Option<Arc<dyn PermissionProvider<Self::Node>>>, ResolveError> {
        (**self).provider(node)
    }
}
