// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission-aware filtering of navigation children.

use crate::access::AccessChecker;
use crate::error::ResolveError;
use crate::identity::User;
use crate::schema::FieldClassifier;

/// Node property naming the resource a navigation entry requires.
pub const PERMISSION_RESOURCE_PROPERTY: &str = "permission_resource";

/// Read access to string properties of a node.
pub trait MarkerSource: FieldClassifier {
    fn marker(&self, node: &Self::Node, property: &str) -> Option<String>;
}

/// Filters the children of a navigation parent down to those the user may see.
pub struct NavigationFilter<'a, C: MarkerSource> {
    checker: &'a AccessChecker<C>,
    property: String,
}

impl<'a, C: MarkerSource> NavigationFilter<'a, C> {
    pub fn new(checker: &'a AccessChecker<C>) -> Self {
        Self {
            checker,
            property: PERMISSION_RESOURCE_PROPERTY.to_string(),
        }
    }

    /// Read the required resource from a different property.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    /// Keep children without a marker, or whose marker resource is allowed.
    ///
    /// Order is preserved. The first resolution error aborts the filter.
    pub fn filter_children(
        &self,
        children: Vec<C::Node>,
        user: Option<&User>,
    ) -> Result<Vec<C::Node>, ResolveError> {
        let classifier = self.checker.resolver().classifier();
        let mut allowed = Vec::with_capacity(children.len());
        for child in children {
            let visible = match classifier.marker(&child, &self.property) {
                Some(resource) if !resource.is_empty() => {
                    self.checker.is_allowed(&child, &resource, user)?
                }
                _ => true,
            };
            if visible {
                allowed.push(child);
            }
        }
        Ok(allowed)
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
