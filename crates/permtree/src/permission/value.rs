// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tri-state permission value.

use crate::error::ResolveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission declared for a single resource.
///
/// A missing key and `Inherit` are different things: a missing key has no
/// opinion, `Inherit` explicitly defers to related nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionValue {
    Allow,
    Deny,
    Inherit,
}

impl PermissionValue {
    /// Wire representation (`"allow"`, `"deny"` or `"inherit"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
            Self::Inherit => "inherit",
        }
    }

    /// Whether the value is an explicit decision rather than a deferral.
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Allow | Self::Deny)
    }
}

impl fmt::Display for PermissionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionValue {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allow" => Ok(Self::Allow),
            "deny" => Ok(Self::Deny),
            "inherit" => Ok(Self::Inherit),
            other => Err(ResolveError::InvalidPermissionValue(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
