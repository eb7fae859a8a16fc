// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The already-authenticated identity a permission question is asked for.

use serde::{Deserialize, Serialize};

/// An authenticated user.
///
/// Only custom permission providers look at the user; default resolution
/// of plain nodes is user independent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
