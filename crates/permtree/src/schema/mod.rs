// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter between a schema system and the resolver.
//!
//! The schema system owns the field definitions of a node. The resolver only
//! sees them through [`FieldClassifier`], as an ordered list of [`Field`]s
//! with a closed set of [`FieldKind`]s.

pub mod classification;
pub mod classifier;
pub mod field;

pub use classification::Classification;
pub use classifier::FieldClassifier;
pub use field::{Field, FieldKind};
