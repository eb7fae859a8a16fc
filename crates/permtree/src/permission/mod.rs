// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission values and maps.
//!
//! This module provides the data model shared by every resolution step:
//!
//! - The tri-state [`PermissionValue`] (`allow`, `deny`, `inherit`)
//! - The [`PermissionMap`] of resource name to value
//! - The optimistic merge used to fold related nodes into a base node

pub mod map;
pub mod merge;
pub mod value;

pub use map::PermissionMap;
pub use merge::merge_optimistic;
pub use value::PermissionValue;
