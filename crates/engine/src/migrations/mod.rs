// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in migration catalog.
//!
//! Each module is named after the version it upgrades to (`up_<version>`).

use crate::migration::Migration;
use synmig_core::SchemaVersion;

pub mod up_28;
pub mod up_29;
pub mod up_40;
pub mod up_42;

/// Highest version the built-in catalog reaches.
pub const LATEST: SchemaVersion = SchemaVersion::new(42);

/// Every built-in migration, in ascending target order.
pub fn builtin() -> Vec<Box<dyn Migration>> {
    vec![
        Box::new(up_28::migration()),
        Box::new(up_29::migration()),
        Box::new(up_40::migration()),
        Box::new(up_42::migration()),
    ]
}
