// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! synmig migration engine

pub mod migration;
pub mod migrations;
pub mod runner;
pub mod transform;
pub mod visitor;
pub mod walker;

#[cfg(test)]
mod test_helpers;

pub use migration::{Migration, MigrationError, VisitorMigration};
pub use runner::{GapPolicy, MigrationRunner};
pub use transform::{rename, Rename, RenameContext, RenameTable};
pub use visitor::{ActionOwner, EntityVisitor, IntegrationShape};
pub use walker::{walk, walk_path};
