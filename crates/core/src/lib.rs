// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! synmig-core: shared types for the integration store upgrader

pub mod collection;
pub mod id;
pub mod json;
pub mod report;
pub mod version;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use collection::{Collection, CollectionKind};
pub use id::{IdGen, KeyGen, SequentialIdGen};
pub use json::{JsonObjectExt, Object};
pub use report::{CollectionReport, MigrationResult, RunReport, StepReport, VersionRange};
pub use version::{ParseVersionError, SchemaVersion};
