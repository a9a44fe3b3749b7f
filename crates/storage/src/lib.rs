// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Document stores for the integration store upgrader

mod file;
mod memory;
mod overlay;
mod store;

pub use file::{DocumentWriter, FileJsonDb, FsDocumentWriter, SchemaRecord, StoreDocument};
pub use memory::MemoryJsonDb;
pub use overlay::OverlayJsonDb;
pub use store::{collection_name, JsonDb, StoreError, SCHEMA_VERSION_PATH};
