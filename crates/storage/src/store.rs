// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document accessor contract.
//!
//! A store holds whole collections addressed by path (`/connectors`,
//! `/connections`, `/integrations`) plus the schema version, which lives at
//! [`SCHEMA_VERSION_PATH`] and is never part of a collection.

use std::io;
use std::path::PathBuf;
use synmig_core::{Collection, SchemaVersion};
use thiserror::Error;

/// Logical location of the persisted schema version.
pub const SCHEMA_VERSION_PATH: &str = "/schema/version";

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid store path: {0:?}")]
    InvalidPath(String),
    #[error("store not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("corrupt store {}: {message}", .path.display())]
    Corrupt { path: PathBuf, message: String },
    #[error("write to {path} failed: {message}")]
    WriteFailed { path: String, message: String },
}

/// Key-value access to whole JSON collections.
///
/// `get` never returns a partial collection and `update` replaces the stored
/// collection atomically. Implementations assume a single writer.
pub trait JsonDb: Send + Sync {
    /// Read the collection at `path`, `None` when absent.
    fn get(&self, path: &str) -> Result<Option<Collection>, StoreError>;

    /// Replace the collection at `path`.
    fn update(&self, path: &str, collection: Collection) -> Result<(), StoreError>;

    /// Current schema version; a store that was never migrated reports
    /// [`SchemaVersion::INITIAL`].
    fn schema_version(&self) -> Result<SchemaVersion, StoreError>;

    fn set_schema_version(&self, version: SchemaVersion) -> Result<(), StoreError>;
}

/// Validate a collection path and return the collection name.
///
/// Paths have exactly one segment after a leading slash. The `schema`
/// segment is reserved for the version record.
pub fn collection_name(path: &str) -> Result<&str, StoreError> {
    let name = path
        .strip_prefix('/')
        .filter(|name| !name.is_empty() && !name.contains('/'))
        .ok_or_else(|| StoreError::InvalidPath(path.to_string()))?;
    if name == "schema" {
        return Err(StoreError::InvalidPath(path.to_string()));
    }
    Ok(name)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
