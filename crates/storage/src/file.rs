// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed document store with atomic, durable writes.
//!
//! The whole store is one JSON document:
//!
//! ```text
//! {
//!   "schema":       { "version": 42 },
//!   "collections":  { "connectors": {...}, "connections": {...}, "integrations": {...} },
//!   "lastModified": { "connectors": "2026-01-01T00:00:00Z", ... }
//! }
//! ```
//!
//! Each mutation is applied to a copy of the document, persisted, and only
//! then swapped in, so the in-memory view never runs ahead of the file.
//!
//! ## Write sequence
//!
//! ```text
//! serialize document
//! write to .tmp
//! fsync .tmp
//! rename .tmp → store
//! fsync directory
//! ```
//!
//! All file operations go through [`DocumentWriter`] so tests can inject
//! failures at any stage.

use crate::store::{collection_name, JsonDb, StoreError};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use synmig_core::{Collection, SchemaVersion};
use tracing::debug;

/// Version record stored next to the collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaRecord {
    pub version: SchemaVersion,
}

/// On-disk layout of a store file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDocument {
    #[serde(default)]
    pub schema: SchemaRecord,
    #[serde(default)]
    pub collections: BTreeMap<String, Collection>,
    /// Stamped only when a collection is actually written.
    #[serde(default)]
    pub last_modified: BTreeMap<String, DateTime<Utc>>,
}

/// Trait abstracting store file I/O for testability.
pub trait DocumentWriter: Send + Sync + 'static {
    /// Write serialized document data to a temporary file.
    fn write_tmp(&self, path: &Path, data: &[u8]) -> Result<(), StoreError>;

    /// Fsync a file to ensure data is durable.
    fn fsync_file(&self, path: &Path) -> Result<(), StoreError>;

    /// Atomically rename tmp file to final path.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), StoreError>;

    /// Fsync directory to make rename durable.
    fn fsync_dir(&self, path: &Path) -> Result<(), StoreError>;
}

/// Production writer using real filesystem operations.
#[derive(Debug, Clone, Default)]
pub struct FsDocumentWriter;

impl DocumentWriter for FsDocumentWriter {
    fn write_tmp(&self, path: &Path, data: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        file.write_all(data)?;
        Ok(())
    }

    fn fsync_file(&self, path: &Path) -> Result<(), StoreError> {
        let file = File::open(path)?;
        file.sync_all()?;
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), StoreError> {
        fs::rename(from, to)?;
        Ok(())
    }

    fn fsync_dir(&self, path: &Path) -> Result<(), StoreError> {
        let dir = File::open(path)?;
        dir.sync_all()?;
        Ok(())
    }
}

/// Document store persisted to a single JSON file.
pub struct FileJsonDb<W: DocumentWriter = FsDocumentWriter> {
    path: PathBuf,
    writer: W,
    document: Mutex<StoreDocument>,
}

impl FileJsonDb<FsDocumentWriter> {
    /// Open an existing store file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::open_with_writer(path, FsDocumentWriter)
    }

    /// Create a new, empty store file. Fails if the file already exists.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::create_with_writer(path, FsDocumentWriter)
    }
}

impl<W: DocumentWriter> FileJsonDb<W> {
    /// Open an existing store file with a custom writer (for testing).
    ///
    /// A file that does not parse is reported as [`StoreError::Corrupt`] and
    /// left untouched.
    pub fn open_with_writer(path: impl Into<PathBuf>, writer: W) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Err(StoreError::Missing(path));
        }
        let bytes = fs::read(&path)?;
        let document: StoreDocument =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
                path: path.clone(),
                message: e.to_string(),
            })?;
        debug!(
            path = %path.display(),
            version = document.schema.version.get(),
            collections = document.collections.len(),
            "opened store",
        );
        Ok(Self {
            path,
            writer,
            document: Mutex::new(document),
        })
    }

    /// Create a new store file with a custom writer (for testing).
    pub fn create_with_writer(path: impl Into<PathBuf>, writer: W) -> Result<Self, StoreError> {
        Self::from_document(path, writer, StoreDocument::default())
    }

    /// Create a new store file holding `document`. Fails if the file exists.
    pub fn from_document(
        path: impl Into<PathBuf>,
        writer: W,
        document: StoreDocument,
    ) -> Result<Self, StoreError> {
        let path = path.into();
        if path.exists() {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            )));
        }
        persist(&writer, &path, &document)?;
        Ok(Self {
            path,
            writer,
            document: Mutex::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the collection at `path` was last written, if ever.
    pub fn last_modified(&self, path: &str) -> Option<DateTime<Utc>> {
        let name = collection_name(path).ok()?;
        self.document.lock().last_modified.get(name).copied()
    }

    /// Copy of the current document.
    pub fn document(&self) -> StoreDocument {
        self.document.lock().clone()
    }

    /// Apply `change` to a copy of the document, persist it, then swap it in.
    fn commit(&self, change: impl FnOnce(&mut StoreDocument)) -> Result<(), StoreError> {
        let mut document = self.document.lock();
        let mut next = document.clone();
        change(&mut next);
        persist(&self.writer, &self.path, &next)?;
        *document = next;
        Ok(())
    }
}

/// Serialize and durably replace the store file.
fn persist<W: DocumentWriter>(
    writer: &W,
    path: &Path,
    document: &StoreDocument,
) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("tmp");
    let bytes = serde_json::to_vec_pretty(document)?;

    writer.write_tmp(&tmp_path, &bytes)?;
    writer.fsync_file(&tmp_path)?;
    writer.rename(&tmp_path, path)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        writer.fsync_dir(parent)?;
    }
    Ok(())
}

impl<W: DocumentWriter> JsonDb for FileJsonDb<W> {
    fn get(&self, path: &str) -> Result<Option<Collection>, StoreError> {
        let name = collection_name(path)?;
        Ok(self.document.lock().collections.get(name).cloned())
    }

    fn update(&self, path: &str, collection: Collection) -> Result<(), StoreError> {
        let name = collection_name(path)?.to_string();
        self.commit(|doc| {
            doc.last_modified.insert(name.clone(), Utc::now());
            doc.collections.insert(name, collection);
        })
        .map_err(|e| StoreError::WriteFailed {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    fn schema_version(&self) -> Result<SchemaVersion, StoreError> {
        Ok(self.document.lock().schema.version)
    }

    fn set_schema_version(&self, version: SchemaVersion) -> Result<(), StoreError> {
        self.commit(|doc| doc.schema.version = version)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
