// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the engine crate.

use parking_lot::Mutex;
use std::collections::HashSet;
use synmig_core::{Collection, SchemaVersion};
use synmig_storage::{JsonDb, MemoryJsonDb, StoreError};

/// Store operations in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreOp {
    Get(String),
    Update(String),
    SetVersion(SchemaVersion),
}

/// Memory store that records every call and can fail writes on demand.
#[derive(Default)]
pub(crate) struct RecordingStore {
    pub inner: MemoryJsonDb,
    ops: Mutex<Vec<StoreOp>>,
    failing_paths: Mutex<HashSet<String>>,
}

impl RecordingStore {
    pub fn new(inner: MemoryJsonDb) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    /// Make every `update` of `path` fail.
    pub fn fail_updates_to(&self, path: &str) {
        self.failing_paths.lock().insert(path.to_string());
    }

    pub fn heal(&self) {
        self.failing_paths.lock().clear();
    }

    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops.lock().clone()
    }

    pub fn updates(&self) -> Vec<String> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                StoreOp::Update(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn clear_ops(&self) {
        self.ops.lock().clear();
    }
}

impl JsonDb for RecordingStore {
    fn get(&self, path: &str) -> Result<Option<Collection>, StoreError> {
        self.ops.lock().push(StoreOp::Get(path.to_string()));
        self.inner.get(path)
    }

    fn update(&self, path: &str, collection: Collection) -> Result<(), StoreError> {
        if self.failing_paths.lock().contains(path) {
            return Err(StoreError::WriteFailed {
                path: path.to_string(),
                message: "injected failure".to_string(),
            });
        }
        self.ops.lock().push(StoreOp::Update(path.to_string()));
        self.inner.update(path, collection)
    }

    fn schema_version(&self) -> Result<SchemaVersion, StoreError> {
        self.inner.schema_version()
    }

    fn set_schema_version(&self, version: SchemaVersion) -> Result<(), StoreError> {
        self.ops.lock().push(StoreOp::SetVersion(version));
        self.inner.set_schema_version(version)
    }
}
