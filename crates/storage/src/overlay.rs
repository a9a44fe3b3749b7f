// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Copy-on-write view over another store, used for dry runs.
//!
//! Reads fall through to the wrapped store until a collection has been
//! written through the overlay; writes and version changes never reach the
//! wrapped store.

use crate::store::{collection_name, JsonDb, StoreError};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use synmig_core::{Collection, SchemaVersion};

#[derive(Debug, Default)]
struct OverlayState {
    collections: BTreeMap<String, Collection>,
    version: Option<SchemaVersion>,
}

pub struct OverlayJsonDb<'a, S: JsonDb + ?Sized> {
    inner: &'a S,
    state: Mutex<OverlayState>,
}

impl<'a, S: JsonDb + ?Sized> OverlayJsonDb<'a, S> {
    pub fn new(inner: &'a S) -> Self {
        Self {
            inner,
            state: Mutex::new(OverlayState::default()),
        }
    }

    /// Collection paths written through the overlay, sorted.
    pub fn written_paths(&self) -> Vec<String> {
        self.state
            .lock()
            .collections
            .keys()
            .map(|name| format!("/{name}"))
            .collect()
    }
}

impl<S: JsonDb + ?Sized> JsonDb for OverlayJsonDb<'_, S> {
    fn get(&self, path: &str) -> Result<Option<Collection>, StoreError> {
        let name = collection_name(path)?;
        if let Some(collection) = self.state.lock().collections.get(name) {
            return Ok(Some(collection.clone()));
        }
        self.inner.get(path)
    }

    fn update(&self, path: &str, collection: Collection) -> Result<(), StoreError> {
        let name = collection_name(path)?;
        self.state
            .lock()
            .collections
            .insert(name.to_string(), collection);
        Ok(())
    }

    fn schema_version(&self) -> Result<SchemaVersion, StoreError> {
        match self.state.lock().version {
            Some(version) => Ok(version),
            None => self.inner.schema_version(),
        }
    }

    fn set_schema_version(&self, version: SchemaVersion) -> Result<(), StoreError> {
        self.state.lock().version = Some(version);
        Ok(())
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
