// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process document store.

use crate::store::{collection_name, JsonDb, StoreError};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use synmig_core::{Collection, IdGen, SchemaVersion};

#[derive(Debug, Default)]
struct MemoryState {
    collections: BTreeMap<String, Collection>,
    version: SchemaVersion,
    writes: HashMap<String, u64>,
}

/// Document store kept entirely in memory.
///
/// Counts `update` calls per collection so callers can observe whether a
/// collection was rewritten.
#[derive(Debug, Default)]
pub struct MemoryJsonDb {
    state: Mutex<MemoryState>,
}

impl MemoryJsonDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(version: SchemaVersion) -> Self {
        let db = Self::default();
        db.state.lock().version = version;
        db
    }

    /// Seed a collection without counting it as a write.
    pub fn insert(&self, path: &str, collection: Collection) -> Result<(), StoreError> {
        let name = collection_name(path)?;
        self.state
            .lock()
            .collections
            .insert(name.to_string(), collection);
        Ok(())
    }

    /// Add one entity under a freshly generated key and return the key.
    ///
    /// The entity is stored as given; its own `id`, if any, is neither used
    /// as the key nor rewritten. Does not count as a write.
    pub fn push<G: IdGen>(
        &self,
        path: &str,
        entity: Value,
        ids: &G,
    ) -> Result<String, StoreError> {
        let name = collection_name(path)?;
        let key = ids.next();
        self.state
            .lock()
            .collections
            .entry(name.to_string())
            .or_default()
            .insert(key.clone(), entity);
        Ok(key)
    }

    /// Number of `update` calls made for `path`.
    pub fn write_count(&self, path: &str) -> u64 {
        let state = self.state.lock();
        collection_name(path)
            .ok()
            .and_then(|name| state.writes.get(name).copied())
            .unwrap_or(0)
    }

    pub fn total_writes(&self) -> u64 {
        self.state.lock().writes.values().sum()
    }
}

impl JsonDb for MemoryJsonDb {
    fn get(&self, path: &str) -> Result<Option<Collection>, StoreError> {
        let name = collection_name(path)?;
        Ok(self.state.lock().collections.get(name).cloned())
    }

    fn update(&self, path: &str, collection: Collection) -> Result<(), StoreError> {
        let name = collection_name(path)?;
        let mut state = self.state.lock();
        state.collections.insert(name.to_string(), collection);
        *state.writes.entry(name.to_string()).or_default() += 1;
        Ok(())
    }

    fn schema_version(&self) -> Result<SchemaVersion, StoreError> {
        Ok(self.state.lock().version)
    }

    fn set_schema_version(&self, version: SchemaVersion) -> Result<(), StoreError> {
        self.state.lock().version = version;
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
