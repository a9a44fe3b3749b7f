// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collection walker: read once, visit every entity, write once if dirty.

use serde_json::Value;
use synmig_core::{Collection, CollectionKind, MigrationResult};
use synmig_storage::{JsonDb, StoreError};
use tracing::{debug, info, warn};

/// Walk one of the well-known collections.
pub fn walk<S, F>(store: &S, kind: CollectionKind, visit: F) -> Result<MigrationResult, StoreError>
where
    S: JsonDb + ?Sized,
    F: FnMut(&mut Value) -> bool,
{
    walk_path(store, kind.path(), visit)
}

/// Apply `visit` to every entity of the collection at `path`.
///
/// An absent collection is a zeroed result and no write. The collection is
/// written back once, and only when at least one entity changed. An entity
/// whose `id` was changed by the visitor is re-keyed under its new id unless
/// that key is already taken.
pub fn walk_path<S, F>(store: &S, path: &str, mut visit: F) -> Result<MigrationResult, StoreError>
where
    S: JsonDb + ?Sized,
    F: FnMut(&mut Value) -> bool,
{
    let Some(mut collection) = store.get(path)? else {
        debug!(collection = path, "collection absent, nothing to migrate");
        return Ok(MigrationResult::default());
    };

    let mut result = MigrationResult::default();
    let mut renamed = Vec::new();
    for (key, entity) in collection.iter_mut() {
        let before = entity_id(entity);
        let migrated = visit(entity);
        result.record(migrated);
        if migrated {
            if let Some(id) = entity_id(entity) {
                if before.as_deref() != Some(id.as_str()) && id != *key {
                    renamed.push((key.clone(), id));
                }
            }
        }
    }

    if !renamed.is_empty() {
        rekey(&mut collection, path, renamed);
    }

    if result.changed {
        store.update(path, collection)?;
    }

    info!(
        collection = path,
        inspected = result.inspected_count,
        migrated = result.migrated_count,
        "collection walked",
    );
    Ok(result)
}

fn entity_id(entity: &Value) -> Option<String> {
    entity.get("id").and_then(Value::as_str).map(str::to_string)
}

fn rekey(collection: &mut Collection, path: &str, renamed: Vec<(String, String)>) {
    for (old, new) in renamed {
        if collection.contains_key(&new) {
            warn!(
                collection = path,
                from = %old,
                to = %new,
                "renamed entity id already taken, keeping old key",
            );
            continue;
        }
        if let Some(entity) = collection.remove(&old) {
            collection.insert(new, entity);
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
