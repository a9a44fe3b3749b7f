// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Versioned migration steps.
//!
//! A migration brings the store from the version below its target to the
//! target. It re-reads every collection it touches, so it never depends on
//! in-memory state from an earlier step.

use crate::visitor::{migrate_entity, EntityVisitor};
use crate::walker::walk;
use synmig_core::{CollectionKind, SchemaVersion, StepReport};
use synmig_storage::{JsonDb, StoreError};
use thiserror::Error;

/// Errors that stop a migration run.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("migration {version} failed")]
    Failed {
        version: SchemaVersion,
        #[source]
        source: StoreError,
    },
    #[error("no migration registered between {from} and {to}")]
    VersionSkip {
        from: SchemaVersion,
        to: SchemaVersion,
    },
    #[error("store version {current} is newer than requested target {target}")]
    TooNew {
        current: SchemaVersion,
        target: SchemaVersion,
    },
    #[error("target {target} is past the newest registered migration {latest}")]
    BeyondLatest {
        target: SchemaVersion,
        latest: SchemaVersion,
    },
    #[error("migration {0} is registered twice")]
    Duplicate(SchemaVersion),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One numbered schema upgrade.
pub trait Migration: Send + Sync {
    fn target_version(&self) -> SchemaVersion;

    fn description(&self) -> &str;

    /// Walk the store and rewrite what this step covers.
    ///
    /// A store error aborts the step; collections already written stay
    /// written.
    fn apply(&self, store: &dyn JsonDb) -> Result<StepReport, StoreError>;
}

/// A migration expressed as an [`EntityVisitor`] run over a set of collections.
pub struct VisitorMigration<V> {
    version: SchemaVersion,
    description: &'static str,
    collections: &'static [CollectionKind],
    visitor: V,
}

impl<V: EntityVisitor + Send + Sync> VisitorMigration<V> {
    /// Visit every well-known collection.
    pub fn new(version: u32, description: &'static str, visitor: V) -> Self {
        Self {
            version: SchemaVersion::new(version),
            description,
            collections: &CollectionKind::ALL,
            visitor,
        }
    }

    /// Restrict the walk to the given collections, in order.
    pub fn only(mut self, collections: &'static [CollectionKind]) -> Self {
        self.collections = collections;
        self
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn collections(&self) -> &[CollectionKind] {
        self.collections
    }
}

impl<V: EntityVisitor + Send + Sync> Migration for VisitorMigration<V> {
    fn target_version(&self) -> SchemaVersion {
        self.version
    }

    fn description(&self) -> &str {
        self.description
    }

    fn apply(&self, store: &dyn JsonDb) -> Result<StepReport, StoreError> {
        let mut report = StepReport::new(self.version, self.description);
        for &kind in self.collections {
            let result = walk(store, kind, |entity| {
                migrate_entity(&self.visitor, kind, entity)
            })?;
            report.push(kind, result);
        }
        Ok(report)
    }
}

#[cfg(test)]
#[path = "migration_tests.rs"]
mod tests;
