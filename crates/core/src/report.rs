// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration outcome records.
//!
//! Counts are returned by value from every walk and aggregated explicitly by
//! the caller; nothing here is shared or global.

use crate::{CollectionKind, SchemaVersion};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Outcome of walking one collection with one visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationResult {
    pub inspected_count: u64,
    pub migrated_count: u64,
    pub changed: bool,
}

impl MigrationResult {
    /// Record one inspected entity.
    pub fn record(&mut self, migrated: bool) {
        self.inspected_count += 1;
        if migrated {
            self.migrated_count += 1;
            self.changed = true;
        }
    }
}

impl AddAssign for MigrationResult {
    fn add_assign(&mut self, rhs: Self) {
        self.inspected_count += rhs.inspected_count;
        self.migrated_count += rhs.migrated_count;
        self.changed |= rhs.changed;
    }
}

/// Per-collection line of a step report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionReport {
    pub collection: CollectionKind,
    #[serde(flatten)]
    pub result: MigrationResult,
}

/// Outcome of one applied migration step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub target_version: SchemaVersion,
    pub description: String,
    pub collections: Vec<CollectionReport>,
}

impl StepReport {
    pub fn new(target_version: SchemaVersion, description: impl Into<String>) -> Self {
        Self {
            target_version,
            description: description.into(),
            collections: Vec::new(),
        }
    }

    pub fn push(&mut self, collection: CollectionKind, result: MigrationResult) {
        self.collections.push(CollectionReport { collection, result });
    }

    /// Sum of the per-collection results.
    pub fn total(&self) -> MigrationResult {
        let mut total = MigrationResult::default();
        for line in &self.collections {
            total += line.result;
        }
        total
    }

    pub fn total_migrated(&self) -> u64 {
        self.total().migrated_count
    }

    pub fn result_for(&self, collection: CollectionKind) -> Option<MigrationResult> {
        self.collections
            .iter()
            .find(|line| line.collection == collection)
            .map(|line| line.result)
    }
}

/// Inclusive run of versions passed without a registered migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    pub from: SchemaVersion,
    pub to: SchemaVersion,
}

impl VersionRange {
    pub fn new(from: SchemaVersion, to: SchemaVersion) -> Self {
        Self { from, to }
    }

    /// Number of versions in the range.
    pub fn count(&self) -> u64 {
        u64::from(self.to.get()).saturating_sub(u64::from(self.from.get())) + 1
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}..{}", self.from, self.to)
        }
    }
}

/// Outcome of a runner invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub from: SchemaVersion,
    pub to: SchemaVersion,
    pub steps: Vec<StepReport>,
    /// Versions passed without a registered migration (lenient runs only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<VersionRange>,
}

impl RunReport {
    pub fn unchanged(version: SchemaVersion) -> Self {
        Self {
            from: version,
            to: version,
            steps: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn total_migrated(&self) -> u64 {
        self.steps.iter().map(StepReport::total_migrated).sum()
    }

    /// Number of versions covered by `skipped`.
    pub fn skipped_count(&self) -> u64 {
        self.skipped.iter().map(VersionRange::count).sum()
    }

    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
