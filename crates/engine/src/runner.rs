// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration runner.
//!
//! Applies registered migrations in ascending target order, persisting the
//! store version after every step so an interrupted run resumes at the next
//! unapplied step.

use crate::migration::{Migration, MigrationError};
use crate::migrations;
use synmig_core::{RunReport, SchemaVersion, VersionRange};
use synmig_storage::JsonDb;
use tracing::{error, info, warn};

/// How the runner treats versions without a registered migration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GapPolicy {
    /// Every version between the current and the target needs a migration.
    /// Checked before anything is written.
    #[default]
    Strict,
    /// Versions without a migration are passed over unchanged. The target
    /// may not lie past the newest registered migration.
    Lenient,
}

/// Ordered registry of migrations plus the policy to run them with.
#[derive(Default)]
pub struct MigrationRunner {
    migrations: Vec<Box<dyn Migration>>,
    gap_policy: GapPolicy,
}

impl MigrationRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner loaded with the built-in catalog.
    ///
    /// The catalog is sparse, so gaps are allowed.
    pub fn builtin() -> Self {
        Self {
            migrations: migrations::builtin(),
            gap_policy: GapPolicy::Lenient,
        }
    }

    pub fn with_gap_policy(mut self, gap_policy: GapPolicy) -> Self {
        self.gap_policy = gap_policy;
        self
    }

    pub fn gap_policy(&self) -> GapPolicy {
        self.gap_policy
    }

    /// Add a migration, keeping the registry sorted by target version.
    pub fn register(&mut self, migration: Box<dyn Migration>) -> Result<(), MigrationError> {
        let version = migration.target_version();
        match self
            .migrations
            .binary_search_by_key(&version, |m| m.target_version())
        {
            Ok(_) => Err(MigrationError::Duplicate(version)),
            Err(pos) => {
                self.migrations.insert(pos, migration);
                Ok(())
            }
        }
    }

    pub fn migrations(&self) -> &[Box<dyn Migration>] {
        &self.migrations
    }

    /// Highest registered target version, or the initial version when empty.
    pub fn latest(&self) -> SchemaVersion {
        self.migrations
            .last()
            .map(|m| m.target_version())
            .unwrap_or(SchemaVersion::INITIAL)
    }

    /// Migrations that would run to go from `current` to `target`.
    pub fn pending(&self, current: SchemaVersion, target: SchemaVersion) -> Vec<&dyn Migration> {
        self.migrations
            .iter()
            .filter(|m| m.target_version() > current && m.target_version() <= target)
            .map(|m| m.as_ref())
            .collect()
    }

    /// Bring the store up to the latest registered version.
    pub fn migrate(&self, store: &dyn JsonDb) -> Result<RunReport, MigrationError> {
        self.migrate_to(store, self.latest())
    }

    pub fn migrate_to(
        &self,
        store: &dyn JsonDb,
        target: SchemaVersion,
    ) -> Result<RunReport, MigrationError> {
        let current = store.schema_version()?;
        if target < current {
            return Err(MigrationError::TooNew { current, target });
        }
        if target == current {
            info!(version = %current, "store already at target version");
            return Ok(RunReport::unchanged(current));
        }

        let pending = self.pending(current, target);
        match self.gap_policy {
            GapPolicy::Strict => check_contiguous(&pending, current, target)?,
            GapPolicy::Lenient if target > self.latest() => {
                return Err(MigrationError::BeyondLatest {
                    target,
                    latest: self.latest(),
                });
            }
            GapPolicy::Lenient => {}
        }

        info!(from = %current, to = %target, steps = pending.len(), "migrating store");
        let mut report = RunReport::unchanged(current);
        let mut version = current;
        for migration in pending {
            let step_target = migration.target_version();
            skip_to(&mut report, version, step_target);

            let step = match migration.apply(store) {
                Ok(step) => step,
                Err(source) => {
                    error!(
                        target_version = %step_target,
                        description = migration.description(),
                        error = %source,
                        "migration failed, store version not advanced",
                    );
                    return Err(MigrationError::Failed {
                        version: step_target,
                        source,
                    });
                }
            };
            store
                .set_schema_version(step_target)
                .map_err(|source| MigrationError::Failed {
                    version: step_target,
                    source,
                })?;

            info!(
                target_version = %step_target,
                total_migrated = step.total_migrated(),
                description = migration.description(),
                "migration applied",
            );
            version = step_target;
            report.to = version;
            report.steps.push(step);
        }

        if version < target {
            skip_to(&mut report, version, target.next());
            store.set_schema_version(target)?;
            report.to = target;
        }
        Ok(report)
    }
}

/// Record the versions strictly between `from` and `to` as one skipped range.
fn skip_to(report: &mut RunReport, from: SchemaVersion, to: SchemaVersion) {
    let first = from.next();
    if first >= to {
        return;
    }
    let range = VersionRange::new(first, SchemaVersion::new(to.get() - 1));
    warn!(
        from = %range.from,
        to = %range.to,
        "no migration registered, passing versions unchanged",
    );
    report.skipped.push(range);
}

fn check_contiguous(
    pending: &[&dyn Migration],
    current: SchemaVersion,
    target: SchemaVersion,
) -> Result<(), MigrationError> {
    let mut reached = current;
    for migration in pending {
        let next = migration.target_version();
        if next != reached.next() {
            return Err(MigrationError::VersionSkip {
                from: reached,
                to: next,
            });
        }
        reached = next;
    }
    if reached != target {
        return Err(MigrationError::VersionSkip {
            from: reached,
            to: target,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
