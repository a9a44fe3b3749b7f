// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `synmig status`: where the store stands against the catalog.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use synmig_core::SchemaVersion;
use synmig_engine::MigrationRunner;
use synmig_storage::JsonDb;

use super::{open_store, MigrationView};
use crate::color::{self, Tone};
use crate::config::Settings;
use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    pub store: PathBuf,
    pub version: SchemaVersion,
    pub latest: SchemaVersion,
    pub target: SchemaVersion,
    pub pending: Vec<MigrationView>,
}

impl StatusView {
    pub fn collect(
        path: &Path,
        store: &dyn JsonDb,
        runner: &MigrationRunner,
        target: Option<SchemaVersion>,
    ) -> Result<Self> {
        let version = store.schema_version()?;
        let target = target.unwrap_or_else(|| runner.latest());
        let pending = runner
            .pending(version, target)
            .into_iter()
            .map(MigrationView::of)
            .collect();
        Ok(Self {
            store: path.to_path_buf(),
            version,
            latest: runner.latest(),
            target,
            pending,
        })
    }

    pub fn up_to_date(&self) -> bool {
        self.version >= self.target
    }
}

pub fn handle(settings: &Settings, format: OutputFormat) -> Result<()> {
    let store = open_store(settings)?;
    let view = StatusView::collect(
        &settings.store,
        &store,
        &MigrationRunner::builtin(),
        settings.target_version,
    )?;
    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Json => print_json(&mut out, &view),
        OutputFormat::Text => write_status(&mut out, &view),
    }
}

pub(crate) fn write_status(out: &mut impl Write, view: &StatusView) -> Result<()> {
    writeln!(out, "{} {}", color::styled(Tone::Header, "Store:  "), view.store.display())?;
    writeln!(out, "{} {}", color::styled(Tone::Header, "Version:"), view.version)?;
    writeln!(out, "{} {}", color::styled(Tone::Header, "Target: "), view.target)?;

    if view.version > view.target {
        writeln!(out, "\nStore is newer than the target version")?;
        return Ok(());
    }
    if view.up_to_date() {
        writeln!(out, "\nUp to date")?;
        return Ok(());
    }
    if view.pending.is_empty() {
        writeln!(out, "\nNo migrations pending; the version will be advanced on migrate")?;
        return Ok(());
    }

    writeln!(out)?;
    let mut table = Table::new(vec![
        Column::left("VERSION"),
        Column::status("STATUS"),
        Column::muted("DESCRIPTION"),
    ]);
    for migration in &view.pending {
        table.row(vec![
            migration.version.to_string(),
            "pending".to_string(),
            migration.description.clone(),
        ]);
    }
    table.render(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
