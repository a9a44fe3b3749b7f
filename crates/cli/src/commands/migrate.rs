// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `synmig migrate`: bring the store up to a target schema version.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use synmig_core::{RunReport, SchemaVersion};
use synmig_engine::{GapPolicy, MigrationError, MigrationRunner};
use synmig_storage::{JsonDb, OverlayJsonDb};

use super::open_store;
use crate::config::Settings;
use crate::output::{print_json, write_run_report, OutputFormat};

#[derive(clap::Args, Debug, Default)]
pub struct MigrateArgs {
    /// Target schema version (42, v42 or up-42); defaults to the latest
    #[arg(long, value_name = "VERSION")]
    pub to: Option<SchemaVersion>,

    /// Require a migration for every version up to the target
    #[arg(long)]
    pub strict: bool,

    /// Run the migrations without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MigrateView<'a> {
    store: PathBuf,
    dry_run: bool,
    #[serde(flatten)]
    report: &'a RunReport,
}

/// Run the migrations `args` and `settings` ask for against `store`.
pub fn execute(
    args: &MigrateArgs,
    settings: &Settings,
    store: &dyn JsonDb,
) -> Result<RunReport, MigrationError> {
    let policy = if args.strict || settings.strict {
        GapPolicy::Strict
    } else {
        GapPolicy::Lenient
    };
    let runner = MigrationRunner::builtin().with_gap_policy(policy);
    let target = args
        .to
        .or(settings.target_version)
        .unwrap_or_else(|| runner.latest());

    if args.dry_run {
        let overlay = OverlayJsonDb::new(store);
        runner.migrate_to(&overlay, target)
    } else {
        runner.migrate_to(store, target)
    }
}

pub fn handle(args: MigrateArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let store = open_store(settings)?;
    let report = execute(&args, settings, &store)
        .with_context(|| format!("failed to migrate {}", settings.store.display()))?;

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Json => print_json(
            &mut out,
            &MigrateView {
                store: settings.store.clone(),
                dry_run: args.dry_run,
                report: &report,
            },
        ),
        OutputFormat::Text => write_run_report(&mut out, &report, args.dry_run),
    }
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
