// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use synmig_core::RunReport;

use crate::table::{Column, Table};

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pretty-print `value` as JSON followed by a newline.
pub fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Text rendering of a migration run.
pub fn write_run_report(out: &mut impl Write, report: &RunReport, dry_run: bool) -> anyhow::Result<()> {
    if dry_run {
        writeln!(out, "Dry run: no changes written\n")?;
    }
    if report.is_noop() {
        writeln!(out, "Store already at {}", report.to)?;
        return Ok(());
    }

    let verb = if dry_run { "Would migrate" } else { "Migrated" };
    writeln!(out, "{verb} store from {} to {}", report.from, report.to)?;

    if !report.steps.is_empty() {
        writeln!(out)?;
        let mut table = Table::new(vec![
            Column::left("VERSION"),
            Column::left("COLLECTION"),
            Column::right("INSPECTED"),
            Column::right("MIGRATED"),
        ]);
        for step in &report.steps {
            for line in &step.collections {
                table.row(vec![
                    step.target_version.to_string(),
                    line.collection.to_string(),
                    line.result.inspected_count.to_string(),
                    line.result.migrated_count.to_string(),
                ]);
            }
        }
        table.render(out)?;
    }

    writeln!(
        out,
        "\n{} entities migrated in {} step(s), {} version(s) without migrations",
        report.total_migrated(),
        report.steps.len(),
        report.skipped_count()
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
