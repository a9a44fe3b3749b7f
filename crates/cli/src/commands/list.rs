// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `synmig list`: the built-in migration catalog.

use std::io::Write;

use anyhow::Result;
use synmig_engine::MigrationRunner;

use super::MigrationView;
use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

pub fn handle(format: OutputFormat) -> Result<()> {
    let mut out = std::io::stdout().lock();
    write_list(&mut out, &MigrationRunner::builtin(), format)
}

pub(crate) fn write_list(
    out: &mut impl Write,
    runner: &MigrationRunner,
    format: OutputFormat,
) -> Result<()> {
    let views: Vec<MigrationView> = runner
        .migrations()
        .iter()
        .map(|m| MigrationView::of(m.as_ref()))
        .collect();

    match format {
        OutputFormat::Json => print_json(out, &views),
        OutputFormat::Text => {
            if views.is_empty() {
                writeln!(out, "No migrations registered")?;
                return Ok(());
            }
            let mut table = Table::new(vec![Column::left("VERSION"), Column::muted("DESCRIPTION")]);
            for view in views {
                table.row(vec![view.version.to_string(), view.description]);
            }
            table.render(out)?;
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
