// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.
//!
//! With a log file configured, events go to that file at `info` by default.
//! Otherwise they go to stderr at `warn`, so command output stays clean.
//! `SYNMIG_LOG` overrides the filter in both cases.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::env;

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered file output is flushed.
pub fn setup(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default = if log_file.is_some() { "info" } else { "warn" };
    let filter = filter(env::log_filter().as_deref(), default);

    let Some(path) = log_file else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let name = path
        .file_name()
        .with_context(|| format!("log file {} has no file name", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init();
    Ok(Some(guard))
}

/// Parse `directives`, falling back to `default` when unset or invalid.
fn filter(directives: Option<&str>, default: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
