// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

// --- State directory ---

/// Resolve state directory: SYNMIG_STATE_DIR > platform state dir > ~/.local/state/synmig
pub fn state_dir() -> Option<PathBuf> {
    if let Some(dir) = non_empty("SYNMIG_STATE_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Some(dir) = dirs::state_dir() {
        return Some(dir.join("synmig"));
    }
    dirs::home_dir().map(|home| home.join(".local/state/synmig"))
}

// --- Store and config ---

pub fn store_path() -> Option<PathBuf> {
    non_empty("SYNMIG_STORE").map(PathBuf::from)
}

pub fn config_path() -> Option<PathBuf> {
    non_empty("SYNMIG_CONFIG").map(PathBuf::from)
}

// --- Logging ---

/// Filter directives for the log subscriber, e.g. `synmig_engine=debug`.
pub fn log_filter() -> Option<String> {
    non_empty("SYNMIG_LOG")
}

pub fn log_file() -> Option<PathBuf> {
    non_empty("SYNMIG_LOG_FILE").map(PathBuf::from)
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
