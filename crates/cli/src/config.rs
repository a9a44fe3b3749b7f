// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings resolution: command-line flag > environment > config file > default.

use crate::env;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use synmig_core::SchemaVersion;
use thiserror::Error;

/// File name of the store inside the state directory.
pub const STORE_FILE: &str = "store.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot locate a state directory; set SYNMIG_STORE or SYNMIG_STATE_DIR")]
    NoStateDir,
}

/// Optional TOML config file.
///
/// ```toml
/// store = "/var/lib/synmig/store.json"
/// target_version = 42
/// strict = false
/// log_file = "/var/log/synmig.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub store: Option<PathBuf>,
    pub target_version: Option<u32>,
    pub strict: Option<bool>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Load a config file. Relative paths inside it are taken relative to
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: FileConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(base) = path.parent() {
            config.store = config.store.map(|p| base.join(p));
            config.log_file = config.log_file.map(|p| base.join(p));
        }
        Ok(config)
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub store: PathBuf,
    pub target_version: Option<SchemaVersion>,
    pub strict: bool,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(flags: &Overrides) -> Result<Self, ConfigError> {
        let file = match flags.config.clone().or_else(env::config_path) {
            Some(path) => FileConfig::load(&path)?,
            None => FileConfig::default(),
        };
        Self::merge(flags, file)
    }

    fn merge(flags: &Overrides, file: FileConfig) -> Result<Self, ConfigError> {
        let store = match flags.store.clone().or_else(env::store_path).or(file.store) {
            Some(store) => store,
            None => env::state_dir()
                .ok_or(ConfigError::NoStateDir)?
                .join(STORE_FILE),
        };
        Ok(Self {
            store,
            target_version: file.target_version.map(SchemaVersion::new),
            strict: file.strict.unwrap_or(false),
            log_file: env::log_file().or(file.log_file),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
