// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command handlers

pub mod list;
pub mod migrate;
pub mod status;

use serde::Serialize;
use synmig_core::SchemaVersion;
use synmig_engine::Migration;
use synmig_storage::FileJsonDb;

use crate::config::Settings;

/// Open the configured store file. A missing file is an error.
pub fn open_store(settings: &Settings) -> anyhow::Result<FileJsonDb> {
    Ok(FileJsonDb::open(&settings.store)?)
}

/// One registered migration, as shown by `list` and `status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MigrationView {
    pub version: SchemaVersion,
    pub description: String,
}

impl MigrationView {
    pub fn of(migration: &dyn Migration) -> Self {
        Self {
            version: migration.target_version(),
            description: migration.description().to_string(),
        }
    }
}
