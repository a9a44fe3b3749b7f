// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schema version of the persisted documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Structural shape identifier of the stored documents.
///
/// A store that was never migrated reports [`SchemaVersion::INITIAL`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SchemaVersion(pub u32);

impl SchemaVersion {
    pub const INITIAL: SchemaVersion = SchemaVersion(0);

    pub const fn new(version: u32) -> Self {
        Self(version)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The version directly after this one, saturating at `u32::MAX`.
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u32> for SchemaVersion {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid schema version: {0:?}")]
pub struct ParseVersionError(pub String);

impl FromStr for SchemaVersion {
    type Err = ParseVersionError;

    /// Accepts `42`, `v42` and `up-42`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("up-")
            .or_else(|| trimmed.strip_prefix('v'))
            .unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .map(SchemaVersion)
            .map_err(|_| ParseVersionError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
