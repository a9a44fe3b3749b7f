// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The entity collections held by the document store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A collection as read from the store: entity id to entity document.
pub type Collection = Map<String, Value>;

/// The three persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Connectors,
    Connections,
    Integrations,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::Connectors,
        CollectionKind::Connections,
        CollectionKind::Integrations,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CollectionKind::Connectors => "connectors",
            CollectionKind::Connections => "connections",
            CollectionKind::Integrations => "integrations",
        }
    }

    /// Store path of the collection, e.g. `/connectors`.
    pub fn path(self) -> &'static str {
        match self {
            CollectionKind::Connectors => "/connectors",
            CollectionKind::Connections => "/connections",
            CollectionKind::Integrations => "/integrations",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.path() == path)
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
