// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schema 40: the `http4`/`https4` components became `http`/`https`.

use crate::migration::VisitorMigration;
use crate::transform::RenameContext::{ActionId, ComponentScheme, ConnectorId, Tag};
use crate::transform::{Rename, RenameTable};
use crate::visitor::{ActionOwner, EntityVisitor};
use synmig_core::{JsonObjectExt, Object};

pub const VERSION: u32 = 40;

pub const HTTP_RENAMES: RenameTable = RenameTable::new(&[
    Rename::new(ConnectorId, "http4", "http"),
    Rename::new(ConnectorId, "https4", "https"),
    Rename::new(ComponentScheme, "http4", "http"),
    Rename::new(ComponentScheme, "https4", "https"),
    Rename::new(
        ActionId,
        "io.syndesis.connector:connector-http:http4-invoke-url",
        "io.syndesis.connector:connector-http:http-invoke-url",
    ),
    Rename::new(
        ActionId,
        "io.syndesis.connector:connector-http:https4-invoke-url",
        "io.syndesis.connector:connector-http:https-invoke-url",
    ),
    Rename::new(
        ActionId,
        "io.syndesis.connector:connector-http:http4-periodic-invoke-url",
        "io.syndesis.connector:connector-http:http-periodic-invoke-url",
    ),
    Rename::new(
        ActionId,
        "io.syndesis.connector:connector-http:https4-periodic-invoke-url",
        "io.syndesis.connector:connector-http:https-periodic-invoke-url",
    ),
    Rename::new(Tag, "http4", "http"),
    Rename::new(Tag, "https4", "https"),
]);

pub fn migration() -> VisitorMigration<TableRenames> {
    VisitorMigration::new(
        VERSION,
        "rename http4 and https4 components to http and https",
        TableRenames::new(HTTP_RENAMES),
    )
}

/// Applies a rename table to the id, scheme and tag fields of every entity.
pub struct TableRenames {
    table: RenameTable,
}

impl TableRenames {
    pub fn new(table: RenameTable) -> Self {
        Self { table }
    }
}

impl EntityVisitor for TableRenames {
    fn connector(&self, connector: &mut Object) -> bool {
        let t = &self.table;
        t.apply_field(ConnectorId, connector, "id")
            | t.apply_field(ComponentScheme, connector, "componentScheme")
            | t.apply_array(Tag, connector, "tags")
    }

    fn action(&self, action: &mut Object, _owner: &ActionOwner) -> bool {
        let t = &self.table;
        let id = t.apply_field(ActionId, action, "id");
        let descriptor = match action.object_mut("descriptor") {
            Some(descriptor) => {
                t.apply_field(ConnectorId, descriptor, "connectorId")
                    | t.apply_field(ComponentScheme, descriptor, "componentScheme")
            }
            None => false,
        };
        id | descriptor
    }

    fn connection(&self, connection: &mut Object) -> bool {
        let t = &self.table;
        t.apply_field(ConnectorId, connection, "connectorId") | t.apply_array(Tag, connection, "tags")
    }

    fn integration(&self, integration: &mut Object) -> bool {
        self.table.apply_array(Tag, integration, "tags")
    }
}

#[cfg(test)]
#[path = "up_40_tests.rs"]
mod tests;
