// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schema 42: SQL actions declare their standardized errors.

use crate::migration::VisitorMigration;
use crate::visitor::{ActionOwner, EntityVisitor};
use serde_json::{json, Value};
use synmig_core::{JsonObjectExt, Object};

pub const VERSION: u32 = 42;

pub const SQL_ACTIONS: [&str; 4] = [
    "sql-connector",
    "sql-start-connector",
    "sql-stored-connector",
    "sql-stored-start-connector",
];

pub const SQL_ERRORS: [(&str, &str); 3] = [
    ("SQL_CONNECTOR_ERROR", "SqlConnectorError"),
    ("SQL_DATA_ACCESS_ERROR", "SqlDataAccessError"),
    ("SQL_ENTITY_NOT_FOUND_ERROR", "SqlEntityNotFoundError"),
];

pub fn migration() -> VisitorMigration<SqlStandardizedErrors> {
    VisitorMigration::new(
        VERSION,
        "add standardized errors to sql actions",
        SqlStandardizedErrors,
    )
}

pub struct SqlStandardizedErrors;

impl EntityVisitor for SqlStandardizedErrors {
    fn action(&self, action: &mut Object, _owner: &ActionOwner) -> bool {
        let is_sql = action
            .str_field("id")
            .is_some_and(|id| SQL_ACTIONS.contains(&id));
        if !is_sql {
            return false;
        }
        let Some(descriptor) = action.object_or_insert("descriptor") else {
            return false;
        };
        if descriptor.contains_key("standardizedErrors") {
            return false;
        }
        descriptor.insert("standardizedErrors".into(), standardized_errors());
        true
    }
}

pub fn standardized_errors() -> Value {
    SQL_ERRORS
        .iter()
        .map(|(name, display_name)| json!({ "name": name, "displayName": display_name }))
        .collect()
}

#[cfg(test)]
#[path = "up_42_tests.rs"]
mod tests;
