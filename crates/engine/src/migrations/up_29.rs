// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schema 29: swagger connectors run on the `rest-swagger` component.

use crate::migration::VisitorMigration;
use crate::visitor::{ActionOwner, EntityVisitor};
use serde_json::{json, Value};
use synmig_core::{JsonObjectExt, Object};

pub const VERSION: u32 = 29;

pub const SWAGGER_GROUP: &str = "swagger-connector-template";
pub const COMPONENT_SCHEME: &str = "rest-swagger";
pub const CONNECTOR_FACTORY: &str = "io.syndesis.connector.rest.swagger.ConnectorFactory";
pub const CUSTOMIZERS: [&str; 4] = [
    "io.syndesis.connector.rest.swagger.SpecificationResourceCustomizer",
    "io.syndesis.connector.rest.swagger.AuthenticationCustomizer",
    "io.syndesis.connector.rest.swagger.RequestCustomizer",
    "io.syndesis.connector.rest.swagger.ResponseCustomizer",
];

pub fn migration() -> VisitorMigration<SwaggerConnectors> {
    VisitorMigration::new(
        VERSION,
        "move swagger connectors to the rest-swagger component",
        SwaggerConnectors,
    )
}

pub struct SwaggerConnectors;

impl EntityVisitor for SwaggerConnectors {
    fn connector(&self, connector: &mut Object) -> bool {
        if connector.str_field("connectorGroupId") != Some(SWAGGER_GROUP) {
            return false;
        }
        let scheme = assign(connector, "componentScheme", COMPONENT_SCHEME);
        let factory = assign(connector, "connectorFactory", CONNECTOR_FACTORY);
        let customizers = !has_customizers(connector);
        if customizers {
            connector.insert("connectorCustomizers".into(), json!(CUSTOMIZERS));
        }
        scheme | factory | customizers
    }

    fn action(&self, action: &mut Object, owner: &ActionOwner) -> bool {
        if owner.connector_group_id.as_deref() != Some(SWAGGER_GROUP) {
            return false;
        }
        let Some(descriptor) = action.object_mut("descriptor") else {
            return false;
        };
        // Only actions still carrying the camel connector coordinates are old.
        if descriptor.remove("camelConnectorGAV").is_none() {
            return false;
        }
        descriptor.remove("camelConnectorPrefix");
        descriptor.insert("componentScheme".into(), json!(COMPONENT_SCHEME));
        true
    }
}

fn assign(obj: &mut Object, key: &str, value: &str) -> bool {
    if obj.str_field(key) == Some(value) {
        return false;
    }
    obj.insert(key.to_string(), json!(value));
    true
}

fn has_customizers(connector: &Object) -> bool {
    connector
        .get("connectorCustomizers")
        .and_then(Value::as_array)
        .is_some_and(|c| !c.is_empty())
}

#[cfg(test)]
#[path = "up_29_tests.rs"]
mod tests;
