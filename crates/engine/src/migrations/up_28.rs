// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schema 28: explicit split after implicit-split start actions.
//!
//! Some start connectors used to emit one message per record without a split
//! step. Flows starting with one of them get a split step inserted directly
//! after the start step.

use crate::migration::VisitorMigration;
use crate::visitor::EntityVisitor;
use serde_json::{json, Value};
use synmig_core::{CollectionKind, IdGen, JsonObjectExt, KeyGen, Object};

pub const VERSION: u32 = 28;

/// Start actions that split their output implicitly.
pub const IMPLICIT_SPLIT_ACTIONS: [&str; 3] = [
    "sql-start-connector",
    "servicenow-action-retrieve-record",
    "aws-s3-polling-bucket-connector",
];

pub fn migration() -> VisitorMigration<ImplicitSplit> {
    with_ids(KeyGen::new())
}

pub fn with_ids<G: IdGen>(ids: G) -> VisitorMigration<ImplicitSplit<G>> {
    VisitorMigration::new(
        VERSION,
        "insert explicit split after implicit-split start steps",
        ImplicitSplit::new(ids),
    )
    .only(&[CollectionKind::Integrations])
}

pub struct ImplicitSplit<G = KeyGen> {
    ids: G,
}

impl<G: IdGen> ImplicitSplit<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }
}

impl<G: IdGen> EntityVisitor for ImplicitSplit<G> {
    fn step_list(&self, steps: &mut Vec<Value>) -> bool {
        let Some(start) = steps.first().and_then(Value::as_object) else {
            return false;
        };
        let splits_implicitly = start
            .str_at(&["action", "id"])
            .is_some_and(|id| IMPLICIT_SPLIT_ACTIONS.contains(&id));
        if !splits_implicitly || is_split(steps.get(1)) {
            return false;
        }

        let descriptor = start.object_at(&["action", "descriptor"]);
        let input = split_input_shape(descriptor);
        let output = descriptor
            .and_then(|d| d.get("outputDataShape"))
            .filter(|shape| shape.is_object())
            .cloned()
            .unwrap_or_else(|| json!({ "kind": "any" }));

        // The split step inherits an existing start step id; the start step
        // is given a fresh one.
        let split_id = match steps.first_mut().and_then(Value::as_object_mut) {
            Some(start) if start.str_field("id").is_some() => {
                let fresh = Value::String(self.ids.next());
                match start.insert("id".into(), fresh) {
                    Some(Value::String(old)) => old,
                    _ => self.ids.next(),
                }
            }
            _ => self.ids.next(),
        };

        steps.insert(1, split_step(split_id, input, output));
        true
    }
}

fn is_split(step: Option<&Value>) -> bool {
    step.and_then(Value::as_object)
        .and_then(|s| s.str_field("stepKind"))
        == Some("split")
}

/// The start action's input shape with its kind forced to `none` and no
/// specification.
fn split_input_shape(descriptor: Option<&Object>) -> Value {
    match descriptor.and_then(|d| d.object("inputDataShape")) {
        Some(shape) => {
            let mut shape = shape.clone();
            shape.insert("kind".into(), json!("none"));
            shape.remove("specification");
            Value::Object(shape)
        }
        None => json!({ "kind": "none" }),
    }
}

fn split_step(id: String, input: Value, output: Value) -> Value {
    json!({
        "id": id,
        "stepKind": "split",
        "name": "Split",
        "action": {
            "actionType": "step",
            "descriptor": {
                "inputDataShape": input,
                "outputDataShape": output
            }
        },
        "configuredProperties": {
            "expression": "${body}",
            "aggregationStrategy": "original"
        }
    })
}

#[cfg(test)]
#[path = "up_28_tests.rs"]
mod tests;
