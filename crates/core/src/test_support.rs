// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::json::Object;
use crate::Collection;
use serde_json::{json, Value};

// ── Entity fixtures ─────────────────────────────────────────────────────────

pub fn action(id: &str) -> Value {
    json!({
        "id": id,
        "name": id,
        "actionType": "connector",
        "descriptor": {}
    })
}

pub fn action_with_shapes(id: &str, input: Value, output: Value) -> Value {
    json!({
        "id": id,
        "name": id,
        "actionType": "connector",
        "descriptor": {
            "inputDataShape": input,
            "outputDataShape": output
        }
    })
}

pub fn endpoint_step(id: Option<&str>, action: Value) -> Value {
    let mut step = json!({
        "stepKind": "endpoint",
        "action": action
    });
    if let (Some(id), Some(obj)) = (id, step.as_object_mut()) {
        obj.insert("id".into(), json!(id));
    }
    step
}

pub fn plain_step(id: &str, kind: &str) -> Value {
    json!({ "id": id, "stepKind": kind })
}

pub fn connector(id: &str, group_id: &str) -> Value {
    json!({
        "id": id,
        "name": id,
        "connectorGroupId": group_id,
        "actions": []
    })
}

pub fn connection(id: &str, connector: Value) -> Value {
    let connector_id = connector.get("id").cloned().unwrap_or(Value::Null);
    json!({
        "id": id,
        "name": id,
        "connectorId": connector_id,
        "connector": connector
    })
}

pub fn flow(steps: Vec<Value>) -> Value {
    json!({ "name": "flow", "steps": steps })
}

pub fn integration(id: &str, flows: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": id,
        "flows": flows
    })
}

pub fn legacy_integration(id: &str, steps: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": id,
        "steps": steps
    })
}

// ── Collections ─────────────────────────────────────────────────────────────

pub fn collection(entities: Vec<(&str, Value)>) -> Collection {
    entities
        .into_iter()
        .map(|(id, entity)| (id.to_string(), entity))
        .collect()
}

/// Convert a `json!` literal into an object, panicking if it is not one.
#[allow(clippy::panic)]
pub fn object(value: Value) -> Object {
    match value {
        Value::Object(obj) => obj,
        other => panic!("expected a JSON object, got {other}"),
    }
}
