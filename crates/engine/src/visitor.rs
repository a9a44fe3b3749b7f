// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entity visitor framework.
//!
//! A migration implements [`EntityVisitor`] hooks for the entity levels it
//! cares about. The `migrate_*` functions own the structural descent:
//!
//! ```text
//! integration ─┬─ steps[]            (legacy flat shape)
//!              ├─ flows[].steps[]    (current shape)
//!              └─ connections[]
//! step ────────┬─ action
//!              └─ connection ── connector ── actions[]
//! ```
//!
//! Every level is null-safe: a missing or non-object entity yields `false`.
//! Sibling results are OR-ed without short-circuiting, so each part of an
//! entity is always visited even when an earlier part already changed.
//!
//! Embedded copies (a connector inside a connection, a connection inside a
//! step) are visited as independent values; fixing one copy never implies
//! the other is fixed.

use serde_json::Value;
use synmig_core::json::as_object_mut;
use synmig_core::{CollectionKind, JsonObjectExt, Object};

/// The connector an action belongs to, as far as it can be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOwner {
    pub connector_id: Option<String>,
    pub connector_group_id: Option<String>,
}

impl ActionOwner {
    pub fn of_connector(connector: &Object) -> Self {
        Self {
            connector_id: connector.str_field("id").map(str::to_string),
            connector_group_id: connector.str_field("connectorGroupId").map(str::to_string),
        }
    }

    /// Owner of a step's action: the step connection's embedded connector,
    /// falling back to the connection's `connectorId`.
    pub fn of_step(step: &Object) -> Self {
        let Some(connection) = step.object("connection") else {
            return Self::default();
        };
        let mut owner = connection
            .object("connector")
            .map(Self::of_connector)
            .unwrap_or_default();
        if owner.connector_id.is_none() {
            owner.connector_id = connection.str_field("connectorId").map(str::to_string);
        }
        owner
    }
}

/// Which step containers an integration carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationShape {
    Empty,
    /// Only the flat `steps` array.
    Legacy,
    /// Only `flows[].steps`.
    Current,
    /// Both; historical documents kept the flat array next to flows.
    Mixed,
}

impl IntegrationShape {
    pub fn of(integration: &Object) -> Self {
        let legacy = integration.get("steps").is_some_and(Value::is_array);
        let flows = integration.get("flows").is_some_and(Value::is_array);
        match (legacy, flows) {
            (false, false) => IntegrationShape::Empty,
            (true, false) => IntegrationShape::Legacy,
            (false, true) => IntegrationShape::Current,
            (true, true) => IntegrationShape::Mixed,
        }
    }

    pub fn has_legacy_steps(self) -> bool {
        matches!(self, IntegrationShape::Legacy | IntegrationShape::Mixed)
    }

    pub fn has_flows(self) -> bool {
        matches!(self, IntegrationShape::Current | IntegrationShape::Mixed)
    }
}

/// Per-level hooks. Each returns `true` iff it mutated its argument.
///
/// Hooks only see the fields of their own level; nested entities are reached
/// through the traversal functions.
pub trait EntityVisitor {
    fn connector(&self, _connector: &mut Object) -> bool {
        false
    }

    fn action(&self, _action: &mut Object, _owner: &ActionOwner) -> bool {
        false
    }

    fn connection(&self, _connection: &mut Object) -> bool {
        false
    }

    fn step(&self, _step: &mut Object) -> bool {
        false
    }

    /// An ordered step sequence: a flow's steps or an integration's legacy
    /// flat steps. Runs before the individual steps are visited.
    fn step_list(&self, _steps: &mut Vec<Value>) -> bool {
        false
    }

    fn integration(&self, _integration: &mut Object) -> bool {
        false
    }
}

pub fn migrate_action<V: EntityVisitor + ?Sized>(
    visitor: &V,
    action: Option<&mut Value>,
    owner: &ActionOwner,
) -> bool {
    match as_object_mut(action) {
        Some(action) => visitor.action(action, owner),
        None => false,
    }
}

pub fn migrate_connector<V: EntityVisitor + ?Sized>(
    visitor: &V,
    connector: Option<&mut Value>,
) -> bool {
    let Some(connector) = as_object_mut(connector) else {
        return false;
    };
    let mut changed = visitor.connector(connector);
    let owner = ActionOwner::of_connector(connector);
    if let Some(actions) = connector.array_mut("actions") {
        for action in actions.iter_mut() {
            changed |= migrate_action(visitor, Some(action), &owner);
        }
    }
    changed
}

pub fn migrate_connection<V: EntityVisitor + ?Sized>(
    visitor: &V,
    connection: Option<&mut Value>,
) -> bool {
    let Some(connection) = as_object_mut(connection) else {
        return false;
    };
    let own = visitor.connection(connection);
    let connector = migrate_connector(visitor, connection.get_mut("connector"));
    own | connector
}

pub fn migrate_step<V: EntityVisitor + ?Sized>(visitor: &V, step: Option<&mut Value>) -> bool {
    let Some(step) = as_object_mut(step) else {
        return false;
    };
    let owner = ActionOwner::of_step(step);
    let own = visitor.step(step);
    let action = migrate_action(visitor, step.get_mut("action"), &owner);
    let connection = migrate_connection(visitor, step.get_mut("connection"));
    own | action | connection
}

/// Visit a step sequence as a whole, then each step in it.
pub fn migrate_steps<V: EntityVisitor + ?Sized>(visitor: &V, steps: Option<&mut Value>) -> bool {
    let Some(steps) = steps.and_then(Value::as_array_mut) else {
        return false;
    };
    let mut changed = visitor.step_list(steps);
    for step in steps.iter_mut() {
        changed |= migrate_step(visitor, Some(step));
    }
    changed
}

pub fn migrate_flow<V: EntityVisitor + ?Sized>(visitor: &V, flow: Option<&mut Value>) -> bool {
    match as_object_mut(flow) {
        Some(flow) => migrate_steps(visitor, flow.get_mut("steps")),
        None => false,
    }
}

pub fn migrate_integration<V: EntityVisitor + ?Sized>(
    visitor: &V,
    integration: Option<&mut Value>,
) -> bool {
    let Some(integration) = as_object_mut(integration) else {
        return false;
    };
    let shape = IntegrationShape::of(integration);
    let mut changed = visitor.integration(integration);

    if shape.has_legacy_steps() {
        changed |= migrate_steps(visitor, integration.get_mut("steps"));
    }
    if shape.has_flows() {
        if let Some(flows) = integration.array_mut("flows") {
            for flow in flows.iter_mut() {
                changed |= migrate_flow(visitor, Some(flow));
            }
        }
    }
    if let Some(connections) = integration.array_mut("connections") {
        for connection in connections.iter_mut() {
            changed |= migrate_connection(visitor, Some(connection));
        }
    }
    changed
}

/// Visit a top-level entity of the given collection.
pub fn migrate_entity<V: EntityVisitor + ?Sized>(
    visitor: &V,
    kind: CollectionKind,
    entity: &mut Value,
) -> bool {
    match kind {
        CollectionKind::Connectors => migrate_connector(visitor, Some(entity)),
        CollectionKind::Connections => migrate_connection(visitor, Some(entity)),
        CollectionKind::Integrations => migrate_integration(visitor, Some(entity)),
    }
}

#[cfg(test)]
#[path = "visitor_tests.rs"]
mod tests;
