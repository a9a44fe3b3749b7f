// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field-level value rewrites.
//!
//! [`rename`] is the single primitive. [`RenameTable`] is a declarative list
//! of `{context, old, new}` entries applied with it, in table order. Chains
//! are not checked for conflicts: an entry whose `old` equals an earlier
//! entry's `new` sees the already-renamed value.

use serde_json::Value;
use synmig_core::{JsonObjectExt, Object};

/// Build a rewrite that maps `old` to `new` and leaves anything else alone.
///
/// `on_change` runs once for every input that matched; non-matching and
/// missing inputs never trigger it.
pub fn rename<'a, F>(
    old: &'a str,
    new: &'a str,
    mut on_change: F,
) -> impl FnMut(Option<&str>) -> Option<String> + 'a
where
    F: FnMut() + 'a,
{
    move |input: Option<&str>| -> Option<String> {
        match input {
            Some(value) if value == old => {
                on_change();
                Some(new.to_string())
            }
            other => other.map(str::to_string),
        }
    }
}

/// Which kind of field a rename entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenameContext {
    /// Connector ids, connection `connectorId`, descriptor `connectorId`.
    ConnectorId,
    ActionId,
    ComponentScheme,
    Tag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rename {
    pub context: RenameContext,
    pub old: &'static str,
    pub new: &'static str,
}

impl Rename {
    pub const fn new(context: RenameContext, old: &'static str, new: &'static str) -> Self {
        Self { context, old, new }
    }
}

/// Ordered set of renames, looked up by context.
#[derive(Debug, Clone, Copy)]
pub struct RenameTable {
    entries: &'static [Rename],
}

impl RenameTable {
    pub const fn new(entries: &'static [Rename]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [Rename] {
        self.entries
    }

    /// Run every entry for `context` over `input`, left to right.
    ///
    /// Returns the rewritten value when at least one entry matched.
    pub fn apply(&self, context: RenameContext, input: &str) -> Option<String> {
        let mut changed = false;
        let mut current = Some(input.to_string());
        for entry in self.entries.iter().filter(|e| e.context == context) {
            let mut step = rename(entry.old, entry.new, || changed = true);
            current = step(current.as_deref());
        }
        if changed {
            current
        } else {
            None
        }
    }

    /// Rewrite the string at `obj[key]`. Missing or non-string values are left alone.
    pub fn apply_field(&self, context: RenameContext, obj: &mut Object, key: &str) -> bool {
        let renamed = match obj.str_field(key) {
            Some(current) => self.apply(context, current),
            None => None,
        };
        match renamed {
            Some(value) => {
                obj.insert(key.to_string(), Value::String(value));
                true
            }
            None => false,
        }
    }

    /// Rewrite every string element of the array at `obj[key]`.
    pub fn apply_array(&self, context: RenameContext, obj: &mut Object, key: &str) -> bool {
        let Some(items) = obj.array_mut(key) else {
            return false;
        };
        let mut changed = false;
        for item in items.iter_mut() {
            let renamed = item.as_str().and_then(|s| self.apply(context, s));
            if let Some(value) = renamed {
                *item = Value::String(value);
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
