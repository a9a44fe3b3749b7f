// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Null-safe accessors over untyped JSON documents.
//!
//! Every accessor returns `None` when a level is missing or has the wrong
//! type, so callers never index into a shape they have not checked.

use serde_json::{Map, Value};

/// A JSON object.
pub type Object = Map<String, Value>;

/// Unwrap an optional value into an object, if it is one.
pub fn as_object_mut(value: Option<&mut Value>) -> Option<&mut Object> {
    value.and_then(Value::as_object_mut)
}

/// Optional-field access on JSON objects.
pub trait JsonObjectExt {
    fn str_field(&self, key: &str) -> Option<&str>;

    fn object(&self, key: &str) -> Option<&Object>;

    fn object_mut(&mut self, key: &str) -> Option<&mut Object>;

    fn array_mut(&mut self, key: &str) -> Option<&mut Vec<Value>>;

    /// Follow nested object keys, e.g. `["action", "descriptor"]`.
    fn object_at(&self, path: &[&str]) -> Option<&Object>;

    fn object_at_mut(&mut self, path: &[&str]) -> Option<&mut Object>;

    /// String at the end of a nested key path, e.g. `["action", "id"]`.
    fn str_at(&self, path: &[&str]) -> Option<&str>;

    /// Object under `key`, inserting an empty one when the key is absent.
    ///
    /// Returns `None` when the key holds something other than an object.
    fn object_or_insert(&mut self, key: &str) -> Option<&mut Object>;
}

impl JsonObjectExt for Object {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn object(&self, key: &str) -> Option<&Object> {
        self.get(key).and_then(Value::as_object)
    }

    fn object_mut(&mut self, key: &str) -> Option<&mut Object> {
        self.get_mut(key).and_then(Value::as_object_mut)
    }

    fn array_mut(&mut self, key: &str) -> Option<&mut Vec<Value>> {
        self.get_mut(key).and_then(Value::as_array_mut)
    }

    fn object_at(&self, path: &[&str]) -> Option<&Object> {
        path.iter().try_fold(self, |obj, key| obj.object(key))
    }

    fn object_at_mut(&mut self, path: &[&str]) -> Option<&mut Object> {
        path.iter().try_fold(self, |obj, key| obj.object_mut(key))
    }

    fn str_at(&self, path: &[&str]) -> Option<&str> {
        let (last, parents) = path.split_last()?;
        self.object_at(parents)?.str_field(last)
    }

    fn object_or_insert(&mut self, key: &str) -> Option<&mut Object> {
        self.entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
