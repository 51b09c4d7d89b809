//! Response reshaping
//!
//! Grist list endpoints return either a bare array or an object holding the
//! array under a named field. When the container is not an array the result
//! degrades to an empty list; when the elements do not fit the entity type
//! the call fails.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{GristError, GristResult};

/// Where the list lives in a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// The body itself is the array
    Root,
    /// The array is under this field of a body object
    Field(&'static str),
}

impl ResponseShape {
    /// Raw list items; anything that is not an array yields an empty list
    pub fn items(&self, response: Value) -> Vec<Value> {
        let container = match (self, response) {
            (ResponseShape::Root, value) => value,
            (ResponseShape::Field(name), Value::Object(mut map)) => {
                map.remove(*name).unwrap_or(Value::Null)
            }
            (ResponseShape::Field(_), _) => Value::Null,
        };

        match container {
            Value::Array(items) => items,
            _ => Vec::new(),
        }
    }

    /// Items deserialized as `T`
    pub fn extract<T: DeserializeOwned>(&self, response: Value) -> GristResult<Vec<T>> {
        self.items(response)
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| {
                    GristError::InvalidResponse(format!(
                        "unexpected {} item: {}",
                        self.describe(),
                        e
                    ))
                })
            })
            .collect()
    }

    /// `fields` objects of each item (SQL result rows)
    pub fn fields(&self, response: Value) -> Vec<Map<String, Value>> {
        self.items(response)
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(mut map) => match map.remove("fields") {
                    Some(Value::Object(fields)) => Some(fields),
                    _ => None,
                },
                _ => None,
            })
            .collect()
    }

    /// Integer `id` of each item
    pub fn ids(&self, response: Value) -> Vec<i64> {
        self.items(response)
            .iter()
            .filter_map(|item| item.get("id").and_then(Value::as_i64))
            .collect()
    }

    fn describe(&self) -> &'static str {
        match self {
            ResponseShape::Root => "list",
            ResponseShape::Field(name) => name,
        }
    }
}
