//! Values held by a property store

use super::column::Column;
use super::context::Context;
use super::foreign_key::ForeignKey;
use super::node::MetadataNode;
use super::schema::Schema;
use crate::validation::{ValidationError, ValidationResult};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A property value: plain JSON, or one of the structured values that
/// nodes materialise for their own properties.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Json(Value),
    Context(Context),
    Schema(Box<Schema>),
    Columns(Vec<Column>),
    ForeignKeys(Vec<ForeignKey>),
}

impl PropertyValue {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            PropertyValue::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_json().and_then(Value::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_json().and_then(Value::as_bool)
    }

    /// Unwrap into plain JSON, recursing through nested nodes.
    pub fn to_json(&self) -> Value {
        match self {
            PropertyValue::Json(value) => value.clone(),
            PropertyValue::Context(context) => context.to_json(),
            PropertyValue::Schema(schema) => schema.to_json(),
            PropertyValue::Columns(columns) => {
                Value::Array(columns.iter().map(Column::to_json).collect())
            }
            PropertyValue::ForeignKeys(keys) => {
                Value::Array(keys.iter().map(ForeignKey::to_json).collect())
            }
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            PropertyValue::Json(_) => "a JSON value",
            PropertyValue::Context(_) => "a context",
            PropertyValue::Schema(_) => "a schema",
            PropertyValue::Columns(_) => "a list of columns",
            PropertyValue::ForeignKeys(_) => "a list of foreign keys",
        }
    }

    /// Take the plain JSON out, rejecting structured values stored under
    /// a key that has no use for them.
    pub(crate) fn into_json(self, key: &str) -> ValidationResult<Value> {
        match self {
            PropertyValue::Json(value) => Ok(value),
            other => Err(ValidationError::invalid_value(
                key,
                format!("expected a JSON value, got {}", other.variant_name()),
            )),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Json(value) => value.serialize(serializer),
            PropertyValue::Context(context) => context.serialize(serializer),
            PropertyValue::Schema(schema) => schema.serialize(serializer),
            PropertyValue::Columns(columns) => columns.serialize(serializer),
            PropertyValue::ForeignKeys(keys) => keys.serialize(serializer),
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        PropertyValue::Json(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Json(Value::String(value.to_string()))
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Json(Value::String(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Json(Value::Bool(value))
    }
}

impl From<Context> for PropertyValue {
    fn from(context: Context) -> Self {
        PropertyValue::Context(context)
    }
}

impl From<Schema> for PropertyValue {
    fn from(schema: Schema) -> Self {
        PropertyValue::Schema(Box::new(schema))
    }
}

impl From<Vec<Column>> for PropertyValue {
    fn from(columns: Vec<Column>) -> Self {
        PropertyValue::Columns(columns)
    }
}

impl From<Vec<ForeignKey>> for PropertyValue {
    fn from(keys: Vec<ForeignKey>) -> Self {
        PropertyValue::ForeignKeys(keys)
    }
}
