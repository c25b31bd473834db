//! Foreign key definitions and column references
//!
//! A foreign key links the values of columns in this table to rows of this
//! or another table. The referenced table is named either by `resource`
//! (the URL of a table description) or by `schemaReference` (the URL of a
//! schema), never both.
//!
//! See <https://w3c.github.io/csvw/metadata/#schema-foreignKeys>.

use crate::validation::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One column name or an ordered list of column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnReference {
    Single(String),
    Multiple(Vec<String>),
}

impl ColumnReference {
    /// Referenced column names in order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            ColumnReference::Single(name) => vec![name.as_str()],
            ColumnReference::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ColumnReference::Single(name) => Value::String(name.clone()),
            ColumnReference::Multiple(names) => {
                Value::Array(names.iter().cloned().map(Value::String).collect())
            }
        }
    }

    /// Parse the value of a column reference property.
    pub fn from_value(property: &str, value: &Value) -> ValidationResult<Self> {
        let reference = match value {
            Value::String(name) => ColumnReference::Single(name.clone()),
            Value::Array(items) => {
                let names = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| {
                        ValidationError::invalid_value(property, "column names must be strings")
                    })?;
                ColumnReference::Multiple(names)
            }
            _ => {
                return Err(ValidationError::invalid_value(
                    property,
                    "must be a column name or a list of column names",
                ));
            }
        };
        reference.check(property)?;
        Ok(reference)
    }

    fn check(&self, property: &str) -> ValidationResult<()> {
        let names = self.names();
        if names.is_empty() {
            return Err(ValidationError::invalid_value(
                property,
                "must reference at least one column",
            ));
        }
        if names.iter().any(|name| name.is_empty()) {
            return Err(ValidationError::invalid_value(
                property,
                "column names must not be empty",
            ));
        }
        Ok(())
    }
}

impl From<&str> for ColumnReference {
    fn from(name: &str) -> Self {
        ColumnReference::Single(name.to_string())
    }
}

impl From<String> for ColumnReference {
    fn from(name: String) -> Self {
        ColumnReference::Single(name)
    }
}

impl From<Vec<&str>> for ColumnReference {
    fn from(names: Vec<&str>) -> Self {
        ColumnReference::Multiple(names.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for ColumnReference {
    fn from(names: Vec<String>) -> Self {
        ColumnReference::Multiple(names)
    }
}

/// Table the foreign key points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_reference: Option<String>,
    pub column_reference: ColumnReference,
}

/// Foreign key definition within a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKey {
    pub column_reference: ColumnReference,
    pub reference: ForeignKeyReference,
}

impl ForeignKey {
    /// Foreign key referencing a table description by URL.
    pub fn to_resource(
        columns: impl Into<ColumnReference>,
        resource: impl Into<String>,
        referenced_columns: impl Into<ColumnReference>,
    ) -> ValidationResult<Self> {
        let key = Self {
            column_reference: columns.into(),
            reference: ForeignKeyReference {
                resource: Some(resource.into()),
                schema_reference: None,
                column_reference: referenced_columns.into(),
            },
        };
        key.validate()?;
        Ok(key)
    }

    /// Foreign key referencing a schema by URL.
    pub fn to_schema(
        columns: impl Into<ColumnReference>,
        schema_reference: impl Into<String>,
        referenced_columns: impl Into<ColumnReference>,
    ) -> ValidationResult<Self> {
        let key = Self {
            column_reference: columns.into(),
            reference: ForeignKeyReference {
                resource: None,
                schema_reference: Some(schema_reference.into()),
                column_reference: referenced_columns.into(),
            },
        };
        key.validate()?;
        Ok(key)
    }

    /// Check the definition is well formed.
    pub fn validate(&self) -> ValidationResult<()> {
        self.column_reference.check("foreignKeys.columnReference")?;
        self.reference
            .column_reference
            .check("foreignKeys.reference.columnReference")?;
        match (&self.reference.resource, &self.reference.schema_reference) {
            (Some(_), None) | (None, Some(_)) => {}
            _ => {
                return Err(ValidationError::invalid_value(
                    "foreignKeys.reference",
                    "must have exactly one of resource or schemaReference",
                ));
            }
        }
        if self.column_reference.names().len() != self.reference.column_reference.names().len() {
            return Err(ValidationError::invalid_value(
                "foreignKeys",
                "columnReference and reference.columnReference must name the same number of columns",
            ));
        }
        Ok(())
    }

    /// JSON form, as emitted by the derived `Serialize`.
    pub fn to_json(&self) -> Value {
        // string and option fields only, so conversion cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Parse and validate a foreign key definition.
    pub fn from_value(value: &Value) -> ValidationResult<Self> {
        let key: ForeignKey = serde_json::from_value(value.clone())
            .map_err(|e| ValidationError::invalid_value("foreignKeys", e.to_string()))?;
        key.validate()?;
        Ok(key)
    }
}
