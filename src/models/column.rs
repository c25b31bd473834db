//! Column description model

use super::node::MetadataNode;
use super::store::PropertyStore;
use super::value::PropertyValue;
use super::vocabulary::{Vocabulary, check_common, expect_string};
use crate::validation::{ValidationError, ValidationResult};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Properties recognised on column descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnVocabulary;

impl Vocabulary for ColumnVocabulary {
    const KIND: &'static str = "Column";
    const PROPERTIES: &'static [&'static str] = &["name", "suppressOutput", "titles", "virtual"];

    fn check(key: &str, value: PropertyValue) -> ValidationResult<PropertyValue> {
        match key {
            "name" => {
                let json = value.into_json(key)?;
                validate_column_name(expect_string(key, &json)?)?;
                Ok(PropertyValue::Json(json))
            }
            "titles" => {
                let json = value.into_json(key)?;
                check_titles(&json)?;
                Ok(PropertyValue::Json(json))
            }
            _ => check_common::<Self>(key, value),
        }
    }
}

/// Validate a column name.
///
/// # Rules
///
/// - Must not be empty
/// - Must not begin with `_`, which is reserved for built-in variables
///   in URI templates (`_row`, `_name`, ...)
pub fn validate_column_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::InvalidIdentifier {
            name: name.to_string(),
            reason: "'name' attribute must not be empty".to_string(),
        });
    }
    if name.starts_with('_') {
        return Err(ValidationError::InvalidIdentifier {
            name: name.to_string(),
            reason: "'name' attribute must not begin with an underscore '_'".to_string(),
        });
    }
    Ok(())
}

// natural language property: string, list of strings, or language map
fn check_titles(value: &Value) -> ValidationResult<()> {
    let is_text_list = |v: &Value| match v {
        Value::String(_) => true,
        Value::Array(items) => items.iter().all(Value::is_string),
        _ => false,
    };
    let valid = match value {
        Value::Object(languages) => languages.values().all(is_text_list),
        other => is_text_list(other),
    };
    if !valid {
        return Err(ValidationError::invalid_value(
            "titles",
            "must be a string, a list of strings, or an object keyed by language",
        ));
    }
    Ok(())
}

/// Named construction fields for a [`Column`].
///
/// `extensions` carries any further properties (inherited or common) and is
/// validated entry by entry, in order, after the named fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnFields {
    pub name: Option<String>,
    pub suppress_output: Option<bool>,
    pub titles: Option<Value>,
    pub virtual_column: Option<bool>,
    pub id: Option<String>,
    pub node_type: Option<String>,
    pub extensions: Map<String, Value>,
}

impl ColumnFields {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// A column description within a schema.
///
/// # Example
///
/// ```rust
/// use csvw_metadata::models::{Column, MetadataNode};
///
/// let mut column = Column::new("region").unwrap();
/// column.set("dcterms_description", "Sales region").unwrap();
/// assert_eq!(column.name(), Some("region"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    properties: PropertyStore<ColumnVocabulary>,
}

impl Column {
    /// Create a column with the given name.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        let mut column = Self::default();
        column.set_name(name)?;
        Ok(column)
    }

    /// Create a column from named fields plus extension properties.
    pub fn with_fields(fields: ColumnFields) -> ValidationResult<Self> {
        let mut column = Self::default();
        if let Some(name) = fields.name {
            column.set_name(name)?;
        }
        if let Some(suppress) = fields.suppress_output {
            column.set_suppress_output(suppress)?;
        }
        if let Some(titles) = fields.titles {
            column.set_titles(titles)?;
        }
        if let Some(is_virtual) = fields.virtual_column {
            column.set_virtual(is_virtual)?;
        }
        if let Some(id) = fields.id {
            column.set_id(id)?;
        }
        if let Some(node_type) = fields.node_type {
            column.set_node_type(node_type)?;
        }
        for (name, value) in fields.extensions {
            column.set(&name, value)?;
        }
        Ok(column)
    }

    /// Materialise a column from a raw field mapping, keeping its order.
    pub fn from_map(fields: &Map<String, Value>) -> ValidationResult<Self> {
        let mut column = Self::default();
        for (key, value) in fields {
            column.set_key(key, value.clone())?;
        }
        Ok(column)
    }

    pub(crate) fn from_value(value: &Value) -> ValidationResult<Self> {
        match value {
            Value::Object(fields) => Self::from_map(fields),
            _ => Err(ValidationError::invalid_value(
                "columns",
                "columns property of Schema object must be a list of Column or dict objects",
            )),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.properties.get_by_key("name").and_then(PropertyValue::as_str)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<&mut Self> {
        self.set_key("name", name.into())
    }

    pub fn titles(&self) -> Option<&Value> {
        self.properties.get_by_key("titles").and_then(PropertyValue::as_json)
    }

    pub fn set_titles(&mut self, titles: impl Into<Value>) -> ValidationResult<&mut Self> {
        self.set_key("titles", titles.into())
    }

    pub fn suppress_output(&self) -> Option<bool> {
        self.properties.get_by_key("suppressOutput").and_then(PropertyValue::as_bool)
    }

    pub fn set_suppress_output(&mut self, suppress: bool) -> ValidationResult<&mut Self> {
        self.set_key("suppressOutput", suppress)
    }

    /// Whether the column is virtual (absent from the source data).
    pub fn is_virtual(&self) -> bool {
        self.properties
            .get_by_key("virtual")
            .and_then(PropertyValue::as_bool)
            .unwrap_or(false)
    }

    pub fn set_virtual(&mut self, is_virtual: bool) -> ValidationResult<&mut Self> {
        self.set_key("virtual", is_virtual)
    }
}

impl MetadataNode for Column {
    type Vocabulary = ColumnVocabulary;

    fn properties(&self) -> &PropertyStore<ColumnVocabulary> {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore<ColumnVocabulary> {
        &mut self.properties
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.properties.serialize(serializer)
    }
}
