//! Table description model

use super::column::Column;
use super::context::{Context, check_context};
use super::enums::TableDirection;
use super::node::{MetadataNode, TopLevel};
use super::schema::Schema;
use super::store::PropertyStore;
use super::value::PropertyValue;
use super::vocabulary::{Vocabulary, check_common, expect_string};
use crate::validation::{ValidationError, ValidationResult};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Properties recognised on table descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableVocabulary;

impl Vocabulary for TableVocabulary {
    const KIND: &'static str = "Table";
    const PROPERTIES: &'static [&'static str] = &[
        "url",
        "notes",
        "dialect",
        "suppressOutput",
        "tableDirection",
        "tableSchema",
        "transformations",
    ];

    fn check(key: &str, value: PropertyValue) -> ValidationResult<PropertyValue> {
        match key {
            "url" => {
                let json = value.into_json(key)?;
                expect_string(key, &json)?;
                Ok(PropertyValue::Json(json))
            }
            "notes" => {
                let json = value.into_json(key)?;
                if !json.is_array() {
                    return Err(ValidationError::invalid_value(
                        key,
                        "notes property of Table object must be a list",
                    ));
                }
                Ok(PropertyValue::Json(json))
            }
            "tableDirection" => {
                let json = value.into_json(key)?;
                expect_string(key, &json)?
                    .parse::<TableDirection>()
                    .map_err(|reason| ValidationError::invalid_value(key, reason))?;
                Ok(PropertyValue::Json(json))
            }
            "tableSchema" => match value {
                PropertyValue::Schema(schema) => Ok(PropertyValue::Schema(schema)),
                PropertyValue::Json(Value::Object(fields)) => {
                    Ok(PropertyValue::Schema(Box::new(Schema::from_map(&fields)?)))
                }
                _ => Err(ValidationError::invalid_value(
                    key,
                    "value must be of type Schema or dict",
                )),
            },
            "@context" => check_context(value),
            _ => check_common::<Self>(key, value),
        }
    }
}

/// Named construction fields for a [`Table`]; `url` is passed separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableFields {
    pub dialect: Option<Value>,
    pub suppress_output: Option<bool>,
    pub table_direction: Option<TableDirection>,
    pub table_schema: Option<Schema>,
    pub transformations: Option<Value>,
    pub id: Option<String>,
    pub node_type: Option<String>,
    pub notes: Option<Vec<Value>>,
    pub context: Option<Context>,
    pub extensions: Map<String, Value>,
}

/// A table description: the top-level object for a single CSV file.
///
/// # Example
///
/// ```rust
/// use csvw_metadata::models::{Column, MetadataNode, Table, TopLevel};
///
/// let mut table = Table::new("hello.csv");
/// table
///     .add_context(Some("http://example.org"), None)
///     .unwrap()
///     .add_column(Column::new("example").unwrap())
///     .unwrap()
///     .add_column(Column::new("region").unwrap())
///     .unwrap();
///
/// table.set("dcterms_title", "Hello World!").unwrap();
/// assert_eq!(table.get("dcterms:title").and_then(|v| v.as_str()), Some("Hello World!"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    properties: PropertyStore<TableVocabulary>,
}

impl Table {
    /// Create a table description for the CSV file at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        let mut properties = PropertyStore::new();
        properties.insert("url".to_string(), PropertyValue::from(url.into()));
        Self { properties }
    }

    /// Create a table from named fields plus extension properties.
    pub fn with_fields(url: impl Into<String>, fields: TableFields) -> ValidationResult<Self> {
        let mut table = Self::new(url);
        if let Some(dialect) = fields.dialect {
            table.set_dialect(dialect)?;
        }
        if let Some(suppress) = fields.suppress_output {
            table.set_suppress_output(suppress)?;
        }
        if let Some(direction) = fields.table_direction {
            table.set_table_direction(direction)?;
        }
        if let Some(schema) = fields.table_schema {
            table.set_table_schema(schema)?;
        }
        if let Some(transformations) = fields.transformations {
            table.set_transformations(transformations)?;
        }
        if let Some(id) = fields.id {
            table.set_id(id)?;
        }
        if let Some(node_type) = fields.node_type {
            table.set_node_type(node_type)?;
        }
        if let Some(notes) = fields.notes {
            table.set_notes(notes)?;
        }
        if let Some(context) = fields.context {
            table.set_context(context)?;
        }
        for (name, value) in fields.extensions {
            table.set(&name, value)?;
        }
        Ok(table)
    }

    /// Materialise a table from a raw field mapping, keeping its order.
    pub fn from_map(fields: &Map<String, Value>) -> ValidationResult<Self> {
        if !fields.contains_key("url") {
            return Err(ValidationError::MissingProperty { property: "url" });
        }
        let mut table = Self {
            properties: PropertyStore::new(),
        };
        for (key, value) in fields {
            table.set_key(key, value.clone())?;
        }
        Ok(table)
    }

    pub fn url(&self) -> &str {
        self.properties
            .get_by_key("url")
            .and_then(PropertyValue::as_str)
            .unwrap_or_default()
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> ValidationResult<&mut Self> {
        self.set_key("url", url.into())
    }

    pub fn dialect(&self) -> Option<&Value> {
        self.properties.get_by_key("dialect").and_then(PropertyValue::as_json)
    }

    pub fn set_dialect(&mut self, dialect: impl Into<Value>) -> ValidationResult<&mut Self> {
        self.set_key("dialect", dialect.into())
    }

    pub fn notes(&self) -> Option<&[Value]> {
        self.properties
            .get_by_key("notes")
            .and_then(PropertyValue::as_json)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    pub fn set_notes(&mut self, notes: Vec<Value>) -> ValidationResult<&mut Self> {
        self.set_key("notes", Value::Array(notes))
    }

    pub fn add_note(&mut self, note: impl Into<Value>) -> ValidationResult<&mut Self> {
        let mut notes = self.notes().map(<[Value]>::to_vec).unwrap_or_default();
        notes.push(note.into());
        self.set_notes(notes)
    }

    pub fn suppress_output(&self) -> Option<bool> {
        self.properties.get_by_key("suppressOutput").and_then(PropertyValue::as_bool)
    }

    pub fn set_suppress_output(&mut self, suppress: bool) -> ValidationResult<&mut Self> {
        self.set_key("suppressOutput", suppress)
    }

    pub fn table_direction(&self) -> Option<TableDirection> {
        self.properties
            .get_by_key("tableDirection")
            .and_then(PropertyValue::as_str)
            .and_then(|s| s.parse().ok())
    }

    pub fn set_table_direction(&mut self, direction: TableDirection) -> ValidationResult<&mut Self> {
        self.set_key("tableDirection", direction.as_str())
    }

    pub fn table_schema(&self) -> Option<&Schema> {
        match self.properties.get_by_key("tableSchema") {
            Some(PropertyValue::Schema(schema)) => Some(schema),
            _ => None,
        }
    }

    pub fn table_schema_mut(&mut self) -> Option<&mut Schema> {
        match self.properties.get_mut("tableSchema") {
            Some(PropertyValue::Schema(schema)) => Some(schema),
            _ => None,
        }
    }

    pub fn set_table_schema(&mut self, schema: Schema) -> ValidationResult<&mut Self> {
        self.set_key("tableSchema", schema)
    }

    pub fn transformations(&self) -> Option<&Value> {
        self.properties
            .get_by_key("transformations")
            .and_then(PropertyValue::as_json)
    }

    pub fn set_transformations(
        &mut self,
        transformations: impl Into<Value>,
    ) -> ValidationResult<&mut Self> {
        self.set_key("transformations", transformations.into())
    }

    /// Attach a schema; fails if the table already has one.
    pub fn add_schema(&mut self, schema: Schema) -> ValidationResult<&mut Self> {
        if self.table_schema().is_some() {
            return Err(ValidationError::AlreadyPresent {
                property: "tableSchema",
            });
        }
        self.set_table_schema(schema)
    }

    /// Append a column, creating the schema first if there is none.
    pub fn add_column(&mut self, column: Column) -> ValidationResult<&mut Self> {
        match self.table_schema_mut() {
            Some(schema) => {
                schema.add_column(column)?;
            }
            None => {
                let mut schema = Schema::new();
                schema.add_column(column)?;
                self.set_table_schema(schema)?;
            }
        }
        Ok(self)
    }

    /// Check the column references of the table's schema, if any.
    pub fn check_references(&self) -> ValidationResult<()> {
        match self.table_schema() {
            Some(schema) => schema.check_references(),
            None => Ok(()),
        }
    }
}

impl MetadataNode for Table {
    type Vocabulary = TableVocabulary;

    fn properties(&self) -> &PropertyStore<TableVocabulary> {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore<TableVocabulary> {
        &mut self.properties
    }
}

impl TopLevel for Table {}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.properties.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InheritedProperties;
    use serde_json::json;

    #[test]
    fn test_new_table_has_url() {
        let table = Table::new("hello.csv");
        assert_eq!(table.url(), "hello.csv");
        assert_eq!(table.to_json(), json!({"url": "hello.csv"}));
    }

    #[test]
    fn test_table_direction() {
        let mut table = Table::new("t.csv");
        for direction in TableDirection::ALLOWED {
            assert!(table.set("tableDirection", direction).is_ok());
        }
        let err = table.set("tableDirection", "sideways").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPropertyValue { .. }));
        assert_eq!(table.table_direction(), Some(TableDirection::Auto));
    }

    #[test]
    fn test_type_must_be_table() {
        let mut table = Table::new("t.csv");
        assert!(table.set("type", "Column").is_err());
        assert!(table.properties().get_by_key("@type").is_none());
        table.set_node_type("Table").unwrap();
        assert_eq!(table.node_type(), Some("Table"));
    }

    #[test]
    fn test_notes_must_be_list() {
        let mut table = Table::new("t.csv");
        assert!(table.set("notes", "a note").is_err());
        table.add_note(json!({"rdfs:comment": "first"})).unwrap();
        table.add_note("second").unwrap();
        assert_eq!(table.notes().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn test_table_schema_from_mapping() {
        let mut table = Table::new("t.csv");
        table
            .set("tableSchema", json!({"columns": [{"name": "a"}], "primaryKey": "a"}))
            .unwrap();
        let schema = table.table_schema().unwrap();
        assert_eq!(schema.columns().len(), 1);
        assert!(table.set("tableSchema", "schema.json").is_err());
    }

    #[test]
    fn test_add_schema_twice() {
        let mut table = Table::new("t.csv");
        table.add_schema(Schema::new()).unwrap();
        let err = table.add_schema(Schema::new()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::AlreadyPresent {
                property: "tableSchema"
            }
        );
    }

    #[test]
    fn test_add_column_creates_schema_lazily() {
        let mut table = Table::new("t.csv");
        table
            .add_column(Column::new("example").unwrap())
            .unwrap()
            .add_column(Column::new("region").unwrap())
            .unwrap();
        let names: Vec<_> = table
            .table_schema()
            .unwrap()
            .columns()
            .iter()
            .filter_map(Column::name)
            .collect();
        assert_eq!(names, vec!["example", "region"]);
    }

    #[test]
    fn test_failed_first_column_leaves_no_schema() {
        let mut table = Table::new("t.csv");
        let mut virtual_column = Column::new("v").unwrap();
        virtual_column.set_virtual(true).unwrap();
        table.add_column(virtual_column).unwrap();
        assert!(table.add_column(Column::new("late").unwrap()).is_err());
        assert_eq!(table.table_schema().unwrap().columns().len(), 1);

        let mut empty = Table::new("e.csv");
        assert!(
            empty
                .set("tableSchema", json!({"columns": [{"name": "a"}, {"name": "a"}]}))
                .is_err()
        );
        assert!(empty.table_schema().is_none());
    }

    #[test]
    fn test_from_map_requires_url() {
        let fields = json!({"dcterms:title": "no url"});
        let err = Table::from_map(fields.as_object().unwrap()).unwrap_err();
        assert_eq!(err, ValidationError::MissingProperty { property: "url" });
    }

    #[test]
    fn test_inherited_properties() {
        let mut table = Table::new("t.csv");
        table.set_about_url("http://example.com/{id}").unwrap();
        assert_eq!(table.get("aboutUrl").and_then(PropertyValue::as_str), Some("http://example.com/{id}"));
        table.set_separator(";").unwrap();
        assert_eq!(table.separator(), Some(";"));
        assert!(table.set("textDirection", "upwards").is_err());
    }
}
