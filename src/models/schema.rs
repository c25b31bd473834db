//! Schema description model

use super::column::Column;
use super::context::check_context;
use super::foreign_key::{ColumnReference, ForeignKey};
use super::node::{MetadataNode, TopLevel};
use super::store::PropertyStore;
use super::value::PropertyValue;
use super::vocabulary::{Vocabulary, check_common, expect_string};
use crate::validation::{ValidationError, ValidationResult};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Properties recognised on schema descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchemaVocabulary;

impl Vocabulary for SchemaVocabulary {
    const KIND: &'static str = "Schema";
    const PROPERTIES: &'static [&'static str] =
        &["name", "columns", "foreignKeys", "primaryKey", "rowTitles"];

    fn check(key: &str, value: PropertyValue) -> ValidationResult<PropertyValue> {
        match key {
            "columns" => {
                let columns = match value {
                    PropertyValue::Columns(columns) => columns,
                    PropertyValue::Json(Value::Array(items)) => items
                        .iter()
                        .map(Column::from_value)
                        .collect::<ValidationResult<Vec<_>>>()?,
                    _ => {
                        return Err(ValidationError::invalid_value(
                            key,
                            "columns property of Schema object must be a list of Column or dict objects",
                        ));
                    }
                };
                check_columns(&columns)?;
                Ok(PropertyValue::Columns(columns))
            }
            "foreignKeys" => {
                let keys = match value {
                    PropertyValue::ForeignKeys(keys) => {
                        keys.iter().try_for_each(ForeignKey::validate)?;
                        keys
                    }
                    PropertyValue::Json(Value::Array(items)) => items
                        .iter()
                        .map(ForeignKey::from_value)
                        .collect::<ValidationResult<Vec<_>>>()?,
                    _ => {
                        return Err(ValidationError::invalid_value(
                            key,
                            "must be a list of foreign key definitions",
                        ));
                    }
                };
                Ok(PropertyValue::ForeignKeys(keys))
            }
            "primaryKey" | "rowTitles" => {
                let json = value.into_json(key)?;
                let reference = ColumnReference::from_value(key, &json)?;
                Ok(PropertyValue::Json(reference.to_json()))
            }
            "name" => {
                let json = value.into_json(key)?;
                expect_string(key, &json)?;
                Ok(PropertyValue::Json(json))
            }
            "@context" => check_context(value),
            _ => check_common::<Self>(key, value),
        }
    }
}

/// Check the invariants of a column list: names are pairwise unique and
/// no non-virtual column follows a virtual one.
pub fn check_columns(columns: &[Column]) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    let mut virtual_seen = false;
    for column in columns {
        if let Some(name) = column.name()
            && !seen.insert(name)
        {
            return Err(ValidationError::DuplicateName {
                name: name.to_string(),
            });
        }
        if column.is_virtual() {
            virtual_seen = true;
        } else if virtual_seen {
            return Err(ValidationError::VirtualColumnOrder {
                name: column.name().unwrap_or("<unnamed>").to_string(),
            });
        }
    }
    Ok(())
}

/// Named construction fields for a [`Schema`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaFields {
    pub name: Option<String>,
    pub columns: Option<Vec<Column>>,
    pub foreign_keys: Option<Vec<ForeignKey>>,
    pub primary_key: Option<ColumnReference>,
    pub row_titles: Option<ColumnReference>,
    pub id: Option<String>,
    pub node_type: Option<String>,
    pub extensions: Map<String, Value>,
}

/// A schema description: the columns of a table and the keys over them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    properties: PropertyStore<SchemaVocabulary>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema from named fields plus extension properties.
    pub fn with_fields(fields: SchemaFields) -> ValidationResult<Self> {
        let mut schema = Self::default();
        if let Some(name) = fields.name {
            schema.set_name(name)?;
        }
        if let Some(columns) = fields.columns {
            schema.set_columns(columns)?;
        }
        if let Some(keys) = fields.foreign_keys {
            schema.set_foreign_keys(keys)?;
        }
        if let Some(primary_key) = fields.primary_key {
            schema.set_primary_key(primary_key)?;
        }
        if let Some(row_titles) = fields.row_titles {
            schema.set_row_titles(row_titles)?;
        }
        if let Some(id) = fields.id {
            schema.set_id(id)?;
        }
        if let Some(node_type) = fields.node_type {
            schema.set_node_type(node_type)?;
        }
        for (name, value) in fields.extensions {
            schema.set(&name, value)?;
        }
        Ok(schema)
    }

    /// Materialise a schema from a raw field mapping, keeping its order.
    pub fn from_map(fields: &Map<String, Value>) -> ValidationResult<Self> {
        let mut schema = Self::default();
        for (key, value) in fields {
            schema.set_key(key, value.clone())?;
        }
        Ok(schema)
    }

    pub fn name(&self) -> Option<&str> {
        self.properties.get_by_key("name").and_then(PropertyValue::as_str)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<&mut Self> {
        self.set_key("name", name.into())
    }

    /// Column descriptions in table order.
    pub fn columns(&self) -> &[Column] {
        match self.properties.get_by_key("columns") {
            Some(PropertyValue::Columns(columns)) => columns.as_slice(),
            _ => &[],
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns().iter().find(|c| c.name() == Some(name))
    }

    /// Replace the column list.
    pub fn set_columns(&mut self, columns: Vec<Column>) -> ValidationResult<&mut Self> {
        self.set_key("columns", columns)
    }

    /// Append a column, rejecting a name already used in this schema.
    pub fn add_column(&mut self, column: Column) -> ValidationResult<&mut Self> {
        let mut columns = self.columns().to_vec();
        columns.push(column);
        self.set_columns(columns)
    }

    /// Modify the column called `name`.
    ///
    /// The change is applied to a copy of the column list and committed only
    /// if the list still satisfies its invariants, so a rename cannot
    /// introduce a duplicate.
    pub fn update_column<F>(&mut self, name: &str, update: F) -> ValidationResult<&mut Self>
    where
        F: FnOnce(&mut Column) -> ValidationResult<()>,
    {
        let mut columns = self.columns().to_vec();
        let column = columns
            .iter_mut()
            .find(|c| c.name() == Some(name))
            .ok_or_else(|| ValidationError::UnresolvedColumnReference {
                property: "columns",
                name: name.to_string(),
            })?;
        update(column)?;
        self.set_columns(columns)
    }

    pub fn foreign_keys(&self) -> &[ForeignKey] {
        match self.properties.get_by_key("foreignKeys") {
            Some(PropertyValue::ForeignKeys(keys)) => keys.as_slice(),
            _ => &[],
        }
    }

    pub fn set_foreign_keys(&mut self, keys: Vec<ForeignKey>) -> ValidationResult<&mut Self> {
        self.set_key("foreignKeys", keys)
    }

    pub fn add_foreign_key(&mut self, key: ForeignKey) -> ValidationResult<&mut Self> {
        let mut keys = self.foreign_keys().to_vec();
        keys.push(key);
        self.set_foreign_keys(keys)
    }

    pub fn primary_key(&self) -> Option<ColumnReference> {
        self.column_reference("primaryKey")
    }

    pub fn set_primary_key(
        &mut self,
        reference: impl Into<ColumnReference>,
    ) -> ValidationResult<&mut Self> {
        self.set_key("primaryKey", reference.into().to_json())
    }

    pub fn row_titles(&self) -> Option<ColumnReference> {
        self.column_reference("rowTitles")
    }

    pub fn set_row_titles(
        &mut self,
        reference: impl Into<ColumnReference>,
    ) -> ValidationResult<&mut Self> {
        self.set_key("rowTitles", reference.into().to_json())
    }

    fn column_reference(&self, key: &str) -> Option<ColumnReference> {
        let json = self.properties.get_by_key(key)?.as_json()?;
        ColumnReference::from_value(key, json).ok()
    }

    /// Verify that `primaryKey`, `rowTitles` and the foreign keys only
    /// name columns this schema describes.
    pub fn check_references(&self) -> ValidationResult<()> {
        let names: HashSet<&str> = self.columns().iter().filter_map(Column::name).collect();
        let unresolved = |property: &'static str, reference: &ColumnReference| {
            reference
                .names()
                .into_iter()
                .find(|name| !names.contains(name))
                .map(|name| ValidationError::UnresolvedColumnReference {
                    property,
                    name: name.to_string(),
                })
        };

        if let Some(reference) = self.primary_key()
            && let Some(err) = unresolved("primaryKey", &reference)
        {
            return Err(err);
        }
        if let Some(reference) = self.row_titles()
            && let Some(err) = unresolved("rowTitles", &reference)
        {
            return Err(err);
        }
        for key in self.foreign_keys() {
            if let Some(err) = unresolved("foreignKeys", &key.column_reference) {
                return Err(err);
            }
        }
        Ok(())
    }
}

impl MetadataNode for Schema {
    type Vocabulary = SchemaVocabulary;

    fn properties(&self) -> &PropertyStore<SchemaVocabulary> {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore<SchemaVocabulary> {
        &mut self.properties
    }
}

impl TopLevel for Schema {}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.properties.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn column(name: &str) -> Column {
        Column::new(name).unwrap()
    }

    #[test]
    fn test_add_column_rejects_duplicates() {
        let mut schema = Schema::new();
        schema.add_column(column("region")).unwrap();
        let err = schema.add_column(column("region")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateName {
                name: "region".to_string()
            }
        );
        assert_eq!(schema.columns().len(), 1);
    }

    #[test]
    fn test_set_columns_checks_new_list() {
        let mut schema = Schema::new();
        let result = schema.set_columns(vec![column("a"), column("b"), column("a")]);
        assert!(matches!(result, Err(ValidationError::DuplicateName { .. })));
        assert!(schema.columns().is_empty());
    }

    #[test]
    fn test_unnamed_columns_do_not_collide() {
        let mut schema = Schema::new();
        schema.add_column(Column::default()).unwrap();
        schema.add_column(Column::default()).unwrap();
        assert_eq!(schema.columns().len(), 2);
    }

    #[test]
    fn test_columns_must_be_a_list() {
        let mut schema = Schema::new();
        assert!(matches!(
            schema.set("columns", json!({"name": "a"})),
            Err(ValidationError::InvalidPropertyValue { .. })
        ));
        assert!(schema.set("columns", json!([{"name": "a"}, {"name": "b"}])).is_ok());
        assert_eq!(schema.column("b").and_then(Column::name), Some("b"));
    }

    #[test]
    fn test_rename_cannot_collide() {
        let mut schema = Schema::new();
        schema.add_column(column("a")).unwrap();
        schema.add_column(column("b")).unwrap();

        let err = schema
            .update_column("b", |c| c.set_name("a").map(|_| ()))
            .unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateName { .. }));
        assert!(schema.column("b").is_some());

        schema
            .update_column("b", |c| c.set_name("c").map(|_| ()))
            .unwrap();
        assert!(schema.column("c").is_some());
        assert!(schema.update_column("missing", |_| Ok(())).is_err());
    }

    #[test]
    fn test_virtual_columns_come_last() {
        let mut schema = Schema::new();
        let mut virtual_column = column("v");
        virtual_column.set_virtual(true).unwrap();

        schema.add_column(column("a")).unwrap();
        schema.add_column(virtual_column).unwrap();
        let err = schema.add_column(column("b")).unwrap_err();
        assert!(matches!(err, ValidationError::VirtualColumnOrder { ref name } if name == "b"));
        assert_eq!(schema.columns().len(), 2);
    }

    #[test]
    fn test_primary_key_forms() {
        let mut schema = Schema::new();
        schema.set_primary_key("id").unwrap();
        assert_eq!(schema.primary_key(), Some(ColumnReference::from("id")));
        schema.set_primary_key(vec!["familyName", "givenName"]).unwrap();
        assert_eq!(
            schema.get("primaryKey").map(PropertyValue::to_json),
            Some(json!(["familyName", "givenName"]))
        );
        assert!(schema.set("primaryKey", json!(5)).is_err());
    }

    #[test]
    fn test_foreign_keys_are_foreign_keys() {
        let mut schema = Schema::new();
        schema.add_column(column("country")).unwrap();
        let key = ForeignKey::to_resource("country", "countries.csv", "code").unwrap();
        schema.add_foreign_key(key.clone()).unwrap();

        assert_eq!(schema.foreign_keys(), &[key]);
        assert_eq!(schema.columns().len(), 1);
        assert!(schema.set("foreignKeys", json!("country")).is_err());
    }

    #[test]
    fn test_check_references() {
        let mut schema = Schema::new();
        schema.add_column(column("id")).unwrap();
        schema.set_primary_key("id").unwrap();
        assert!(schema.check_references().is_ok());

        schema.set_row_titles(vec!["id", "label"]).unwrap();
        assert_eq!(
            schema.check_references(),
            Err(ValidationError::UnresolvedColumnReference {
                property: "rowTitles",
                name: "label".to_string()
            })
        );
    }

    #[test]
    fn test_schema_context() {
        let mut schema = Schema::new();
        schema.add_context(None, Some("en")).unwrap();
        assert_eq!(schema.context().and_then(|c| c.language()), Some("en"));
        assert!(schema.set("context", json!(7)).is_err());
    }
}
