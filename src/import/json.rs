//! JSON metadata document parser

use super::{ImportError, ImportResult};
use crate::models::{MetadataNode, Schema, Table, TopLevel};
use crate::validation::ValidationResult;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

/// A parsed top-level metadata object.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataDocument {
    Table(Table),
    Schema(Schema),
}

impl MetadataDocument {
    pub fn kind(&self) -> &'static str {
        match self {
            MetadataDocument::Table(_) => "Table",
            MetadataDocument::Schema(_) => "Schema",
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            MetadataDocument::Table(table) => Some(table),
            MetadataDocument::Schema(_) => None,
        }
    }

    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            MetadataDocument::Schema(schema) => Some(schema),
            MetadataDocument::Table(_) => None,
        }
    }

    /// Check that every column reference names an existing column.
    pub fn check_references(&self) -> ValidationResult<()> {
        match self {
            MetadataDocument::Table(table) => table.check_references(),
            MetadataDocument::Schema(schema) => schema.check_references(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            MetadataDocument::Table(table) => table.to_json(),
            MetadataDocument::Schema(schema) => schema.to_json(),
        }
    }

    pub fn to_json_string(&self) -> Result<String, crate::export::ExportError> {
        match self {
            MetadataDocument::Table(table) => table.to_json_string(),
            MetadataDocument::Schema(schema) => schema.to_json_string(),
        }
    }
}

impl Serialize for MetadataDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetadataDocument::Table(table) => table.serialize(serializer),
            MetadataDocument::Schema(schema) => schema.serialize(serializer),
        }
    }
}

/// Parse a metadata document from JSON text.
///
/// # Example
///
/// ```rust
/// use csvw_metadata::import::parse_document;
///
/// let doc = parse_document(r#"{"url": "a.csv", "dcterms:title": "A"}"#).unwrap();
/// assert_eq!(doc.kind(), "Table");
/// ```
pub fn parse_document(text: &str) -> ImportResult<MetadataDocument> {
    let value: Value = serde_json::from_str(text)?;
    parse_value(&value)
}

/// Classify and materialise an already-parsed JSON document.
pub fn parse_value(value: &Value) -> ImportResult<MetadataDocument> {
    let fields = value.as_object().ok_or_else(|| {
        ImportError::UnsupportedDocument("top level must be a JSON object".to_string())
    })?;

    if fields.contains_key("tables") {
        return Err(ImportError::UnsupportedDocument(
            "table groups are not supported".to_string(),
        ));
    }

    let declared_type = fields.get("@type").and_then(Value::as_str);
    let document = match declared_type {
        Some("Table") => MetadataDocument::Table(Table::from_map(fields)?),
        Some("Schema") => MetadataDocument::Schema(Schema::from_map(fields)?),
        Some(other) => {
            return Err(ImportError::UnsupportedDocument(format!(
                "top-level @type '{}' is not supported",
                other
            )));
        }
        None if fields.contains_key("url") => MetadataDocument::Table(Table::from_map(fields)?),
        None if fields.contains_key("columns") => {
            MetadataDocument::Schema(Schema::from_map(fields)?)
        }
        // a table without a url is the most likely intent
        None => MetadataDocument::Table(Table::from_map(fields)?),
    };

    debug!("Parsed {} metadata document", document.kind());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_classify_table_and_schema() {
        let table = parse_document(r#"{"url": "a.csv"}"#).unwrap();
        assert!(table.as_table().is_some());

        let schema = parse_document(r#"{"columns": [{"name": "a"}]}"#).unwrap();
        assert_eq!(schema.as_schema().map(|s| s.columns().len()), Some(1));
    }

    #[test]
    fn test_table_group_unsupported() {
        let err = parse_document(r#"{"tables": []}"#).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedDocument(_)));
    }

    #[test]
    fn test_missing_url() {
        let err = parse_document(r#"{"dcterms:title": "x"}"#).unwrap_err();
        assert!(matches!(
            err,
            ImportError::Validation(ValidationError::MissingProperty { property: "url" })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_document("{"), Err(ImportError::Parse(_))));
        assert!(matches!(
            parse_document("[1, 2]"),
            Err(ImportError::UnsupportedDocument(_))
        ));
    }
}
