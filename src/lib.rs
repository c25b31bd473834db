//! CSVW metadata - build, validate and write CSV on the Web metadata documents
//!
//! Provides:
//! - Property name validation against known vocabulary prefixes
//! - Attribute-style (`dcterms_title`) and canonical-key (`dcterms:title`)
//!   access to one shared property store per node
//! - Table, schema, column and foreign key descriptions
//! - Ordered JSON export and import of metadata documents
//!
//! # Example
//!
//! ```rust
//! use csvw_metadata::{Column, MetadataNode, Table, TopLevel};
//!
//! let mut table = Table::new("hello.csv");
//! table.add_context(Some("http://example.org"), Some("en")).unwrap();
//! table.add_column(Column::new("example").unwrap()).unwrap();
//! table.set("dcterms_title", "Hello World!").unwrap();
//!
//! let json = table.to_json_string().unwrap();
//! assert!(json.contains("\"dcterms:title\": \"Hello World!\""));
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod export;
pub mod import;
pub mod models;
pub mod validation;

pub use export::{ExportError, ExportResult, MetadataWriter, WriterConfig};
pub use import::{ImportError, ImportResult, MetadataDocument, parse_document};
pub use models::{
    Column, ColumnFields, ColumnReference, Context, ForeignKey, ForeignKeyReference,
    InheritedProperties, MetadataNode, PropertyStore, PropertyValue, Schema, SchemaFields, Table,
    TableDirection, TableFields, TextDirection, TopLevel,
};
pub use validation::{KeyCodec, PrefixRegistry, ValidationError, ValidationResult};
