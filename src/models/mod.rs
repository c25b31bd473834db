//! Models module
//!
//! Metadata nodes and the validated property store they are built on.
//! Every node owns a [`PropertyStore`] parameterised by its vocabulary, so
//! attribute-style and canonical-key access always share one slot.

pub mod column;
pub mod context;
pub mod enums;
pub mod foreign_key;
pub mod node;
pub mod schema;
pub mod store;
pub mod table;
pub mod value;
pub mod vocabulary;

pub use column::{Column, ColumnFields, ColumnVocabulary, validate_column_name};
pub use context::{CSVW_NAMESPACE, Context};
pub use enums::*;
pub use foreign_key::{ColumnReference, ForeignKey, ForeignKeyReference};
pub use node::{InheritedProperties, MetadataNode, TopLevel};
pub use schema::{Schema, SchemaFields, SchemaVocabulary, check_columns};
pub use store::PropertyStore;
pub use table::{Table, TableFields, TableVocabulary};
pub use value::PropertyValue;
pub use vocabulary::{INHERITED_PROPERTIES, Vocabulary};
