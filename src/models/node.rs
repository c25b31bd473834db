//! Capabilities shared by metadata nodes
//!
//! - [`MetadataNode`]: access to the node's property store and the generic
//!   read/write surface built on it.
//! - [`InheritedProperties`]: typed accessors for the inherited properties,
//!   available on every node.
//! - [`TopLevel`]: context handling and serialisation for objects that may
//!   sit at the top of a metadata document.

use super::context::Context;
use super::enums::TextDirection;
use super::store::PropertyStore;
use super::value::PropertyValue;
use super::vocabulary::Vocabulary;
use crate::export::{ExportError, MetadataWriter};
use crate::validation::ValidationResult;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// A node backed by a validated property store.
pub trait MetadataNode: Sized {
    type Vocabulary: Vocabulary;

    fn properties(&self) -> &PropertyStore<Self::Vocabulary>;

    fn properties_mut(&mut self) -> &mut PropertyStore<Self::Vocabulary>;

    /// Set a property by attribute-style name (`dcterms_title`, `id`, `url`).
    fn set(&mut self, name: &str, value: impl Into<PropertyValue>) -> ValidationResult<&mut Self> {
        self.properties_mut().set_by_attribute(name, value)?;
        Ok(self)
    }

    /// Set a property by canonical key (`dcterms:title`, `@id`, `url`).
    fn set_key(&mut self, key: &str, value: impl Into<PropertyValue>) -> ValidationResult<&mut Self> {
        self.properties_mut().set_by_key(key, value)?;
        Ok(self)
    }

    /// Read a property by either name form.
    fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties().get(name)
    }

    fn id(&self) -> Option<&str> {
        self.properties().get_by_key("@id").and_then(PropertyValue::as_str)
    }

    fn set_id(&mut self, id: impl Into<String>) -> ValidationResult<&mut Self> {
        self.set_key("@id", id.into())
    }

    fn node_type(&self) -> Option<&str> {
        self.properties().get_by_key("@type").and_then(PropertyValue::as_str)
    }

    /// Set `@type`; only the node's own kind name is accepted.
    fn set_node_type(&mut self, node_type: impl Into<String>) -> ValidationResult<&mut Self> {
        self.set_key("@type", node_type.into())
    }

    /// Unwrap the node into plain JSON in insertion order.
    fn to_json(&self) -> Value {
        self.properties().to_json()
    }
}

fn json_str<'a, N: MetadataNode>(node: &'a N, key: &str) -> Option<&'a str> {
    node.properties().get_by_key(key).and_then(PropertyValue::as_str)
}

fn json_value<'a, N: MetadataNode>(node: &'a N, key: &str) -> Option<&'a Value> {
    node.properties().get_by_key(key).and_then(PropertyValue::as_json)
}

/// Typed accessors for the inherited properties.
///
/// URI template properties (`aboutUrl`, `propertyUrl`, `valueUrl`) are kept
/// as opaque strings; expanding them is left to a URI template processor.
pub trait InheritedProperties: MetadataNode {
    fn about_url(&self) -> Option<&str> {
        json_str(self, "aboutUrl")
    }

    fn set_about_url(&mut self, template: impl Into<String>) -> ValidationResult<&mut Self> {
        self.set_key("aboutUrl", template.into())
    }

    /// Datatype name or datatype description object.
    fn datatype(&self) -> Option<&Value> {
        json_value(self, "datatype")
    }

    fn set_datatype(&mut self, datatype: impl Into<Value>) -> ValidationResult<&mut Self> {
        self.set_key("datatype", datatype.into())
    }

    fn default_value(&self) -> Option<&str> {
        json_str(self, "default")
    }

    fn set_default_value(&mut self, default: impl Into<String>) -> ValidationResult<&mut Self> {
        self.set_key("default", default.into())
    }

    fn lang(&self) -> Option<&str> {
        json_str(self, "lang")
    }

    fn set_lang(&mut self, lang: impl Into<String>) -> ValidationResult<&mut Self> {
        self.set_key("lang", lang.into())
    }

    /// Null string, or list of null strings.
    fn null(&self) -> Option<&Value> {
        json_value(self, "null")
    }

    fn set_null(&mut self, null: impl Into<Value>) -> ValidationResult<&mut Self> {
        self.set_key("null", null.into())
    }

    fn ordered(&self) -> Option<bool> {
        self.properties().get_by_key("ordered").and_then(PropertyValue::as_bool)
    }

    fn set_ordered(&mut self, ordered: bool) -> ValidationResult<&mut Self> {
        self.set_key("ordered", ordered)
    }

    fn property_url(&self) -> Option<&str> {
        json_str(self, "propertyUrl")
    }

    fn set_property_url(&mut self, template: impl Into<String>) -> ValidationResult<&mut Self> {
        self.set_key("propertyUrl", template.into())
    }

    fn required(&self) -> Option<bool> {
        self.properties().get_by_key("required").and_then(PropertyValue::as_bool)
    }

    fn set_required(&mut self, required: bool) -> ValidationResult<&mut Self> {
        self.set_key("required", required)
    }

    fn separator(&self) -> Option<&str> {
        json_str(self, "separator")
    }

    fn set_separator(&mut self, separator: impl Into<String>) -> ValidationResult<&mut Self> {
        self.set_key("separator", separator.into())
    }

    fn text_direction(&self) -> Option<TextDirection> {
        json_str(self, "textDirection").and_then(|s| s.parse().ok())
    }

    fn set_text_direction(&mut self, direction: TextDirection) -> ValidationResult<&mut Self> {
        self.set_key("textDirection", direction.as_str())
    }

    fn value_url(&self) -> Option<&str> {
        json_str(self, "valueUrl")
    }

    fn set_value_url(&mut self, template: impl Into<String>) -> ValidationResult<&mut Self> {
        self.set_key("valueUrl", template.into())
    }
}

impl<N: MetadataNode> InheritedProperties for N {}

/// Objects that may be the top level of a metadata document.
pub trait TopLevel: MetadataNode + Serialize {
    fn context(&self) -> Option<&Context> {
        match self.properties().get_by_key("@context") {
            Some(PropertyValue::Context(context)) => Some(context),
            _ => None,
        }
    }

    /// Replace the context. A JSON field mapping is materialised first.
    fn set_context(&mut self, context: impl Into<PropertyValue>) -> ValidationResult<&mut Self> {
        self.set_key("@context", context)
    }

    fn add_context(
        &mut self,
        base: Option<&str>,
        language: Option<&str>,
    ) -> ValidationResult<&mut Self> {
        self.set_context(Context::new(base, language))
    }

    /// Serialise with the default writer configuration.
    fn to_json_string(&self) -> Result<String, ExportError> {
        MetadataWriter::default().to_string(self)
    }

    /// Write the document to `path` with the default writer configuration.
    fn write(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        MetadataWriter::default().write(self, path)
    }
}
