//! `@context` declaration of a top-level metadata object

use super::value::PropertyValue;
use crate::validation::{ValidationError, ValidationResult};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Namespace every CSVW metadata document references.
pub const CSVW_NAMESPACE: &str = "http://www.w3.org/ns/csvw";

/// Context of a top-level object.
///
/// Without overrides it serialises as the bare namespace reference;
/// with a base URL and/or language it becomes
/// `["http://www.w3.org/ns/csvw", {"@base": ..., "@language": ...}]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    base: Option<String>,
    language: Option<String>,
}

impl Context {
    /// Create a context; empty strings count as absent.
    pub fn new(base: Option<&str>, language: Option<&str>) -> Self {
        let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            base: non_empty(base),
            language: non_empty(language),
        }
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Whether this is the bare namespace reference.
    pub fn is_bare(&self) -> bool {
        self.base.is_none() && self.language.is_none()
    }

    pub fn to_json(&self) -> Value {
        if self.is_bare() {
            return Value::String(CSVW_NAMESPACE.to_string());
        }
        let mut options = Map::new();
        if let Some(base) = &self.base {
            options.insert("@base".to_string(), Value::String(base.clone()));
        }
        if let Some(language) = &self.language {
            options.insert("@language".to_string(), Value::String(language.clone()));
        }
        json!([CSVW_NAMESPACE, Value::Object(options)])
    }

    /// Materialise a context from its JSON forms.
    ///
    /// Accepts the bare reference, the two-element array form, or a field
    /// mapping with `base`/`language` (or `@base`/`@language`).
    pub fn from_value(value: &Value) -> ValidationResult<Self> {
        match value {
            Value::String(reference) => {
                check_reference(reference)?;
                Ok(Self::default())
            }
            Value::Array(items) => match items.as_slice() {
                [Value::String(reference), Value::Object(options)] => {
                    check_reference(reference)?;
                    Self::from_options(options)
                }
                _ => Err(ValidationError::invalid_value(
                    "@context",
                    "array form must be [\"http://www.w3.org/ns/csvw\", {...}]",
                )),
            },
            Value::Object(options) => Self::from_options(options),
            _ => Err(ValidationError::invalid_value(
                "@context",
                "value must be of type Context or dict",
            )),
        }
    }

    fn from_options(options: &Map<String, Value>) -> ValidationResult<Self> {
        let mut base = None;
        let mut language = None;
        for (key, value) in options {
            let text = value.as_str().ok_or_else(|| {
                ValidationError::invalid_value("@context", format!("'{}' must be a string", key))
            })?;
            match key.as_str() {
                "base" | "@base" => base = Some(text),
                "language" | "@language" => language = Some(text),
                other => {
                    return Err(ValidationError::invalid_value(
                        "@context",
                        format!("unsupported context option '{}'", other),
                    ));
                }
            }
        }
        Ok(Self::new(base, language))
    }
}

fn check_reference(reference: &str) -> ValidationResult<()> {
    if reference != CSVW_NAMESPACE {
        return Err(ValidationError::invalid_value(
            "@context",
            format!("must reference {}, got '{}'", CSVW_NAMESPACE, reference),
        ));
    }
    Ok(())
}

/// Check performed when a value is stored under `@context`.
pub(crate) fn check_context(value: PropertyValue) -> ValidationResult<PropertyValue> {
    match value {
        PropertyValue::Context(context) => Ok(PropertyValue::Context(context)),
        PropertyValue::Json(json) => Ok(PropertyValue::Context(Context::from_value(&json)?)),
        _ => Err(ValidationError::invalid_value(
            "@context",
            "value must be of type Context or dict",
        )),
    }
}

impl Serialize for Context {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_context() {
        let context = Context::new(None, None);
        assert!(context.is_bare());
        assert_eq!(context.to_json(), json!("http://www.w3.org/ns/csvw"));
        assert_eq!(Context::new(Some(""), Some("")), context);
    }

    #[test]
    fn test_context_with_overrides() {
        let context = Context::new(Some("http://example.org"), Some("en"));
        assert_eq!(context.base(), Some("http://example.org"));
        assert_eq!(context.language(), Some("en"));
        assert_eq!(
            context.to_json(),
            json!(["http://www.w3.org/ns/csvw", {"@base": "http://example.org", "@language": "en"}])
        );
    }

    #[test]
    fn test_from_value_forms() {
        let only_base = Context::new(Some("http://example.org"), None);
        assert_eq!(Context::from_value(&only_base.to_json()).unwrap(), only_base);
        assert_eq!(
            Context::from_value(&json!({"base": "http://example.org"})).unwrap(),
            only_base
        );
        assert!(Context::from_value(&json!("http://example.org/other")).is_err());
        assert!(Context::from_value(&json!({"vocab": "x"})).is_err());
        assert!(Context::from_value(&json!(42)).is_err());
    }
}
