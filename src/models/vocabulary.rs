//! Per-kind property vocabularies
//!
//! Each node kind declares the properties it recognises on top of the
//! inherited ones, and the value checks that apply to them. A
//! [`PropertyStore`](super::store::PropertyStore) is parameterised by one of
//! these, so the allow-list travels with the type instead of the instance.

use super::enums::TextDirection;
use super::value::PropertyValue;
use crate::validation::{ValidationError, ValidationResult};
use serde_json::Value;

/// Properties meaningful on table, schema and column descriptions alike.
///
/// See <https://w3c.github.io/csvw/metadata/#inherited-properties>.
pub const INHERITED_PROPERTIES: [&str; 11] = [
    "aboutUrl",
    "datatype",
    "default",
    "lang",
    "null",
    "ordered",
    "propertyUrl",
    "required",
    "separator",
    "textDirection",
    "valueUrl",
];

const BOOLEAN_PROPERTIES: [&str; 4] = ["ordered", "required", "suppressOutput", "virtual"];

/// Closed set of properties recognised by one node kind.
pub trait Vocabulary {
    /// Node kind, also the only accepted `@type` value.
    const KIND: &'static str;

    /// Kind-specific properties, excluding the inherited ones.
    const PROPERTIES: &'static [&'static str];

    /// Whether `name` is declared for this kind.
    fn allows(name: &str) -> bool {
        INHERITED_PROPERTIES.contains(&name) || Self::PROPERTIES.contains(&name)
    }

    /// Validate (and possibly materialise) a value about to be stored
    /// under the canonical `key`.
    fn check(key: &str, value: PropertyValue) -> ValidationResult<PropertyValue>;
}

/// Checks shared by every kind; kind-specific checks fall through to this.
pub(crate) fn check_common<V: Vocabulary>(
    key: &str,
    value: PropertyValue,
) -> ValidationResult<PropertyValue> {
    let json = value.into_json(key)?;
    match key {
        "@id" => {
            expect_string(key, &json)?;
        }
        "@type" => {
            if json.as_str() != Some(V::KIND) {
                return Err(ValidationError::invalid_value(
                    key,
                    format!("type property of {} object must be '{}'", V::KIND, V::KIND),
                ));
            }
        }
        "textDirection" => {
            let direction = expect_string(key, &json)?;
            direction
                .parse::<TextDirection>()
                .map_err(|reason| ValidationError::invalid_value(key, reason))?;
        }
        _ if BOOLEAN_PROPERTIES.contains(&key) && V::allows(key) => {
            if !json.is_boolean() {
                return Err(ValidationError::invalid_value(key, "must be a boolean"));
            }
        }
        _ => {}
    }
    Ok(PropertyValue::Json(json))
}

pub(crate) fn expect_string<'a>(key: &str, value: &'a Value) -> ValidationResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::invalid_value(key, "must be a string"))
}
