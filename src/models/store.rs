//! Validated, ordered property storage shared by every metadata node.
//!
//! A store holds one slot per canonical key. It can be written through two
//! views that always land on the same slot:
//!
//! - the attribute view ([`PropertyStore::set_by_attribute`]), which accepts
//!   sugared names such as `dcterms_title` or `id`;
//! - the key view ([`PropertyStore::set_by_key`]), which accepts canonical
//!   keys such as `dcterms:title` or `@id`.
//!
//! Every write resolves the name, runs the kind's value checks and only then
//! touches the slot, so a rejected write leaves the store unchanged.

use super::value::PropertyValue;
use super::vocabulary::Vocabulary;
use crate::validation::{KeyCodec, PrefixRegistry, ValidationError, ValidationResult};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

/// Ordered map of canonical key to value, restricted by vocabulary `V`.
pub struct PropertyStore<V: Vocabulary> {
    entries: Vec<(String, PropertyValue)>,
    vocabulary: PhantomData<V>,
}

impl<V: Vocabulary> PropertyStore<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            vocabulary: PhantomData,
        }
    }

    /// Resolve an attribute-style name to the key it is stored under.
    pub fn resolve_attribute(name: &str) -> ValidationResult<String> {
        if let Some(reserved) = KeyCodec::reserved_key(name) {
            return Ok(reserved.to_string());
        }
        if V::allows(name) {
            return Ok(name.to_string());
        }
        let canonical = KeyCodec::to_canonical(name);
        if PrefixRegistry::has_known_prefix(&canonical) || KeyCodec::is_absolute(&canonical) {
            return Ok(canonical);
        }
        Err(ValidationError::InvalidPropertyName {
            name: name.to_string(),
        })
    }

    /// Resolve a canonical key, rejecting anything the store may not hold.
    pub fn resolve_key(key: &str) -> ValidationResult<String> {
        if let Some(reserved) = KeyCodec::reserved_key(key) {
            return Ok(reserved.to_string());
        }
        if V::allows(key) || PrefixRegistry::has_known_prefix(key) || KeyCodec::is_absolute(key) {
            return Ok(key.to_string());
        }
        Err(ValidationError::InvalidPropertyName {
            name: key.to_string(),
        })
    }

    /// Set a property through its attribute-style name.
    pub fn set_by_attribute(
        &mut self,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> ValidationResult<()> {
        let key = Self::resolve_attribute(name).inspect_err(|_| {
            tracing::debug!(kind = V::KIND, name, "rejected property name");
        })?;
        self.write(key, value.into())
    }

    /// Set a property through its canonical key.
    pub fn set_by_key(&mut self, key: &str, value: impl Into<PropertyValue>) -> ValidationResult<()> {
        let key = Self::resolve_key(key).inspect_err(|_| {
            tracing::debug!(kind = V::KIND, key, "rejected property key");
        })?;
        self.write(key, value.into())
    }

    fn write(&mut self, key: String, value: PropertyValue) -> ValidationResult<()> {
        let value = V::check(&key, value).inspect_err(|err| {
            tracing::debug!(kind = V::KIND, key = %key, error = %err, "rejected property value");
        })?;
        tracing::trace!(kind = V::KIND, key = %key, "property set");
        self.insert(key, value);
        Ok(())
    }

    /// Store without validation. Callers guarantee `key` and `value` are
    /// already known to be valid for `V`.
    pub(crate) fn insert(&mut self, key: String, value: PropertyValue) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a property by canonical key.
    pub fn get_by_key(&self, key: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Look up a property by attribute-style name.
    pub fn get_by_attribute(&self, name: &str) -> Option<&PropertyValue> {
        let key = Self::resolve_attribute(name).ok()?;
        self.get_by_key(&key)
    }

    /// Look up a property by either form, trying the canonical key first.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.get_by_key(name).or_else(|| self.get_by_attribute(name))
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut PropertyValue> {
        self.entries
            .iter_mut()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Whether a property is present under either form of `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in insertion order, keyed canonically.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Entries in insertion order, keyed by attribute-style name.
    pub fn attributes(&self) -> impl Iterator<Item = (String, &PropertyValue)> {
        self.entries.iter().map(|(key, value)| {
            let name = if V::allows(key) {
                key.clone()
            } else {
                KeyCodec::to_attribute(key)
            };
            (name, value)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unwrap into a plain JSON object in insertion order.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.entries {
            map.insert(key.clone(), value.to_json());
        }
        Value::Object(map)
    }
}

impl<V: Vocabulary> Default for PropertyStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vocabulary> Clone for PropertyStore<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            vocabulary: PhantomData,
        }
    }
}

impl<V: Vocabulary> PartialEq for PropertyStore<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Vocabulary> fmt::Debug for PropertyStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyStore")
            .field("kind", &V::KIND)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<V: Vocabulary> Serialize for PropertyStore<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
