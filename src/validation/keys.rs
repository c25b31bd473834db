//! Translation between attribute-style names and canonical property keys.
//!
//! Attribute-style names use `_` where the stored key uses `:`, so
//! `dcterms_title` and `dcterms:title` address the same property. The
//! structural words `id`, `type` and `context` map to the JSON-LD keywords
//! `@id`, `@type` and `@context`. Absolute URLs are never desugared since
//! they cannot be written as attribute names in the first place.

use once_cell::sync::Lazy;
use regex::Regex;

/// Reserved structural keys, in canonical form.
pub const RESERVED_KEYS: [&str; 3] = ["@id", "@type", "@context"];

// scheme is optional so that network-path references ("//host/x") count too
static AUTHORITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:)?//[^/?#]+").expect("valid authority regex")
});

/// Stateless codec for property names.
pub struct KeyCodec;

impl KeyCodec {
    /// Convert an attribute-style name to its canonical key.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvw_metadata::validation::keys::KeyCodec;
    ///
    /// assert_eq!(KeyCodec::to_canonical("dcterms_title"), "dcterms:title");
    /// assert_eq!(KeyCodec::to_canonical("id"), "@id");
    /// assert_eq!(KeyCodec::to_canonical("http://example.org/a_b"), "http://example.org/a_b");
    /// ```
    pub fn to_canonical(name: &str) -> String {
        if let Some(reserved) = Self::reserved_key(name) {
            return reserved.to_string();
        }
        if Self::is_absolute(name) {
            return name.to_string();
        }
        name.replace('_', ":")
    }

    /// Convert a canonical key to its attribute-style name.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvw_metadata::validation::keys::KeyCodec;
    ///
    /// assert_eq!(KeyCodec::to_attribute("dcterms:title"), "dcterms_title");
    /// assert_eq!(KeyCodec::to_attribute("@type"), "type");
    /// assert_eq!(KeyCodec::to_attribute("http://example.co.uk"), "http://example.co.uk");
    /// ```
    pub fn to_attribute(key: &str) -> String {
        if Self::is_reserved(key) {
            return key.trim_start_matches('@').to_string();
        }
        if Self::is_absolute(key) {
            return key.to_string();
        }
        key.replace(':', "_")
    }

    /// True iff `value` parsed as a URI has a non-empty network location.
    pub fn is_absolute(value: &str) -> bool {
        AUTHORITY_REGEX.is_match(value)
    }

    /// Whether `key` is one of the canonical reserved keys.
    pub fn is_reserved(key: &str) -> bool {
        RESERVED_KEYS.contains(&key)
    }

    /// Canonical reserved key for a bare or `@`-prefixed structural word.
    pub fn reserved_key(name: &str) -> Option<&'static str> {
        match name {
            "id" | "@id" => Some("@id"),
            "type" | "@type" => Some("@type"),
            "context" | "@context" => Some("@context"),
            _ => None,
        }
    }
}
