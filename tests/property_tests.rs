//! Property-based tests for property name handling.
//!
//! These tests use proptest to check name acceptance and the
//! equivalence of the two access views across generated names.

use proptest::prelude::*;

use csvw_metadata::models::{Column, MetadataNode, PropertyValue, Schema, Table};
use csvw_metadata::validation::{KeyCodec, KNOWN_PREFIXES, PrefixRegistry};

/// Strategy for local names: lowercase words without separators.
fn local_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,12}"
}

/// Strategy for registered prefixes.
fn known_prefix() -> impl Strategy<Value = &'static str> {
    prop::sample::select(KNOWN_PREFIXES.iter().map(|(prefix, _)| *prefix).collect::<Vec<_>>())
}

/// Strategy for prefixes that are not registered.
fn unknown_prefix() -> impl Strategy<Value = String> {
    "[a-z]{2,10}".prop_filter("must not be a known prefix", |p| !PrefixRegistry::is_known(p))
}

proptest! {
    /// A known-prefix attribute name is stored under its canonical key.
    #[test]
    fn known_prefix_attribute_accepted(prefix in known_prefix(), local in local_name()) {
        let mut column = Column::new("c").unwrap();
        let attribute = format!("{}_{}", prefix, local);
        let key = format!("{}:{}", prefix, local);
        prop_assert!(column.set(&attribute, "v").is_ok());
        prop_assert_eq!(column.get(&key).and_then(PropertyValue::as_str), Some("v"));
        prop_assert_eq!(column.get(&attribute), column.get(&key));
    }

    /// Unknown prefixes are rejected through both views.
    #[test]
    fn unknown_prefix_rejected(prefix in unknown_prefix(), local in local_name()) {
        let attribute = format!("{}_{}", prefix, local);
        let key = format!("{}:{}", prefix, local);
        let mut schema = Schema::new();
        prop_assert!(schema.set(&attribute, "x").is_err());
        prop_assert!(schema.set_key(&key, "x").is_err());
        prop_assert!(schema.properties().is_empty());
    }

    /// Keys with a network location are accepted as written.
    #[test]
    fn absolute_keys_accepted(host in "[a-z]{1,10}(\\.[a-z]{2,5}){1,2}", path in "(/[a-z_]{1,8}){0,3}") {
        let key = format!("http://{}{}", host, path);
        prop_assert!(KeyCodec::is_absolute(&key));
        let mut table = Table::new("t.csv");
        prop_assert!(table.set_key(&key, "v").is_ok());
        prop_assert!(table.properties().get_by_key(&key).is_some());
    }

    /// Relative references are never accepted as common property names.
    #[test]
    fn relative_keys_rejected(fragment in "[a-z]{1,10}") {
        let fragment_ref = format!("#{}", fragment);
        let path_ref = format!("./{}", fragment);
        let mut table = Table::new("t.csv");
        prop_assert!(table.set_key(&fragment_ref, "v").is_err());
        prop_assert!(table.set_key(&path_ref, "v").is_err());
    }

    /// Writing through one view and reading through the other agree.
    #[test]
    fn views_are_equivalent(prefix in known_prefix(), local in local_name(), value in "[ -~]{0,20}") {
        let attribute = format!("{}_{}", prefix, local);
        let key = KeyCodec::to_canonical(&attribute);

        let mut by_attribute = Table::new("t.csv");
        by_attribute.set(&attribute, value.as_str()).unwrap();
        let mut by_key = Table::new("t.csv");
        by_key.set_key(&key, value.as_str()).unwrap();

        prop_assert_eq!(by_attribute.to_json(), by_key.to_json());
        prop_assert_eq!(KeyCodec::to_attribute(&key), attribute);
    }
}
