//! Registry of vocabulary prefixes recognised in common property names.
//!
//! The prefixes are those defined for RDFa 1.1 within the initial context
//! plus the ones defined by the CSVW context. They must not be overridden,
//! so the table is closed: properties from any other vocabulary have to be
//! named with absolute URLs.
//!
//! See <https://w3c.github.io/csvw/metadata/#names-of-common-properties>.

/// Known prefixes and the namespaces they abbreviate, sorted by prefix.
pub const KNOWN_PREFIXES: &[(&str, &str)] = &[
    ("as", "https://www.w3.org/ns/activitystreams#"),
    ("cc", "http://creativecommons.org/ns#"),
    ("csvw", "http://www.w3.org/ns/csvw#"),
    ("ctag", "http://commontag.org/ns#"),
    ("dc", "http://purl.org/dc/terms/"),
    ("dc11", "http://purl.org/dc/elements/1.1/"),
    ("dcat", "http://www.w3.org/ns/dcat#"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("dctypes", "http://purl.org/dc/dcmitype/"),
    ("dqv", "http://www.w3.org/ns/dqv#"),
    ("duv", "https://www.w3.org/TR/vocab-duv#"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("gr", "http://purl.org/goodrelations/v1#"),
    ("grddl", "http://www.w3.org/2003/g/data-view#"),
    ("ical", "http://www.w3.org/2002/12/cal/icaltzd#"),
    ("ldp", "http://www.w3.org/ns/ldp#"),
    ("ma", "http://www.w3.org/ns/ma-ont#"),
    ("oa", "http://www.w3.org/ns/oa#"),
    ("og", "http://ogp.me/ns#"),
    ("org", "http://www.w3.org/ns/org#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("prov", "http://www.w3.org/ns/prov#"),
    ("qb", "http://purl.org/linked-data/cube#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfa", "http://www.w3.org/ns/rdfa#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("rev", "http://purl.org/stuff/rev#"),
    ("rif", "http://www.w3.org/2007/rif#"),
    ("rr", "http://www.w3.org/ns/r2rml#"),
    ("schema", "http://schema.org/"),
    ("sd", "http://www.w3.org/ns/sparql-service-description#"),
    ("sioc", "http://rdfs.org/sioc/ns#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("skosxl", "http://www.w3.org/2008/05/skos-xl#"),
    ("v", "http://rdf.data-vocabulary.org/#"),
    ("vcard", "http://www.w3.org/2006/vcard/ns#"),
    ("void", "http://rdfs.org/ns/void#"),
    ("wdr", "http://www.w3.org/2007/05/powder#"),
    ("wrds", "http://www.w3.org/2007/05/powder-s#"),
    ("xhv", "http://www.w3.org/1999/xhtml/vocab#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

/// Read-only view over [`KNOWN_PREFIXES`].
pub struct PrefixRegistry;

impl PrefixRegistry {
    /// Whether `prefix` is a registered vocabulary prefix (exact match).
    pub fn is_known(prefix: &str) -> bool {
        Self::namespace(prefix).is_some()
    }

    /// Namespace URI abbreviated by `prefix`.
    pub fn namespace(prefix: &str) -> Option<&'static str> {
        KNOWN_PREFIXES
            .binary_search_by(|(known, _)| (*known).cmp(prefix))
            .ok()
            .map(|idx| KNOWN_PREFIXES[idx].1)
    }

    /// Whether the part of `key` before its first `:` is a known prefix.
    ///
    /// A key without any `:` never matches, even if it equals a prefix.
    pub fn has_known_prefix(key: &str) -> bool {
        key.split_once(':')
            .is_some_and(|(prefix, _)| Self::is_known(prefix))
    }

    /// All registered `(prefix, namespace)` pairs in prefix order.
    pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        KNOWN_PREFIXES.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in KNOWN_PREFIXES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_known_prefixes() {
        assert!(PrefixRegistry::is_known("dcterms"));
        assert!(PrefixRegistry::is_known("schema"));
        assert!(PrefixRegistry::is_known("xsd"));
        assert!(!PrefixRegistry::is_known("madeup"));
        assert!(!PrefixRegistry::is_known("DCTERMS"));
        assert!(!PrefixRegistry::is_known(""));
    }

    #[test]
    fn test_namespace_lookup() {
        assert_eq!(
            PrefixRegistry::namespace("foaf"),
            Some("http://xmlns.com/foaf/0.1/")
        );
        assert_eq!(PrefixRegistry::namespace("http"), None);
    }

    #[test]
    fn test_has_known_prefix() {
        assert!(PrefixRegistry::has_known_prefix("dcterms:title"));
        assert!(PrefixRegistry::has_known_prefix("rdf:type:extra"));
        assert!(!PrefixRegistry::has_known_prefix("madeup:example"));
        assert!(!PrefixRegistry::has_known_prefix("dcterms"));
        assert!(!PrefixRegistry::has_known_prefix("http://example.org"));
    }
}
