//! Prefixes command implementation

use crate::validation::PrefixRegistry;

/// Render the known prefixes as aligned `prefix  namespace` lines.
pub fn format_prefixes() -> String {
    let width = PrefixRegistry::entries()
        .map(|(prefix, _)| prefix.len())
        .max()
        .unwrap_or(0);
    PrefixRegistry::entries()
        .map(|(prefix, namespace)| format!("{:<width$}  {}", prefix, namespace, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handle the prefixes command
pub fn handle_prefixes() {
    println!("{}", format_prefixes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::KNOWN_PREFIXES;

    #[test]
    fn test_lists_every_prefix() {
        let listing = format_prefixes();
        assert_eq!(listing.lines().count(), KNOWN_PREFIXES.len());
        assert_eq!(PrefixRegistry::entries().count(), KNOWN_PREFIXES.len());
        assert!(
            listing
                .lines()
                .any(|l| l.starts_with("dcterms ") && l.ends_with("http://purl.org/dc/terms/"))
        );
    }

    #[test]
    fn test_namespaces_are_aligned() {
        let listing = format_prefixes();
        let columns: Vec<usize> = listing
            .lines()
            .map(|l| l.find("http").unwrap_or(0))
            .collect();
        assert!(columns.windows(2).all(|w| w[0] == w[1]));
    }
}
