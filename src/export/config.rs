//! Configuration for metadata output

use serde::{Deserialize, Serialize};

/// Configuration for [`MetadataWriter`](super::MetadataWriter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WriterConfig {
    /// Number of spaces per indentation level
    pub indent: usize,

    /// Terminate the document with a newline
    pub trailing_newline: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            trailing_newline: false,
        }
    }
}

impl WriterConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> WriterConfigBuilder {
        WriterConfigBuilder::default()
    }
}

/// Builder for WriterConfig
#[derive(Debug, Default)]
pub struct WriterConfigBuilder {
    config: WriterConfig,
}

impl WriterConfigBuilder {
    /// Set the indentation width in spaces
    pub fn indent(mut self, indent: usize) -> Self {
        self.config.indent = indent;
        self
    }

    /// Enable or disable the trailing newline
    pub fn trailing_newline(mut self, trailing: bool) -> Self {
        self.config.trailing_newline = trailing;
        self
    }

    /// Build the configuration
    pub fn build(self) -> WriterConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WriterConfig::default();
        assert_eq!(config.indent, 4);
        assert!(!config.trailing_newline);
    }

    #[test]
    fn test_builder() {
        let config = WriterConfig::builder()
            .indent(2)
            .trailing_newline(true)
            .build();
        assert_eq!(config.indent, 2);
        assert!(config.trailing_newline);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: WriterConfig = serde_json::from_str(r#"{"trailingNewline": true}"#).unwrap();
        assert_eq!(config.indent, 4);
        assert!(config.trailing_newline);
    }
}
