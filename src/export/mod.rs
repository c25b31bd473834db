//! Export functionality
//!
//! Renders metadata nodes as CSVW JSON documents:
//! - [`MetadataWriter`]: ordered, indented JSON to a string, writer or file
//! - [`WriterConfig`]: indentation and trailing newline settings

pub mod config;
pub mod json;

pub use config::{WriterConfig, WriterConfigBuilder};
pub use json::MetadataWriter;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
