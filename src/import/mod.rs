//! Import functionality
//!
//! Reads CSVW metadata documents back into validated nodes. Every property
//! goes through the same checked write path as programmatic construction,
//! in document order.

pub mod json;

pub use json::{MetadataDocument, parse_document, parse_value};

use crate::validation::ValidationError;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Unsupported document: {0}")]
    UnsupportedDocument(String),
}

pub type ImportResult<T> = Result<T, ImportError>;
