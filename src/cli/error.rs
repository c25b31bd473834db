//! CLI error type

use crate::export::ExportError;
use crate::import::ImportError;
use crate::validation::ValidationError;
use std::path::PathBuf;

/// Errors reported by CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),
    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
    #[error(transparent)]
    ImportError(#[from] ImportError),
    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationError),
    #[error(transparent)]
    ExportError(#[from] ExportError),
}
