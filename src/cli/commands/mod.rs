//! CLI command handlers

pub mod init;
pub mod normalize;
pub mod prefixes;
pub mod validate;

use crate::cli::error::CliError;
use crate::export::{MetadataWriter, WriterConfig};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Load input content from file or stdin (`-`)
pub(crate) fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Load writer settings from a TOML file, or the defaults when none is given.
///
/// ```toml
/// indent = 2
/// trailingNewline = true
/// ```
pub fn load_writer_config(path: Option<&Path>) -> Result<WriterConfig, CliError> {
    let Some(path) = path else {
        return Ok(WriterConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    toml::from_str(&content).map_err(|e| CliError::ConfigError(e.to_string()))
}

/// Render a document to `output`, or to stdout when no path is given.
pub(crate) fn emit<T: Serialize + ?Sized>(
    document: &T,
    config: WriterConfig,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let writer = MetadataWriter::new(config);
    match output {
        Some(path) => writer
            .write(document, path)
            .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string())),
        None => {
            let rendered = writer.to_string(document)?;
            println!("{}", rendered);
            Ok(())
        }
    }
}
