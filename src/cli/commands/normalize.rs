//! Normalize command implementation

use super::{emit, load_input, load_writer_config};
use crate::cli::error::CliError;
use crate::import::parse_document;
use std::path::PathBuf;

/// Arguments for the `normalize` command
pub struct NormalizeArgs {
    /// Input file, or `-` for stdin
    pub input: String,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// TOML file with writer settings
    pub config: Option<PathBuf>,
}

/// Handle the normalize command
///
/// Reads a document, resolves every key to its canonical form and writes
/// it back with the configured indentation.
pub fn handle_normalize(args: &NormalizeArgs) -> Result<(), CliError> {
    let config = load_writer_config(args.config.as_deref())?;
    let content = load_input(&args.input)?;
    let document = parse_document(&content)?;
    emit(&document, config, args.output.as_deref())?;
    if let Some(path) = &args.output {
        eprintln!("Normalized {} written to {}", document.kind(), path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_to_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.json");
        let output = dir.path().join("out.json");
        std::fs::write(&input, r#"{"url":"a.csv","id":"x","dcterms:title":"A"}"#).unwrap();

        handle_normalize(&NormalizeArgs {
            input: input.display().to_string(),
            output: Some(output.clone()),
            config: None,
        })
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "{\n    \"url\": \"a.csv\",\n    \"@id\": \"x\",\n    \"dcterms:title\": \"A\"\n}"
        );
    }

    #[test]
    fn test_missing_input() {
        let err = handle_normalize(&NormalizeArgs {
            input: "/nonexistent/metadata.json".to_string(),
            output: None,
            config: None,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::FileReadError(_, _)));
    }
}
