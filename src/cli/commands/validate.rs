//! Validate command implementation

use super::load_input;
use crate::cli::error::CliError;
use crate::import::{MetadataDocument, parse_document};

/// Parse and check a metadata document without writing anything.
pub fn validate_document(content: &str) -> Result<MetadataDocument, CliError> {
    let document = parse_document(content)?;
    document.check_references()?;
    Ok(document)
}

/// Handle the validate command
pub fn handle_validate(input: &str) -> Result<(), CliError> {
    let content = load_input(input)?;
    let document = validate_document(&content)?;
    println!("Validation successful ({})", document.kind());
    Ok(())
}
