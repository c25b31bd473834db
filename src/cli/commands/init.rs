//! Init command implementation

use super::{emit, load_writer_config};
use crate::cli::error::CliError;
use crate::models::{Column, Table, TopLevel};
use std::path::PathBuf;

/// Arguments for the `init` command
pub struct InitArgs {
    /// URL of the CSV file the table describes
    pub url: String,
    /// Column names, in order
    pub columns: Vec<String>,
    /// Base URL for the context
    pub base: Option<String>,
    /// Default language for the context
    pub language: Option<String>,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// TOML file with writer settings
    pub config: Option<PathBuf>,
}

/// Build the skeleton table described by `args`.
pub fn build_skeleton(args: &InitArgs) -> Result<Table, CliError> {
    if args.url.is_empty() {
        return Err(CliError::InvalidArgument("--url must not be empty".to_string()));
    }
    let mut table = Table::new(args.url.as_str());
    table.add_context(args.base.as_deref(), args.language.as_deref())?;
    for name in &args.columns {
        table.add_column(Column::new(name.as_str())?)?;
    }
    Ok(table)
}

/// Handle the init command
pub fn handle_init(args: &InitArgs) -> Result<(), CliError> {
    let config = load_writer_config(args.config.as_deref())?;
    let table = build_skeleton(args)?;
    emit(&table, config, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use serde_json::json;

    fn args(columns: &[&str]) -> InitArgs {
        InitArgs {
            url: "hello.csv".to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            base: Some("http://example.org".to_string()),
            language: None,
            output: None,
            config: None,
        }
    }

    #[test]
    fn test_skeleton() {
        let table = build_skeleton(&args(&["example", "region"])).unwrap();
        assert_eq!(
            crate::models::MetadataNode::to_json(&table),
            json!({
                "url": "hello.csv",
                "@context": ["http://www.w3.org/ns/csvw", {"@base": "http://example.org"}],
                "tableSchema": {"columns": [{"name": "example"}, {"name": "region"}]}
            })
        );
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let err = build_skeleton(&args(&["region", "region"])).unwrap_err();
        assert!(matches!(
            err,
            CliError::ValidationError(ValidationError::DuplicateName { .. })
        ));
    }
}
