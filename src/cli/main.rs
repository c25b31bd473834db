//! csvw-metadata - command-line front end for CSVW metadata documents

use anyhow::Result;
use clap::{Parser, Subcommand};
use csvw_metadata::cli::commands::{init, normalize, prefixes, validate};
use std::path::PathBuf;

/// Build, validate and normalize CSV on the Web metadata documents
#[derive(Parser, Debug)]
#[command(name = "csvw-metadata")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a metadata document and check its column references
    Validate {
        /// Input file, or `-` for stdin
        input: String,
    },

    /// Rewrite a metadata document with canonical keys and indentation
    Normalize {
        /// Input file, or `-` for stdin
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML file with writer settings (indent, trailingNewline)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Emit a skeleton table description
    Init {
        /// URL of the CSV file
        #[arg(long)]
        url: String,

        /// Column name; repeat for several columns
        #[arg(long = "column", value_name = "NAME")]
        columns: Vec<String>,

        /// Base URL for the context
        #[arg(long)]
        base: Option<String>,

        /// Default language for the context
        #[arg(long)]
        language: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML file with writer settings (indent, trailingNewline)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the known vocabulary prefixes
    Prefixes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { input } => validate::handle_validate(&input)?,
        Command::Normalize {
            input,
            output,
            config,
        } => normalize::handle_normalize(&normalize::NormalizeArgs {
            input,
            output,
            config,
        })?,
        Command::Init {
            url,
            columns,
            base,
            language,
            output,
            config,
        } => init::handle_init(&init::InitArgs {
            url,
            columns,
            base,
            language,
            output,
            config,
        })?,
        Command::Prefixes => prefixes::handle_prefixes(),
    }

    Ok(())
}
