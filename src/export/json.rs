//! JSON writer for metadata documents

use super::{ExportResult, WriterConfig};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes metadata nodes as ordered, indented JSON.
///
/// Property order is insertion order at every level, so rendering an
/// unchanged node twice yields identical bytes.
#[derive(Debug, Clone, Default)]
pub struct MetadataWriter {
    config: WriterConfig,
}

impl MetadataWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Render `node` into a string.
    pub fn to_string<T: Serialize + ?Sized>(&self, node: &T) -> ExportResult<String> {
        let mut buffer = Vec::new();
        self.write_to(node, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    /// Render `node` into any writer.
    ///
    /// The document is rendered in full before anything is written, so a
    /// serialization failure leaves the writer untouched.
    pub fn write_to<T: Serialize + ?Sized, W: Write>(&self, node: &T, mut writer: W) -> ExportResult<()> {
        let indent = " ".repeat(self.config.indent);
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        node.serialize(&mut serializer)?;
        if self.config.trailing_newline {
            buffer.push(b'\n');
        }
        writer.write_all(&buffer)?;
        writer.flush()?;
        Ok(())
    }

    /// Render `node` into the file at `path`, replacing its contents.
    pub fn write<T: Serialize + ?Sized>(&self, node: &T, path: impl AsRef<Path>) -> ExportResult<()> {
        let path = path.as_ref();
        let rendered = self.to_string(node)?;
        let mut file = BufWriter::new(File::create(path)?);
        file.write_all(rendered.as_bytes())?;
        file.flush()?;
        info!("Wrote metadata document to {}", path.display());
        Ok(())
    }
}
