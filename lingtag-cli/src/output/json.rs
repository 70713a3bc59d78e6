//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use lingtag_core::Language;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs detection records as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<DetectionRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// Where the text came from (file path or "-" for stdin)
    pub source: String,
    /// The detected wire tag
    pub tag: String,
    /// Full language name
    pub language: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, source: &str, language: Language) -> Result<()> {
        self.records.push(DetectionRecord {
            source: source.to_string(),
            tag: language.tag().to_string(),
            language: language.name().to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
