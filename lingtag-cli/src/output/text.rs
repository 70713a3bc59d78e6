//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use lingtag_core::Language;
use std::io::{self, Write};

/// Plain text formatter - outputs one `source<TAB>tag` record per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, source: &str, language: Language) -> Result<()> {
        writeln!(self.writer, "{}\t{}", source, language.tag())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
