//! Output formatting module

use anyhow::Result;
use lingtag_core::Language;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single detection record
    fn format_record(&mut self, source: &str, language: Language) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
