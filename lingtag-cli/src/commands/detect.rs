//! Detect command implementation

use anyhow::{Context, Result};
use clap::Args;
use lingtag_core::{classify, Language};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One source<TAB>tag record per line
    Text,
    /// JSON array of detection records
    Json,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting language detection");
        log::debug!("Arguments: {:?}", self);

        let records = self.collect_records()?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for (source, language) in &records {
            formatter.format_record(source, *language)?;
        }
        formatter.finish()?;

        log::info!("Classified {} input(s)", records.len());
        Ok(())
    }

    /// Classify every input, reading stdin when no inputs were given
    fn collect_records(&self) -> Result<Vec<(String, Language)>> {
        if self.input.is_empty() {
            let text = FileReader::read_stdin()?;
            let language = classify(&text);
            log::debug!("stdin classified as {}", language.tag());
            return Ok(vec![("-".to_string(), language)]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Resolved {} file(s)", files.len());

        let mut records = Vec::with_capacity(files.len());
        for path in files {
            let text = FileReader::read_text(&path)?;
            let language = classify(&text);
            log::debug!("{} classified as {}", path.display(), language.tag());
            records.push((path.display().to_string(), language));
        }

        Ok(records)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(inputs: Vec<String>) -> DetectArgs {
        DetectArgs {
            input: inputs,
            output: None,
            format: OutputFormat::Text,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn collects_records_for_files() {
        let temp_dir = TempDir::new().unwrap();
        let id_path = temp_dir.path().join("id.txt");
        let en_path = temp_dir.path().join("en.txt");
        fs::write(&id_path, "yang dan di ini itu").unwrap();
        fs::write(&en_path, "the and is in of").unwrap();

        let pattern = temp_dir.path().join("*.txt").to_string_lossy().to_string();
        let args = args_for(vec![pattern]);

        let records = args.collect_records().unwrap();
        assert_eq!(records.len(), 2);

        let tags: Vec<_> = records
            .iter()
            .map(|(source, lang)| (source.as_str(), lang.tag()))
            .collect();
        assert!(tags.iter().any(|(s, t)| s.ends_with("id.txt") && *t == "id"));
        assert!(tags.iter().any(|(s, t)| s.ends_with("en.txt") && *t == "en"));
    }

    #[test]
    fn missing_inputs_are_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = temp_dir
            .path()
            .join("*.missing")
            .to_string_lossy()
            .to_string();
        let args = args_for(vec![pattern]);

        assert!(args.collect_records().is_err());
    }

    #[test]
    fn executes_with_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("jp.txt");
        let output_path = temp_dir.path().join("out.txt");
        fs::write(&input_path, "これは日本語です").unwrap();

        let args = DetectArgs {
            input: vec![input_path.to_string_lossy().to_string()],
            output: Some(output_path.clone()),
            format: OutputFormat::Text,
            quiet: true,
            verbose: 0,
        };
        args.execute().unwrap();

        let output = fs::read_to_string(&output_path).unwrap();
        assert!(output.trim().ends_with("\tjp"));
    }

    #[test]
    fn json_output_is_parseable() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("mixed.txt");
        let output_path = temp_dir.path().join("out.json");
        fs::write(&input_path, "yang the dan is").unwrap();

        let args = DetectArgs {
            input: vec![input_path.to_string_lossy().to_string()],
            output: Some(output_path.clone()),
            format: OutputFormat::Json,
            quiet: true,
            verbose: 0,
        };
        args.execute().unwrap();

        let output = fs::read_to_string(&output_path).unwrap();
        let records: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(records[0]["tag"], "unknown");
    }
}
