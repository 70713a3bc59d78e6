//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use lingtag_core::Language;

pub mod detect;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the language of text files or stdin
    Detect(detect::DetectArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List detectable languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Detect(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                for lang in Language::supported() {
                    println!("{}\t{}", lang.tag(), lang.name());
                }
                println!("{}\t{}", Language::Unknown.tag(), "fallback when no determination is possible");
            }
            ListCommands::Formats => {
                println!("text\tOne source<TAB>tag record per line");
                println!("json\tJSON array of detection records");
            }
        }
        Ok(())
    }
}
