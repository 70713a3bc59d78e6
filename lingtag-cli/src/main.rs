//! lingtag command-line entry point

use clap::Parser;
use lingtag_cli::commands::Commands;

/// Heuristic language detection for Indonesian, English, and Japanese text
#[derive(Debug, Parser)]
#[command(name = "lingtag", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = cli.command.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
