//! Entry point for the langsniff binary.

use anyhow::Result;
use clap::Parser;
use langsniff_cli::commands::Commands;

/// Heuristic programming language detection for text snippets and files.
#[derive(Debug, Parser)]
#[command(name = "langsniff", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
