//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use langsniff_core::Language;

pub mod check;
pub mod detect;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the language of input files
    Detect(detect::DetectArgs),

    /// Run detection over a tree of language-labelled sample files
    Check(check::CheckArgs),

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
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Detect(args) => args.execute(),
            Commands::Check(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(self) {
        match self {
            ListCommands::Languages => {
                for language in Language::ALL {
                    println!("{} ({})", language, language.code());
                }
            }
            ListCommands::Formats => {
                println!("text");
                println!("json");
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()
            .ok();
    }
}
