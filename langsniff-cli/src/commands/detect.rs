//! Detect command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use langsniff_core::Detector;

use crate::error::CliError;
use crate::input;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
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
    /// One `path: language (score)` line per file
    Text,
    /// JSON array of detection records
    Json,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let files = input::resolve_patterns(&self.input)?;
        log::info!("Detecting language of {} file(s)", files.len());

        let mut formatter = self.formatter()?;
        let detector = Detector::new();
        let mut unreadable = 0usize;

        for path in &files {
            match input::read_text(path) {
                Ok(text) => {
                    let detection = detector.detect_with_score(&text);
                    log::debug!(
                        "{}: {} ({})",
                        path.display(),
                        detection.language,
                        detection.score
                    );
                    formatter.record(path, &detection)?;
                }
                Err(e) => {
                    log::error!("{e:#}");
                    unreadable += 1;
                }
            }
        }

        formatter.finish()?;

        if unreadable > 0 {
            return Err(CliError::UnreadableFiles(unreadable).into());
        }
        Ok(())
    }

    fn formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn io::Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }
}
