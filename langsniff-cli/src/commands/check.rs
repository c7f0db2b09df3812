//! Check command: validate detection against a labelled sample tree
//!
//! Samples are organized as `<root>/<Language>/...`; every file is detected
//! and compared against the language its parent directory names.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use langsniff_core::{Detector, Language};

use crate::error::CliError;
use crate::input;
use crate::progress::ProgressReporter;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Root directory of language-labelled samples
    #[arg(short, long, value_name = "DIR", default_value = "samples")]
    pub samples: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Default)]
struct CheckSummary {
    passed: usize,
    failed: usize,
    skipped: usize,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let files = input::collect_files(&self.samples)?;
        if files.is_empty() {
            return Err(CliError::NoFilesFound.into());
        }

        let detector = Detector::new();
        let progress = ProgressReporter::new(files.len() as u64, self.quiet);

        let mut summary = CheckSummary::default();
        for path in &files {
            self.check_file(&detector, path, &progress, &mut summary);
            progress.file_checked(&path.display().to_string());
        }
        progress.finish();

        println!(
            "{} passed, {} failed, {} skipped",
            summary.passed, summary.failed, summary.skipped
        );

        if summary.failed > 0 {
            return Err(CliError::MismatchesFound(summary.failed).into());
        }
        Ok(())
    }

    fn check_file(
        &self,
        detector: &Detector,
        path: &Path,
        progress: &ProgressReporter,
        summary: &mut CheckSummary,
    ) {
        let Some(expected) = expected_language(path) else {
            log::warn!(
                "skipping {}: {}",
                path.display(),
                CliError::UnknownLabel(parent_name(path).to_string())
            );
            summary.skipped += 1;
            return;
        };

        let text = match input::read_text(path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("skipping {}: {e:#}", path.display());
                summary.skipped += 1;
                return;
            }
        };

        let detection = detector.detect_with_score(&text);
        if detection.language == expected {
            summary.passed += 1;
        } else {
            summary.failed += 1;
            progress.note(&format!(
                "FAIL {}: expected {}, detected {} ({})",
                path.display(),
                expected,
                detection.language,
                detection.score
            ));
        }
    }
}

fn parent_name(path: &Path) -> &str {
    path.parent()
        .and_then(Path::file_name)
        .and_then(|n| n.to_str())
        .unwrap_or("")
}

/// The language a sample file is labelled with: its parent directory name.
fn expected_language(path: &Path) -> Option<Language> {
    parent_name(path).parse().ok()
}
