//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for sample checking
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a reporter for `total_files` files; hidden when `quiet`.
    pub fn new(total_files: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total_files);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
                    .unwrap()
                    .progress_chars("##-"),
            );
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };

        Self { bar }
    }

    /// Advance past one checked file
    pub fn file_checked(&self, filename: &str) {
        self.bar.set_message(format!("Checked: {filename}"));
        self.bar.inc(1);
    }

    /// Print a line without tearing the progress bar
    pub fn note(&self, message: &str) {
        if self.bar.is_hidden() {
            println!("{message}");
        } else {
            self.bar.println(message);
        }
    }

    /// Clear the bar once all files are checked
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
