//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use langsniff_core::Detection;
use std::io::{self, Write};
use std::path::Path;

/// Plain text formatter - one `path: language (score)` line per file
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
    fn record(&mut self, path: &Path, detection: &Detection) -> Result<()> {
        writeln!(
            self.writer,
            "{}: {} ({})",
            path.display(),
            detection.language,
            detection.score
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
