//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use langsniff_core::Detection;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// JSON formatter - outputs detection results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<DetectionRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// The input file path
    pub path: String,
    /// Detected language name
    pub language: String,
    /// Stable lowercase language code
    pub code: String,
    /// Accumulated confidence score
    pub score: f64,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn record(&mut self, path: &Path, detection: &Detection) -> Result<()> {
        self.records.push(DetectionRecord {
            path: path.display().to_string(),
            language: detection.language.to_string(),
            code: detection.language.code().to_string(),
            score: detection.score,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
