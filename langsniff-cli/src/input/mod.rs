//! Input resolution and reading.

use anyhow::{Context, Result};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Resolve file patterns to actual file paths.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths =
            glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoFilesFound.into());
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

/// Recursively collect every file under `root`, sorted for stable output.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let pattern = root.join("**").join("*");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Sample path is not valid UTF-8: {}", root.display()))?;

    let mut files = Vec::new();
    for path_result in glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.to_string()))? {
        let path = path_result.with_context(|| format!("Error walking {}", root.display()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Read a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
