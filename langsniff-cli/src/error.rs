//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input files matched the given patterns
    NoFilesFound,
    /// Invalid file pattern
    InvalidPattern(String),
    /// Sample directory name does not label a known language
    UnknownLabel(String),
    /// One or more sample files were misdetected
    MismatchesFound(usize),
    /// One or more input files could not be read
    UnreadableFiles(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoFilesFound => write!(f, "No files found matching the provided patterns"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::UnknownLabel(name) => {
                write!(f, "Directory '{name}' does not name a known language")
            }
            CliError::MismatchesFound(count) => write!(f, "Detection mismatches: {count}"),
            CliError::UnreadableFiles(count) => {
                write!(f, "{count} file(s) could not be read")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_files_found_display() {
        assert_eq!(
            CliError::NoFilesFound.to_string(),
            "No files found matching the provided patterns"
        );
    }

    #[test]
    fn invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn unknown_label_display() {
        let error = CliError::UnknownLabel("Klingon".to_string());
        assert_eq!(
            error.to_string(),
            "Directory 'Klingon' does not name a known language"
        );
    }

    #[test]
    fn mismatches_found_display() {
        let error = CliError::MismatchesFound(3);
        assert_eq!(error.to_string(), "Detection mismatches: 3");
    }

    #[test]
    fn error_trait_implementation() {
        let error = CliError::UnreadableFiles(1);
        let _: &dyn std::error::Error = &error;
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("UnreadableFiles"));
    }
}
