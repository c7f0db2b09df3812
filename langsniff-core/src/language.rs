//! The closed set of detectable languages.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Languages the detector can report.
///
/// The set is fixed at build time; adding a language means adding a variant
/// here plus entries in the hint table. Declaration order is significant:
/// when two languages finish a scan with equal scores, the reduction keeps
/// the one declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// No evidence either way; also the fallback when scoring is inconclusive.
    #[default]
    Unknown,

    /// Windows batch scripts
    Batch,
    /// C
    C,
    /// C++
    CPlusPlus,
    /// C#
    CSharp,
    /// CSS stylesheets
    Css,
    /// F#
    FSharp,
    /// Go
    Go,
    /// HTML markup
    Html,
    /// Java
    Java,
    /// JavaScript
    JavaScript,
    /// JSON documents
    Json,
    /// Markdown text
    Markdown,
    /// PowerShell scripts
    PowerShell,
    /// Python
    Python,
    /// Rust
    Rust,
    /// SQL statements
    Sql,
    /// TypeScript
    TypeScript,
    /// Visual Basic
    VisualBasic,
    /// XML markup
    Xml,
}

impl Language {
    /// Every language, in declaration order. This is the tie-break order
    /// used when reducing a score tally.
    pub const ALL: [Language; 20] = [
        Language::Unknown,
        Language::Batch,
        Language::C,
        Language::CPlusPlus,
        Language::CSharp,
        Language::Css,
        Language::FSharp,
        Language::Go,
        Language::Html,
        Language::Java,
        Language::JavaScript,
        Language::Json,
        Language::Markdown,
        Language::PowerShell,
        Language::Python,
        Language::Rust,
        Language::Sql,
        Language::TypeScript,
        Language::VisualBasic,
        Language::Xml,
    ];

    /// Stable lowercase identifier, usable in file names and CLI arguments.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Unknown => "unknown",
            Language::Batch => "batch",
            Language::C => "c",
            Language::CPlusPlus => "cpp",
            Language::CSharp => "csharp",
            Language::Css => "css",
            Language::FSharp => "fsharp",
            Language::Go => "go",
            Language::Html => "html",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::PowerShell => "powershell",
            Language::Python => "python",
            Language::Rust => "rust",
            Language::Sql => "sql",
            Language::TypeScript => "typescript",
            Language::VisualBasic => "visualbasic",
            Language::Xml => "xml",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Unknown => "Unknown",
            Language::Batch => "Batch",
            Language::C => "C",
            Language::CPlusPlus => "C++",
            Language::CSharp => "C#",
            Language::Css => "CSS",
            Language::FSharp => "F#",
            Language::Go => "Go",
            Language::Html => "HTML",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Json => "JSON",
            Language::Markdown => "Markdown",
            Language::PowerShell => "PowerShell",
            Language::Python => "Python",
            Language::Rust => "Rust",
            Language::Sql => "SQL",
            Language::TypeScript => "TypeScript",
            Language::VisualBasic => "VisualBasic",
            Language::Xml => "XML",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a known language.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized language name '{0}'")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    /// Parses case-insensitively, accepting the enum spelling, the display
    /// name, and the short code (`"CSharp"`, `"c#"`, and `"csharp"` all
    /// name the same language).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(Language::Unknown),
            "batch" | "bat" | "cmd" => Ok(Language::Batch),
            "c" => Ok(Language::C),
            "cplusplus" | "c++" | "cpp" => Ok(Language::CPlusPlus),
            "csharp" | "c#" | "cs" => Ok(Language::CSharp),
            "css" => Ok(Language::Css),
            "fsharp" | "f#" | "fs" => Ok(Language::FSharp),
            "go" | "golang" => Ok(Language::Go),
            "html" => Ok(Language::Html),
            "java" => Ok(Language::Java),
            "javascript" | "js" => Ok(Language::JavaScript),
            "json" => Ok(Language::Json),
            "markdown" | "md" => Ok(Language::Markdown),
            "powershell" | "ps1" => Ok(Language::PowerShell),
            "python" | "py" => Ok(Language::Python),
            "rust" | "rs" => Ok(Language::Rust),
            "sql" => Ok(Language::Sql),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "visualbasic" | "vb" => Ok(Language::VisualBasic),
            "xml" => Ok(Language::Xml),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order_and_complete() {
        assert_eq!(Language::ALL.len(), 20);
        assert_eq!(Language::ALL[0], Language::Unknown);
        assert_eq!(Language::ALL[3], Language::CPlusPlus);
        assert_eq!(Language::ALL[19], Language::Xml);
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Language::ALL.len());
    }

    #[test]
    fn parse_accepts_name_and_code() {
        assert_eq!("CSharp".parse::<Language>().unwrap(), Language::CSharp);
        assert_eq!("c#".parse::<Language>().unwrap(), Language::CSharp);
        assert_eq!("CPLUSPLUS".parse::<Language>().unwrap(), Language::CPlusPlus);
        assert_eq!("powershell".parse::<Language>().unwrap(), Language::PowerShell);
        assert_eq!("Markdown".parse::<Language>().unwrap(), Language::Markdown);
    }

    #[test]
    fn parse_round_trips_every_code() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized language name 'klingon'");
    }

    #[test]
    fn display_uses_human_name() {
        assert_eq!(Language::CPlusPlus.to_string(), "C++");
        assert_eq!(Language::CSharp.to_string(), "C#");
        assert_eq!(Language::JavaScript.to_string(), "JavaScript");
    }
}
