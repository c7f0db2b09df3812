//! Heuristic programming-language detection for text snippets
//!
//! Scans input token by token, accumulating weighted evidence toward a
//! closed set of candidate languages, and reports the best guess with a
//! confidence score. This is a lightweight classifier for routing or
//! highlighting pasted snippets, not a parser: no grammar is validated and
//! no answer is guaranteed correct.
//!
//! ```
//! use langsniff_core::{detect, detect_with_score, Language};
//!
//! assert_eq!(detect("$true"), Language::PowerShell);
//!
//! let detection = detect_with_score("fn main() { let mut x = 1; }");
//! assert_eq!(detection.language, Language::Rust);
//! assert!(detection.score > 0.0);
//! ```
//!
//! Detection is total: any string, including empty, whitespace-only, or
//! binary-ish text, returns a value, falling back to
//! [`Language::Unknown`] with a zero score when no evidence accumulates.

#![warn(missing_docs)]

pub mod hint;
pub mod language;
pub mod observer;
mod scanner;
mod score;
pub mod table;

pub use hint::LanguageHint;
pub use language::{Language, ParseLanguageError};
pub use observer::{TokenObserver, TracingObserver};
pub use scanner::TokenScanner;
pub use table::{hint_table, HintTable};

use score::{ScoreTally, TokenOutcome};

/// A detection outcome: the winning language and its accumulated score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    /// The best-scoring language, or [`Language::Unknown`] when no token
    /// contributed positive evidence.
    pub language: Language,
    /// Accumulated evidence for that language. Zero when `language` is
    /// Unknown; the matched hint's own weight after a decisive exit.
    pub score: f64,
}

/// Stateless detection engine.
///
/// Holds no state across calls beyond an optional token observer, so one
/// detector can serve concurrent callers; the hint table it consults is
/// process-wide and immutable.
#[derive(Default)]
pub struct Detector {
    observer: Option<Box<dyn TokenObserver>>,
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field(
                "observer",
                &self.observer.as_ref().map(|_| "<dyn TokenObserver>"),
            )
            .finish()
    }
}

impl Detector {
    /// Detector with no observer attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Detector that reports every scanned token to `observer`.
    pub fn with_observer(observer: Box<dyn TokenObserver>) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    /// Detect the language of `text`, discarding the score.
    pub fn detect(&self, text: &str) -> Language {
        self.detect_with_score(text).language
    }

    /// Detect the language of `text` with its confidence score.
    ///
    /// Empty input returns `(Unknown, 0.0)` without scanning. A decisive
    /// hint ends the call immediately with that hint's language and
    /// weight, discarding the tally and any remaining input.
    pub fn detect_with_score(&self, text: &str) -> Detection {
        if text.is_empty() {
            return Detection::default();
        }

        let mut tally = ScoreTally::default();
        for token in TokenScanner::new(text) {
            if let Some(observer) = &self.observer {
                observer.token(token);
            }
            match tally.score_token(token) {
                TokenOutcome::Decisive(detection) => return detection,
                TokenOutcome::Scored => {}
            }
        }
        tally.into_best()
    }
}

/// Detect the language of `text`, discarding the score.
pub fn detect(text: &str) -> Language {
    Detector::new().detect(text)
}

/// Detect the language of `text` with its confidence score.
pub fn detect_with_score(text: &str) -> Detection {
    Detector::new().detect_with_score(text)
}
