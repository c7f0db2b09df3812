//! Weighted token-to-language associations.

use crate::language::Language;

/// A single piece of evidence tying a table token to a candidate language.
///
/// Hints are immutable once built; the table holds them for the lifetime of
/// the process.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LanguageHint {
    /// The language this hint argues for.
    pub language: Language,
    /// Evidence weight added to the tally. Negative weights subtract
    /// evidence (e.g. `<html` counts against generic XML).
    pub weight: f64,
    /// When set, the raw token must equal this spelling for the hint to
    /// apply. Table keys match case-insensitively; this re-checks case for
    /// tokens like `String` that are only meaningful in one casing.
    pub exact_match: Option<&'static str>,
    /// A decisive hint ends detection the moment its token is seen, with
    /// its own language and weight as the final result.
    pub decisive: bool,
}

impl LanguageHint {
    /// Hint with the default weight of 1.0.
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            weight: 1.0,
            exact_match: None,
            decisive: false,
        }
    }

    /// Hint with an explicit weight.
    pub const fn weighted(language: Language, weight: f64) -> Self {
        Self {
            language,
            weight,
            exact_match: None,
            decisive: false,
        }
    }

    /// Weight-1.0 hint that only applies when the raw token equals
    /// `spelling` exactly.
    pub const fn exact(language: Language, spelling: &'static str) -> Self {
        Self {
            language,
            weight: 1.0,
            exact_match: Some(spelling),
            decisive: false,
        }
    }

    /// Weight-1.0 hint that terminates detection on sight.
    pub const fn decisive(language: Language) -> Self {
        Self {
            language,
            weight: 1.0,
            exact_match: None,
            decisive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let hint = LanguageHint::new(Language::Rust);
        assert_eq!(hint.language, Language::Rust);
        assert_eq!(hint.weight, 1.0);
        assert_eq!(hint.exact_match, None);
        assert!(!hint.decisive);
    }

    #[test]
    fn weighted_allows_negative_weights() {
        let hint = LanguageHint::weighted(Language::Xml, -0.5);
        assert_eq!(hint.weight, -0.5);
        assert!(!hint.decisive);
    }

    #[test]
    fn exact_carries_spelling() {
        let hint = LanguageHint::exact(Language::Java, "String");
        assert_eq!(hint.exact_match, Some("String"));
        assert_eq!(hint.weight, 1.0);
    }

    #[test]
    fn decisive_is_flagged() {
        let hint = LanguageHint::decisive(Language::Xml);
        assert!(hint.decisive);
        assert_eq!(hint.weight, 1.0);
    }
}
