//! Per-token scoring rules and the per-call tally.

use std::collections::HashMap;

use crate::language::Language;
use crate::table::hint_table;
use crate::Detection;

/// What scoring one token decided.
///
/// The decisive short-circuit is carried in the type so the scan loop can
/// surface it without burying an early return in nested rule code.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenOutcome {
    /// Evidence (possibly none) was accumulated; keep scanning.
    Scored,
    /// A decisive hint matched; this is the final result for the whole call.
    Decisive(Detection),
}

/// Per-call accumulator mapping languages to running scores.
///
/// Entries exist only for languages that received at least one
/// contribution and are never removed, though negative hint weights can
/// lower them.
#[derive(Debug, Default)]
pub(crate) struct ScoreTally {
    scores: HashMap<Language, f64>,
}

impl ScoreTally {
    fn add(&mut self, language: Language, weight: f64) {
        *self.scores.entry(language).or_insert(0.0) += weight;
    }

    /// Applies the structural rules and the table hints for one token.
    ///
    /// Rules are not mutually exclusive; a single token may contribute
    /// through several of them before the table is even consulted.
    pub(crate) fn score_token(&mut self, token: &str) -> TokenOutcome {
        self.apply_structural_rules(token);

        if let Some(hints) = hint_table().hints(token) {
            for hint in hints {
                if hint.decisive {
                    return TokenOutcome::Decisive(Detection {
                        language: hint.language,
                        score: hint.weight,
                    });
                }
                if let Some(spelling) = hint.exact_match {
                    if token != spelling {
                        continue;
                    }
                }
                self.add(hint.language, hint.weight);
            }
        }

        TokenOutcome::Scored
    }

    fn apply_structural_rules(&mut self, token: &str) {
        if token.len() > 1 && token.starts_with('<') {
            if token.chars().skip(2).any(|c| c == ':') {
                // Namespaced tag, e.g. `<ns:tag`.
                self.add(Language::Xml, 0.6);
            } else {
                self.add(Language::Xml, 0.5);
                // Unprefixed tags are easier to confirm as HTML than XML.
                self.add(Language::Html, 0.2);
            }
        }

        if token.len() > 2 && token.starts_with('"') && token.ends_with('"') {
            self.add(Language::Json, 0.1);
        }

        if token.len() > 4 && token.starts_with("**") && token.ends_with("**") {
            self.add(Language::Markdown, 0.1);
        }
    }

    /// Reduces the tally to the single best detection.
    ///
    /// Walks languages in declaration order keeping the strictly greater
    /// maximum, starting from `(Unknown, 0.0)`: an empty tally or one whose
    /// entries are all non-positive reduces to Unknown, and equal maxima
    /// resolve to the earliest-declared language.
    pub(crate) fn into_best(self) -> Detection {
        let mut best = Detection::default();
        for language in Language::ALL {
            if let Some(&score) = self.scores.get(&language) {
                if score > best.score {
                    best = Detection { language, score };
                }
            }
        }
        best
    }
}
