//! Property tests: detection must be total and deterministic.

use langsniff_core::{detect_with_score, Language, TokenScanner};
use proptest::prelude::*;

proptest! {
    #[test]
    fn detect_is_total_with_finite_scores(text in ".*") {
        let detection = detect_with_score(&text);
        prop_assert!(detection.score.is_finite());
        prop_assert!(!detection.score.is_nan());
        prop_assert!(Language::ALL.contains(&detection.language));
    }

    #[test]
    fn detect_is_idempotent(text in ".*") {
        prop_assert_eq!(detect_with_score(&text), detect_with_score(&text));
    }

    #[test]
    fn whitespace_only_input_is_unknown(text in "[ \\t\\r\\n]{0,64}") {
        let detection = detect_with_score(&text);
        prop_assert_eq!(detection.language, Language::Unknown);
        prop_assert_eq!(detection.score, 0.0);
    }

    #[test]
    fn unknown_results_always_score_zero(text in ".*") {
        let detection = detect_with_score(&text);
        if detection.language == Language::Unknown {
            prop_assert_eq!(detection.score, 0.0);
        }
    }

    #[test]
    fn scanner_tokens_are_nonempty_and_clean(text in ".*") {
        for token in TokenScanner::new(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
            prop_assert!(!token.chars().any(|c| matches!(c, '>' | '(' | '[' | '{' | '=')), "token must not contain separator characters");
        }
    }

    #[test]
    fn scanner_consumes_input_in_order(text in ".*") {
        let mut last_end = 0;
        for token in TokenScanner::new(&text) {
            let offset = token.as_ptr() as usize - text.as_ptr() as usize;
            prop_assert!(offset >= last_end);
            last_end = offset + token.len();
        }
        prop_assert!(last_end <= text.len());
    }
}
