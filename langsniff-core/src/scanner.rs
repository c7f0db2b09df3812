//! Whitespace-and-delimiter tokenization.

/// Characters that end a token and are then dropped. `:` is deliberately
/// absent so CSS-style `margin:` tokens survive intact.
const DELIMITERS: [char; 5] = ['>', '(', '[', '{', '='];

pub(crate) fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Single-pass token iterator over borrowed input.
///
/// Yields maximal runs of non-whitespace, non-delimiter characters as
/// zero-copy slices, in index order. Delimiters bound tokens and are
/// silently consumed; they are never emitted on their own and never
/// appended to a token, so every yielded token is non-empty. A scanner is
/// not restartable: start a fresh one per detection.
#[derive(Debug)]
pub struct TokenScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TokenScanner<'a> {
    /// Scanner positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }
}

impl<'a> Iterator for TokenScanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            self.skip_whitespace();
            self.peek()?;

            let start = self.pos;
            while let Some(c) = self.peek() {
                if c.is_whitespace() || is_delimiter(c) {
                    break;
                }
                self.pos += c.len_utf8();
            }

            if self.pos == start {
                // Cursor is resting on a delimiter: drop it and rescan.
                self.pos += self.peek().map_or(0, char::len_utf8);
                continue;
            }

            return Some(&self.text[start..self.pos]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<&str> {
        TokenScanner::new(text).collect()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokens("def run: pass"), vec!["def", "run:", "pass"]);
        assert_eq!(tokens("  a \t b\nc  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_and_whitespace_only_yield_nothing() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \t\n  ").is_empty());
    }

    #[test]
    fn delimiters_bound_tokens_and_disappear() {
        assert_eq!(tokens("foo(bar"), vec!["foo", "bar"]);
        assert_eq!(tokens("a=b"), vec!["a", "b"]);
        assert_eq!(tokens("x[0]"), vec!["x", "0]"]);
        assert_eq!(tokens("<div>hello"), vec!["<div", "hello"]);
    }

    #[test]
    fn runs_of_delimiters_yield_nothing() {
        assert!(tokens("(((").is_empty());
        assert!(tokens(" > ( [ { = ").is_empty());
    }

    #[test]
    fn final_token_at_end_of_input_is_emitted() {
        assert_eq!(tokens("$true"), vec!["$true"]);
        assert_eq!(tokens("one two"), vec!["one", "two"]);
    }

    #[test]
    fn colon_is_not_a_delimiter() {
        assert_eq!(tokens("margin: 0;"), vec!["margin:", "0;"]);
        assert_eq!(tokens("font-size:12px"), vec!["font-size:12px"]);
    }

    #[test]
    fn unicode_whitespace_separates_tokens() {
        assert_eq!(tokens("a\u{3000}b\u{00a0}c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn tokens_are_never_empty_and_carry_no_delimiters() {
        for token in TokenScanner::new("a(b)c {d} [e] <f> g=h") {
            assert!(!token.is_empty());
            assert!(!token.chars().any(is_delimiter));
        }
    }

    #[test]
    fn scan_is_single_pass_over_arbitrary_bytes_of_text() {
        // Binary-ish input tokenizes best-effort without panicking.
        let noisy = "\u{0}\u{1}\u{2} ok \u{7f}";
        assert_eq!(tokens(noisy), vec!["\u{0}\u{1}\u{2}", "ok", "\u{7f}"]);
    }
}
