//! Pattern matching for captured streams
//!
//! A pattern is either one of the blank sentinels (`""`, `^$`, `\A\z`), which
//! demand that the stream is empty or whitespace only, or a regular
//! expression that is *searched* for anywhere in the stream, the way
//! `grep -i` would.
//!
//! The blank sentinels never reach the regex engine. Captured output almost
//! always ends with a newline, and `^$` in multi-line mode happily matches the
//! empty "line" after it, so `tcmd date '^$'` would pass.

use regex::{Regex, RegexBuilder};
use crate::error::TcmdError;

/// Patterns that mean "the stream must be blank".
pub const BLANK_SENTINELS: [&str; 3] = ["", "^$", r"\A\z"];

/// Whether a single stream satisfied its expectation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    NotMatched,
}

impl MatchOutcome {
    pub fn from_bool(matched: bool) -> Self {
        if matched {
            MatchOutcome::Matched
        } else {
            MatchOutcome::NotMatched
        }
    }

    pub fn is_matched(self) -> bool {
        self == MatchOutcome::Matched
    }

    /// Flip the outcome (`grep -v` semantics)
    pub fn negate(self) -> Self {
        Self::from_bool(!self.is_matched())
    }
}

/// A compiled stream expectation
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Option<Regex>,
}

impl Pattern {
    /// Compile a pattern.
    ///
    /// Regexes are always case-insensitive, `.` matches newlines, and `^`/`$`
    /// match at line boundaries.
    pub fn new(source: impl Into<String>) -> Result<Self, TcmdError> {
        let source = source.into();
        if is_blank_sentinel(&source) {
            return Ok(Self { source, regex: None });
        }

        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .multi_line(true)
            .build()
            .map_err(|e| TcmdError::invalid_pattern(&source, e))?;

        Ok(Self { source, regex: Some(regex) })
    }

    /// The pattern text as given (after escaping, if any)
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if this pattern is a blank sentinel rather than a regex
    pub fn is_blank(&self) -> bool {
        self.regex.is_none()
    }

    /// Search `observed` for this pattern.
    pub fn search(&self, observed: &str) -> MatchOutcome {
        MatchOutcome::from_bool(self.find(observed).is_some())
    }

    /// Like [`Pattern::search`], but returns the matched text.
    ///
    /// A satisfied blank check yields the (blank) stream itself.
    pub fn find<'t>(&self, observed: &'t str) -> Option<&'t str> {
        match self.regex {
            Some(ref re) => re.find(observed).map(|m| m.as_str()),
            None if is_blank(observed) => Some(observed),
            None => None,
        }
    }
}

/// Returns true for the three spellings of "expect nothing".
pub fn is_blank_sentinel(pattern: &str) -> bool {
    BLANK_SENTINELS.contains(&pattern)
}

/// Empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Backslash every regex metacharacter so the pattern matches literally.
pub fn escape_pattern(pattern: &str) -> String {
    regex::escape(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(observed: &str, pattern: &str) -> MatchOutcome {
        Pattern::new(pattern).unwrap().search(observed)
    }

    #[test]
    fn test_blank_sentinels_match_blank_text() {
        assert_eq!(search("", ""), MatchOutcome::Matched);
        assert_eq!(search("", "^$"), MatchOutcome::Matched);
        assert_eq!(search("   \n", "^$"), MatchOutcome::Matched);
        assert_eq!(search("\t\n\n", r"\A\z"), MatchOutcome::Matched);
    }

    #[test]
    fn test_blank_sentinels_reject_text() {
        assert_eq!(search("x", "^$"), MatchOutcome::NotMatched);
        assert_eq!(search("x", ""), MatchOutcome::NotMatched);
        assert_eq!(search("Wed Oct 17\n", r"\A\z"), MatchOutcome::NotMatched);
    }

    #[test]
    fn test_blank_pattern_with_trailing_newline_output() {
        // multi-line `^$` would match after the newline; the blank check must not
        assert_eq!(search("2018\n", "^$"), MatchOutcome::NotMatched);
    }

    #[test]
    fn test_search_is_substring() {
        assert_eq!(search("Wed Oct 17 2018", "2018"), MatchOutcome::Matched);
        assert_eq!(search("Wed Oct 17 2016", "2018"), MatchOutcome::NotMatched);
    }

    #[test]
    fn test_search_case_insensitive() {
        assert_eq!(search("LOCALHOST", "localhost"), MatchOutcome::Matched);
        assert_eq!(search("localhost", "LocalHost"), MatchOutcome::Matched);
    }

    #[test]
    fn test_dot_matches_newline() {
        assert_eq!(search("first\nsecond\n", "first.second"), MatchOutcome::Matched);
        assert_eq!(search("first\nsecond\n", "first.*second"), MatchOutcome::Matched);
    }

    #[test]
    fn test_anchors_are_per_line() {
        let text = "127.0.0.1 localhost\n::1 ip6-localhost\n";
        assert_eq!(search(text, "^::1"), MatchOutcome::Matched);
        assert_eq!(search(text, "localhost$"), MatchOutcome::Matched);
        assert_eq!(search(text, "^localhost"), MatchOutcome::NotMatched);
    }

    #[test]
    fn test_alternation() {
        assert_eq!(search("# comment only", "#|localhost"), MatchOutcome::Matched);
    }

    #[test]
    fn test_exit_code_text_matching() {
        assert_eq!(search("0", "^0$"), MatchOutcome::Matched);
        assert_eq!(search("10", "^0$"), MatchOutcome::NotMatched);
        // unanchored default
        assert_eq!(search("10", "0"), MatchOutcome::Matched);
        assert_eq!(search("127", "0"), MatchOutcome::NotMatched);
    }

    #[test]
    fn test_escaped_pattern_is_literal() {
        let p = Pattern::new(escape_pattern("x+y")).unwrap();
        assert_eq!(p.search("add x+y"), MatchOutcome::Matched);
        assert_eq!(p.search("xxy"), MatchOutcome::NotMatched);
        assert_eq!(p.search("xy"), MatchOutcome::NotMatched);
    }

    #[test]
    fn test_escaped_blank_sentinel_is_literal() {
        let p = Pattern::new(escape_pattern("^$")).unwrap();
        assert!(!p.is_blank());
        assert_eq!(p.search(""), MatchOutcome::NotMatched);
        assert_eq!(p.search("cost ^$"), MatchOutcome::Matched);
    }

    #[test]
    fn test_unescaped_plus_is_quantifier() {
        assert_eq!(search("xxy", "x+y"), MatchOutcome::Matched);
        assert_eq!(search("x+y", "x+y"), MatchOutcome::NotMatched);
    }

    #[test]
    fn test_unicode_word_repetition_compiles() {
        // case-insensitive Unicode \w classes are large once repeated
        let p = Pattern::new(r"\w{40}").unwrap();
        let word = "abcdefghij".repeat(4);
        assert_eq!(p.search(&word), MatchOutcome::Matched);
        assert_eq!(p.search(&word[..39]), MatchOutcome::NotMatched);

        let p = Pattern::new(r"\b\w{5,60}\b").unwrap();
        assert_eq!(p.search("a fairly ordinary sentence"), MatchOutcome::Matched);
        assert!(Pattern::new(r"\w{100}").is_ok());
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = Pattern::new("[unclosed").unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::InvalidPattern);
        assert!(err.message.contains("[unclosed"));
    }

    #[test]
    fn test_find_returns_matched_text() {
        let p = Pattern::new("20[0-9]+").unwrap();
        assert_eq!(p.find("Wed Oct 17 2018\n"), Some("2018"));
        let blank = Pattern::new("").unwrap();
        assert_eq!(blank.find(" \n"), Some(" \n"));
        assert_eq!(blank.find("x"), None);
    }

    #[test]
    fn test_outcome_negate() {
        assert_eq!(MatchOutcome::Matched.negate(), MatchOutcome::NotMatched);
        assert_eq!(MatchOutcome::NotMatched.negate(), MatchOutcome::Matched);
    }
}
