//! Compiled regex patterns used by the filters.
//!
//! All patterns are compiled once on first use via `LazyLock`.
//! Patterns are organized by the filter that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Article Metadata Patterns
// =============================================================================

/// Matches short date/time lines: "May 5, 2010 10:30 am EST", "12.03.2011".
pub static SHORT_DATE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9 ,\./]*\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec|January|February|March|April|May|June|July|August|September|October|November|December)?\b[0-9 ,:apm\./]*([CPSDMGET]{2,3})?$",
    )
    .expect("SHORT_DATE_LINE regex")
});

/// Matches bylines ("By Jane Doe").
pub static BYLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[Bb]y ").expect("BYLINE regex"));

// =============================================================================
// Terminating Block Patterns
// =============================================================================

/// Matches "123 comments" and "42 users responded in" at the start of a line.
pub static NUMBERED_COMMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+( comments| users responded in)").expect("NUMBERED_COMMENTS regex")
});

// =============================================================================
// Clause Patterns
// =============================================================================

/// Matches the end of a clause: a letter or digit followed by punctuation,
/// then whitespace or end of text.
pub static CLAUSE_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}0-9][,\.:;!\?]+([ \n\r]+|$)").expect("CLAUSE_DELIMITER regex")
});

/// Matches runs of clause-internal whitespace.
pub static CLAUSE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \n\r]+").expect("CLAUSE_WHITESPACE regex"));

// =============================================================================
// Title Patterns
// =============================================================================

/// Separator classes tried in turn when looking for the longest title segment.
/// Each class adds characters to the previous one.
pub static TITLE_SEPARATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[ ]*[\|»\-][ ]*",
        r"[ ]*[\|»:][ ]*",
        r"[ ]*[\|»:\(\)][ ]*",
        r"[ ]*[\|»:\(\)\-][ ]*",
        r"[ ]*[\|»,:\(\)\-][ ]*",
        r"[ ]*[\|»,:\(\)\-\x{a0}][ ]*",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("TITLE_SEPARATORS regex"))
    .collect()
});

/// Spaced pipe separator ("Headline | Site").
pub static TITLE_PIPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]+\|[ ]+").expect("TITLE_PIPE regex"));

/// Spaced dash separator ("Headline - Site").
pub static TITLE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]+\-[ ]+").expect("TITLE_DASH regex"));

/// Trailing " - Site Name" clause.
pub static TITLE_TRAILING_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" - [^\-]+$").expect("TITLE_TRAILING_CLAUSE regex"));

/// Leading "Site Name - " clause.
pub static TITLE_LEADING_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\-]+ - ").expect("TITLE_LEADING_CLAUSE regex"));

/// Word separators inside a title segment (space or backspace).
pub static TITLE_WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x08 ]+").expect("TITLE_WORD_SEPARATOR regex"));

/// Punctuation ignored when comparing block text against title candidates.
pub static TITLE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\?!\.\-:]+").expect("TITLE_PUNCTUATION regex"));

// =============================================================================
// Helpers
// =============================================================================

/// Splits `text` on `re`, dropping trailing empty pieces.
///
/// Text without any separator yields itself as the only piece, even when
/// empty. Leading empty pieces are kept.
#[must_use]
pub fn split_keep_leading<'a>(re: &Regex, text: &'a str) -> Vec<&'a str> {
    if !re.is_match(text) {
        return vec![text];
    }
    let mut parts: Vec<&str> = re.split(text).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_line_matches_dates_and_times() {
        assert!(SHORT_DATE_LINE.is_match("May 5, 2010"));
        assert!(SHORT_DATE_LINE.is_match("12.03.2011"));
        assert!(SHORT_DATE_LINE.is_match("November 3, 2009 10:30 am EST"));
        assert!(!SHORT_DATE_LINE.is_match("The quick brown fox"));
    }

    #[test]
    fn byline_requires_leading_by() {
        assert!(BYLINE.is_match("By Jane Doe"));
        assert!(BYLINE.is_match("by staff reporter"));
        assert!(!BYLINE.is_match("Written by Jane Doe"));
    }

    #[test]
    fn numbered_comments_requires_digits() {
        assert!(NUMBERED_COMMENTS.is_match("42 comments so far"));
        assert!(NUMBERED_COMMENTS.is_match("7 users responded in this thread"));
        assert!(!NUMBERED_COMMENTS.is_match("comments 42"));
    }

    #[test]
    fn clause_delimiter_needs_word_character_before_punctuation() {
        assert!(CLAUSE_DELIMITER.is_match("one, two"));
        assert!(CLAUSE_DELIMITER.is_match("the end."));
        assert!(!CLAUSE_DELIMITER.is_match("no delimiter here"));
        assert!(!CLAUSE_DELIMITER.is_match("dangling ,"));
    }

    #[test]
    fn split_keep_leading_drops_trailing_empties() {
        assert_eq!(split_keep_leading(&TITLE_PIPE, "a | b"), vec!["a", "b"]);
        assert_eq!(split_keep_leading(&TITLE_PIPE, "no separator"), vec!["no separator"]);
        assert_eq!(split_keep_leading(&TITLE_WORD_SEPARATOR, " a b "), vec!["", "a", "b"]);
        assert_eq!(split_keep_leading(&TITLE_WORD_SEPARATOR, ""), vec![""]);
    }
}
