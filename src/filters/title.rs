//! Title matching.
//!
//! Marks the first block whose text matches the document's `<title>` (or a
//! plausible segment of it) with [`labels::TITLE`]. The heuristics are tuned
//! to news sites, whose titles usually carry the site name after a
//! separator ("Headline - Example Times", "Example Times | Headline").

use std::collections::HashSet;

use super::Filter;
use crate::document::TextDocument;
use crate::error::Result;
use crate::labels;
use crate::patterns::{
    split_keep_leading, TITLE_DASH, TITLE_LEADING_CLAUSE, TITLE_PIPE, TITLE_PUNCTUATION,
    TITLE_SEPARATORS, TITLE_TRAILING_CLAUSE, TITLE_WORD_SEPARATOR,
};

/// Where the title candidates come from.
#[derive(Debug, Clone)]
enum TitleSource {
    /// Candidates are built from the processed document's own title.
    Document,
    /// Candidates built once from a fixed title; `None` if it was empty.
    Fixed(Option<HashSet<String>>),
}

/// Labels the block matching the document title.
#[derive(Debug, Clone)]
pub struct DocumentTitleMatchClassifier {
    source: TitleSource,
}

impl DocumentTitleMatchClassifier {
    /// Matches against a fixed title.
    #[must_use]
    pub fn new(title: Option<&str>) -> Self {
        Self {
            source: TitleSource::Fixed(title.and_then(potential_titles)),
        }
    }

    /// Matches against whatever title the processed document carries.
    #[must_use]
    pub fn from_document() -> Self {
        Self {
            source: TitleSource::Document,
        }
    }

    /// The candidate set for a fixed title.
    #[must_use]
    pub fn fixed_potential_titles(&self) -> Option<&HashSet<String>> {
        match &self.source {
            TitleSource::Fixed(titles) => titles.as_ref(),
            TitleSource::Document => None,
        }
    }
}

impl Default for DocumentTitleMatchClassifier {
    fn default() -> Self {
        Self::from_document()
    }
}

impl Filter for DocumentTitleMatchClassifier {
    fn name(&self) -> &'static str {
        "document-title-match-classifier"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let from_document;
        let titles = match &self.source {
            TitleSource::Fixed(titles) => titles.as_ref(),
            TitleSource::Document => {
                from_document = doc.title().and_then(potential_titles);
                from_document.as_ref()
            }
        };
        let Some(titles) = titles else {
            return Ok(false);
        };

        for block in doc.blocks_mut() {
            let text = normalize(block.text());
            if titles.contains(&text) {
                block.add_label(labels::TITLE);
                return Ok(true);
            }
            let stripped = TITLE_PUNCTUATION.replace_all(&text, "");
            if titles.contains(stripped.trim()) {
                block.add_label(labels::TITLE);
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Normalizes title and block text alike for comparison.
fn normalize(text: &str) -> String {
    text.replace('\u{a0}', " ").replace('\'', "").trim().to_lowercase()
}

/// Builds every plausible rendering of `title`; `None` for a blank title.
#[must_use]
pub fn potential_titles(title: &str) -> Option<HashSet<String>> {
    let title = normalize(title);
    if title.is_empty() {
        return None;
    }

    let mut titles = HashSet::new();
    for separator in TITLE_SEPARATORS.iter() {
        if let Some(part) = longest_part(&title, separator) {
            titles.insert(part);
        }
    }
    add_long_parts(&mut titles, &title, &TITLE_PIPE, 4);
    add_long_parts(&mut titles, &title, &TITLE_DASH, 4);

    titles.insert(TITLE_TRAILING_CLAUSE.replace(&title, "").into_owned());
    titles.insert(TITLE_LEADING_CLAUSE.replace(&title, "").into_owned());
    titles.insert(title);
    Some(titles)
}

fn word_count(part: &str) -> usize {
    split_keep_leading(&TITLE_WORD_SEPARATOR, part).len()
}

/// The segment with the most words (or characters), skipping domain names.
fn longest_part(title: &str, separator: &regex::Regex) -> Option<String> {
    let parts = split_keep_leading(separator, title);
    if parts.len() == 1 {
        return None;
    }

    let mut longest_num_words = 0;
    let mut longest = "";
    for part in parts {
        if part.contains(".com") {
            continue;
        }
        let num_words = word_count(part);
        if num_words > longest_num_words || part.chars().count() > longest.chars().count() {
            longest_num_words = num_words;
            longest = part;
        }
    }

    if longest.is_empty() {
        None
    } else {
        Some(longest.trim().to_string())
    }
}

/// Adds every segment with at least `min_words` words.
fn add_long_parts(titles: &mut HashSet<String>, title: &str, separator: &regex::Regex, min_words: usize) {
    let parts = split_keep_leading(separator, title);
    if parts.len() == 1 {
        return;
    }
    for part in parts {
        if !part.contains(".com") && word_count(part) >= min_words {
            titles.insert(part.to_string());
        }
    }
}
