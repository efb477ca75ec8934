//! Marker filters: label blocks that carry structural signals.
//!
//! - [`TerminatingBlocksFinder`] labels blocks that typically end an article
//!   (comment sections, rating prompts, agency credits).
//! - [`ArticleMetadataFilter`] forces short date lines and bylines to content.

use super::Filter;
use crate::document::TextDocument;
use crate::error::Result;
use crate::labels;
use crate::patterns::{BYLINE, NUMBERED_COMMENTS, SHORT_DATE_LINE};

/// Lowercased prefixes that end an article.
const END_PREFIXES: &[&str] = &["comments", "© reuters", "please rate this", "post a comment"];

/// Lowercased phrases that end an article wherever they occur.
const END_PHRASES: &[&str] = &[
    "what you think...",
    "add your comment",
    "add comment",
    "reader views",
    "have your say",
    "reader comments",
    "rätta artikeln",
];

const FEEDBACK_CLOSED: &str = "thanks for your comments - this feedback is now closed";

/// Labels blocks that probably end the article with
/// [`labels::INDICATES_END_OF_TEXT`].
///
/// Pair it with a downstream
/// [`IgnoreBlocksAfterContentFilter`](super::IgnoreBlocksAfterContentFilter).
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminatingBlocksFinder;

impl TerminatingBlocksFinder {
    /// Returns `true` if a block with this text and statistics ends the article.
    #[must_use]
    pub fn is_terminating(text: &str, num_words: usize, link_density: f32) -> bool {
        Self::has_end_phrase(text, num_words) || Self::is_comment_link(text, num_words, link_density)
    }

    fn has_end_phrase(text: &str, num_words: usize) -> bool {
        if num_words >= 15 {
            return false;
        }
        let text = text.trim();
        if text.chars().count() < 8 {
            return false;
        }
        let lower = text.to_lowercase();
        END_PREFIXES.iter().any(|p| lower.starts_with(p))
            || NUMBERED_COMMENTS.is_match(&lower)
            || END_PHRASES.iter().any(|p| lower.contains(p))
            || lower == FEEDBACK_CLOSED
    }

    /// A lone fully-linked "Comment".
    fn is_comment_link(text: &str, num_words: usize, link_density: f32) -> bool {
        num_words < 15 && link_density == 1.0 && text.trim() == "Comment"
    }
}

impl Filter for TerminatingBlocksFinder {
    fn name(&self) -> &'static str {
        "terminating-blocks-finder"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        for block in doc.blocks_mut() {
            if Self::has_end_phrase(block.text(), block.num_words()) {
                block.add_label(labels::INDICATES_END_OF_TEXT);
                changes = true;
            } else if Self::is_comment_link(block.text(), block.num_words(), block.link_density()) {
                // Labeled, but not reported as a change.
                block.add_label(labels::INDICATES_END_OF_TEXT);
            }
        }
        Ok(changes)
    }
}

/// Marks short date lines and bylines as content with
/// [`labels::ARTICLE_METADATA`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleMetadataFilter;

impl ArticleMetadataFilter {
    /// Returns `true` for short date/time lines and "By ..." bylines.
    #[must_use]
    pub fn is_metadata(text: &str) -> bool {
        SHORT_DATE_LINE.is_match(text) || BYLINE.is_match(text)
    }
}

impl Filter for ArticleMetadataFilter {
    fn name(&self) -> &'static str {
        "article-metadata-filter"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        for block in doc.blocks_mut() {
            if block.num_words() > 10 || !Self::is_metadata(block.text()) {
                continue;
            }
            block.set_is_content(true);
            block.add_label(labels::ARTICLE_METADATA);
            changes = true;
        }
        Ok(changes)
    }
}
