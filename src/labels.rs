//! Well-known block labels.
//!
//! Labels are plain strings attached to a [`TextBlock`](crate::TextBlock).
//! Filters use them to pass signals to later stages (a block marked
//! [`INDICATES_END_OF_TEXT`] by one stage is acted on by another).
//!
//! Labels assigned by the block producer from the source markup (element
//! names, classes, ids) start with [`MARKUP_PREFIX`].

/// The block matches the document title.
pub const TITLE: &str = "de.l3s.boilerpipe/TITLE";

/// Short date/byline block belonging to the article.
pub const ARTICLE_METADATA: &str = "de.l3s.boilerpipe/ARTICLE_METADATA";

/// The block probably marks the end of the article text (comments, ratings).
pub const INDICATES_END_OF_TEXT: &str = "de.l3s.boilerpipe/INDICATES_END_OF_TEXT";

/// The block was discarded but might still be content.
pub const MIGHT_BE_CONTENT: &str = "de.l3s.boilerpipe/MIGHT_BE_CONTENT";

/// The block was selected as the main content block.
pub const VERY_LIKELY_CONTENT: &str = "de.l3s.boilerpipe/VERY_LIKELY_CONTENT";

/// The block must never be fused into content.
pub const STRICTLY_NOT_CONTENT: &str = "de.l3s.boilerpipe/STRICTLY_NOT_CONTENT";

/// Horizontal rule.
pub const HR: &str = "de.l3s.boilerpipe/HR";

/// List item.
pub const LI: &str = "de.l3s.boilerpipe/LI";

/// Any heading (h1-h3).
pub const HEADING: &str = "de.l3s.boilerpipe/HEADING";

pub const H1: &str = "de.l3s.boilerpipe/H1";
pub const H2: &str = "de.l3s.boilerpipe/H2";
pub const H3: &str = "de.l3s.boilerpipe/H3";

/// Prefix reserved for labels derived from markup (`<div`, `<.class`, `<#id`).
pub const MARKUP_PREFIX: &str = "<";

/// Returns `true` if the label was derived from markup.
#[must_use]
pub fn is_markup_label(label: &str) -> bool {
    label.starts_with(MARKUP_PREFIX)
}
