//! Cleanup and utility filters.
//!
//! Small filters that flip, remove, split or relabel blocks by simple rules.
//! Most are building blocks for custom pipelines rather than part of the
//! standard extractors.

use super::Filter;
use crate::document::{RawTextBlock, TextBlock, TextDocument};
use crate::error::Result;
use crate::labels;
use crate::patterns::{CLAUSE_DELIMITER, CLAUSE_WHITESPACE};

/// Removes every non-content block, optionally keeping blocks with a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoilerplateBlockFilter {
    keep_label: Option<&'static str>,
}

impl BoilerplateBlockFilter {
    pub const REMOVE_ALL: Self = Self::new(None);
    pub const KEEP_TITLE: Self = Self::new(Some(labels::TITLE));

    #[must_use]
    pub const fn new(keep_label: Option<&'static str>) -> Self {
        Self { keep_label }
    }
}

impl Filter for BoilerplateBlockFilter {
    fn name(&self) -> &'static str {
        "boilerplate-block"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let blocks = doc.blocks_mut();
        let before = blocks.len();
        blocks.retain(|b| b.is_content() || self.keep_label.is_some_and(|l| b.has_label(l)));
        Ok(blocks.len() != before)
    }
}

/// Demotes content blocks that contain no clause of at least `min_words`
/// words.
///
/// A clause ends at a letter or digit followed by punctuation (`,.:;!?`)
/// and whitespace or the end of text. The undelimited remainder after the
/// last clause only counts with `accept_clauses_without_delimiter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinClauseWordsFilter {
    min_words: usize,
    accept_clauses_without_delimiter: bool,
}

impl MinClauseWordsFilter {
    #[must_use]
    pub const fn new(min_words: usize, accept_clauses_without_delimiter: bool) -> Self {
        Self {
            min_words,
            accept_clauses_without_delimiter,
        }
    }

    fn is_clause(&self, text: &str) -> bool {
        1 + CLAUSE_WHITESPACE.find_iter(text).count() >= self.min_words
    }

    /// Returns `true` if `text` holds a long enough clause.
    #[must_use]
    pub fn has_clause(&self, text: &str) -> bool {
        let mut start = 0;
        for m in CLAUSE_DELIMITER.find_iter(text) {
            // The clause includes the character preceding the punctuation.
            let end = m.start() + text[m.start()..].chars().next().map_or(0, char::len_utf8);
            if self.is_clause(&text[start..end]) {
                return true;
            }
            start = m.end();
        }
        self.accept_clauses_without_delimiter && self.is_clause(&text[start..])
    }
}

impl Default for MinClauseWordsFilter {
    fn default() -> Self {
        Self::new(5, false)
    }
}

impl Filter for MinClauseWordsFilter {
    fn name(&self) -> &'static str {
        "min-clause-words"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        for block in doc.blocks_mut() {
            if block.is_content() && !self.has_clause(block.text()) {
                block.set_is_content(false);
                changes = true;
            }
        }
        Ok(changes)
    }
}

/// Demotes content blocks with fewer than `min_words` words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinWordsFilter {
    min_words: usize,
}

impl MinWordsFilter {
    #[must_use]
    pub const fn new(min_words: usize) -> Self {
        Self { min_words }
    }
}

impl Filter for MinWordsFilter {
    fn name(&self) -> &'static str {
        "min-words"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        for block in doc.blocks_mut() {
            if block.is_content() && block.num_words() < self.min_words {
                block.set_is_content(false);
                changes = true;
            }
        }
        Ok(changes)
    }
}

/// Splits blocks into one block per line.
///
/// Each line becomes a block at the same position, inheriting the content
/// flag, labels, tag level and offsets of its parent. Word counts are
/// recounted per line, anchor statistics and contained elements are lost.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitParagraphBlocksFilter;

impl SplitParagraphBlocksFilter {
    fn split(block: &TextBlock) -> Result<Vec<TextBlock>> {
        block
            .text()
            .split('\n')
            .map(|line| {
                TextBlock::try_from(RawTextBlock {
                    text: line.to_string(),
                    offset: block.offset_start(),
                    offset_end: Some(block.offset_end()),
                    num_words: line.split_whitespace().count(),
                    tag_level: block.tag_level(),
                    is_content: block.is_content(),
                    labels: block.labels().clone(),
                    ..RawTextBlock::default()
                })
            })
            .collect()
    }
}

impl Filter for SplitParagraphBlocksFilter {
    fn name(&self) -> &'static str {
        "split-paragraph-blocks"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        if !doc.blocks().iter().any(|b| b.text().contains('\n')) {
            return Ok(false);
        }
        let blocks = std::mem::take(doc.blocks_mut());
        let mut split = Vec::with_capacity(blocks.len());
        for block in blocks {
            if block.text().contains('\n') {
                split.extend(Self::split(&block)?);
            } else {
                split.push(block);
            }
        }
        *doc.blocks_mut() = split;
        Ok(true)
    }
}

/// Marks every block as content.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkEverythingContentFilter;

impl Filter for MarkEverythingContentFilter {
    fn name(&self) -> &'static str {
        "mark-everything-content"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        Ok(doc
            .blocks_mut()
            .iter_mut()
            .fold(false, |changes, b| b.set_is_content(true) | changes))
    }
}

/// Marks every block as boilerplate.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkEverythingBoilerplateFilter;

impl Filter for MarkEverythingBoilerplateFilter {
    fn name(&self) -> &'static str {
        "mark-everything-boilerplate"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        Ok(doc
            .blocks_mut()
            .iter_mut()
            .fold(false, |changes, b| b.set_is_content(false) | changes))
    }
}

/// Flips every block's content flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvertedFilter;

impl Filter for InvertedFilter {
    fn name(&self) -> &'static str {
        "inverted"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        for block in doc.blocks_mut() {
            let flipped = !block.is_content();
            block.set_is_content(flipped);
        }
        Ok(!doc.is_empty())
    }
}

/// Promotes non-content blocks carrying any of the given labels.
#[derive(Debug, Clone, Default)]
pub struct LabelToContentFilter {
    labels: Vec<String>,
}

impl LabelToContentFilter {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for LabelToContentFilter {
    fn name(&self) -> &'static str {
        "label-to-content"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        for block in doc.blocks_mut() {
            if !block.is_content() && self.labels.iter().any(|l| block.has_label(l)) {
                block.set_is_content(true);
                changes = true;
            }
        }
        Ok(changes)
    }
}

/// Demotes content blocks carrying any of the given labels.
#[derive(Debug, Clone, Default)]
pub struct LabelToBoilerplateFilter {
    labels: Vec<String>,
}

impl LabelToBoilerplateFilter {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for LabelToBoilerplateFilter {
    fn name(&self) -> &'static str {
        "label-to-boilerplate"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        for block in doc.blocks_mut() {
            if block.is_content() && self.labels.iter().any(|l| block.has_label(l)) {
                block.set_is_content(false);
                changes = true;
            }
        }
        Ok(changes)
    }
}

/// Predicate over a single block.
pub type BlockCondition = fn(&TextBlock) -> bool;

/// Promotes a boilerplate block sitting between two content blocks if it
/// satisfies a condition.
///
/// The default condition accepts link-free blocks with more than six words.
/// Blocks promoted earlier in the same pass count as content neighbours.
#[derive(Debug, Clone, Copy)]
pub struct SurroundingToContentFilter {
    condition: BlockCondition,
}

impl SurroundingToContentFilter {
    #[must_use]
    pub const fn new(condition: BlockCondition) -> Self {
        Self { condition }
    }

    fn link_free_sentence(block: &TextBlock) -> bool {
        block.link_density() == 0.0 && block.num_words() > 6
    }
}

impl Default for SurroundingToContentFilter {
    fn default() -> Self {
        Self::new(Self::link_free_sentence)
    }
}

impl Filter for SurroundingToContentFilter {
    fn name(&self) -> &'static str {
        "surrounding-to-content"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let blocks = doc.blocks_mut();
        let mut changes = false;
        for i in 1..blocks.len().saturating_sub(1) {
            if !blocks[i].is_content()
                && blocks[i - 1].is_content()
                && blocks[i + 1].is_content()
                && (self.condition)(&blocks[i])
            {
                blocks[i].set_is_content(true);
                changes = true;
            }
        }
        Ok(changes)
    }
}

/// Copies every block's labels onto the block preceding it.
///
/// The labels copied are those each block carried before the filter ran,
/// each prefixed with `label_prefix`. The last block receives nothing.
#[derive(Debug, Clone, Default)]
pub struct AddPrecedingLabelsFilter {
    label_prefix: String,
}

impl AddPrecedingLabelsFilter {
    /// Prefix conventionally used for copied labels.
    pub const DEFAULT_PREFIX: &'static str = "^";

    #[must_use]
    pub fn new(label_prefix: impl Into<String>) -> Self {
        Self {
            label_prefix: label_prefix.into(),
        }
    }
}

impl Filter for AddPrecedingLabelsFilter {
    fn name(&self) -> &'static str {
        "add-preceding-labels"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let blocks = doc.blocks_mut();
        let mut changes = false;
        let mut below: Option<Vec<String>> = None;
        for block in blocks.iter_mut().rev() {
            let own: Vec<String> = block.labels().iter().cloned().collect();
            if let Some(labels) = below.take() {
                for label in labels {
                    changes |= block.add_label(format!("{}{label}", self.label_prefix));
                }
            }
            below = Some(own);
        }
        Ok(changes)
    }
}
