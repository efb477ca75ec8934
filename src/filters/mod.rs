//! Filters: the composable stages of every extractor.
//!
//! A filter inspects a [`TextDocument`] and mutates it in place, returning
//! whether anything changed. Filters hold configuration only, so a single
//! instance can be shared between threads and reused across documents.
//!
//! # Module Structure
//!
//! - `classifiers`: rule-based content classifiers (densities, word counts)
//! - `title`: marks the block matching the document title
//! - `markers`: end-of-text and article-metadata detection
//! - `fusion`: merging of adjacent blocks
//! - `selection`: picking and expanding the main content block
//! - `boundary`: cutting content off at end-of-text markers
//! - `simple`: cleanup and utility filters
//!
//! # Usage
//!
//! ```rust
//! use rs_boilerpipe::filters::{Filter, MinWordsFilter};
//! use rs_boilerpipe::{TextBlock, TextDocument};
//!
//! let mut doc = TextDocument::new(vec![
//!     TextBlock::builder("short", 0).num_words(1).is_content(true).build()?,
//! ]);
//! let changed = MinWordsFilter::new(3).process(&mut doc)?;
//! assert!(changed);
//! assert_eq!(doc.content(), "");
//! # Ok::<(), rs_boilerpipe::Error>(())
//! ```

pub mod boundary;
pub mod classifiers;
pub mod fusion;
pub mod markers;
pub mod selection;
pub mod simple;
pub mod title;

pub use boundary::{IgnoreBlocksAfterContentFilter, IgnoreBlocksAfterContentFromEndFilter};
pub use classifiers::{CanolaClassifier, DensityRulesClassifier, NumWordsRulesClassifier};
pub use fusion::{BlockProximityFusion, ContentFusion, LabelFusion, SimpleBlockFusion};
pub use markers::{ArticleMetadataFilter, TerminatingBlocksFinder};
pub use selection::{
    ExpandTitleToContentFilter, KeepLargestBlockFilter, KeepLargestFulltextBlockFilter,
    LargeBlockSameTagLevelToContentFilter, ListAtEndFilter, TrailingHeadlineToBoilerplateFilter,
};
pub use simple::{
    AddPrecedingLabelsFilter, BlockCondition, BoilerplateBlockFilter, InvertedFilter,
    LabelToBoilerplateFilter, LabelToContentFilter, MarkEverythingBoilerplateFilter,
    MarkEverythingContentFilter, MinClauseWordsFilter, MinWordsFilter, SplitParagraphBlocksFilter,
    SurroundingToContentFilter,
};
pub use title::DocumentTitleMatchClassifier;

use crate::document::{TextBlock, TextDocument, EMPTY_END, EMPTY_START};
use crate::error::Result;

/// A single processing stage.
///
/// Implementations must be deterministic functions of the document state.
/// They may reclassify, relabel, fuse or remove blocks, but must keep the
/// surviving blocks in their original order.
pub trait Filter: Send + Sync {
    /// Short stable name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Processes the document, returning `true` if it was changed.
    fn process(&self, doc: &mut TextDocument) -> Result<bool>;
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        (**self).process(doc)
    }
}

/// Text density from which a block's words count as full text.
const FULL_TEXT_MIN_DENSITY: f32 = 9.0;

/// Words of `block` that are believed to be full text.
pub(crate) fn full_text_words(block: &TextBlock) -> usize {
    if block.text_density() >= FULL_TEXT_MIN_DENSITY {
        block.num_words()
    } else {
        0
    }
}

/// Sets each block's content flag from its `(previous, current, next)` window.
///
/// The boundary sentinels stand in for missing neighbours. Returns `true`
/// if any flag changed.
pub(crate) fn classify_each<F>(doc: &mut TextDocument, classify: F) -> bool
where
    F: Fn(&TextBlock, &TextBlock, &TextBlock) -> bool,
{
    let blocks = doc.blocks_mut();
    let mut changes = false;
    for i in 0..blocks.len() {
        let prev = if i == 0 { &EMPTY_START } else { &blocks[i - 1] };
        let next = blocks.get(i + 1).unwrap_or(&EMPTY_END);
        let is_content = classify(prev, &blocks[i], next);
        changes |= blocks[i].set_is_content(is_content);
    }
    changes
}


#[cfg(test)]
mod tests {
    use super::test_support::block;
    use super::*;

    #[test]
    fn classify_each_uses_sentinels_at_boundaries() {
        let mut doc = TextDocument::new(vec![block(0, 5, 0)]);
        let changed = classify_each(&mut doc, |prev, _, next| {
            prev.num_words() == 0 && next.num_words() == 0
        });
        assert!(changed);
        assert!(doc.blocks()[0].is_content());
    }

    #[test]
    fn classify_each_reports_no_change_when_flags_match() {
        let mut doc = TextDocument::new(vec![block(0, 5, 0), block(1, 5, 0)]);
        assert!(!classify_each(&mut doc, |_, _, _| false));
    }

    #[test]
    fn classify_each_on_empty_document_is_noop() {
        let mut doc = TextDocument::default();
        assert!(!classify_each(&mut doc, |_, _, _| true));
    }
}
