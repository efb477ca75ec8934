//! Boundary filters: cut the content off at end-of-text markers.
//!
//! Both filters rely on blocks labeled [`labels::INDICATES_END_OF_TEXT`],
//! usually by an upstream
//! [`TerminatingBlocksFinder`](super::TerminatingBlocksFinder).

use super::{full_text_words, Filter};
use crate::document::TextDocument;
use crate::error::Result;
use crate::labels;

/// Demotes everything from the first end-of-text marker that follows enough
/// content.
///
/// Full-text words of content blocks (text density of at least 9) are
/// accumulated in reading order, including the marker block itself. Once a
/// marker is seen with at least `min_words` accumulated words, that block
/// and every later block become boilerplate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreBlocksAfterContentFilter {
    min_words: usize,
}

impl IgnoreBlocksAfterContentFilter {
    pub const DEFAULT_MIN_WORDS: usize = 60;

    #[must_use]
    pub const fn new(min_words: usize) -> Self {
        Self { min_words }
    }

    #[must_use]
    pub fn min_words(&self) -> usize {
        self.min_words
    }
}

impl Default for IgnoreBlocksAfterContentFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_WORDS)
    }
}

impl Filter for IgnoreBlocksAfterContentFilter {
    fn name(&self) -> &'static str {
        "ignore-blocks-after-content"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        let mut num_words = 0;
        let mut found_end = false;
        for block in doc.blocks_mut() {
            if block.is_content() {
                num_words += full_text_words(block);
            }
            if block.has_label(labels::INDICATES_END_OF_TEXT) && num_words >= self.min_words {
                found_end = true;
            }
            if found_end {
                block.set_is_content(false);
                changes = true;
            }
        }
        Ok(changes)
    }
}

/// Demotes end-of-text markers near the end of the document.
///
/// Walks backward; every marker becomes boilerplate, is labeled
/// [`labels::STRICTLY_NOT_CONTENT`] and loses
/// [`labels::MIGHT_BE_CONTENT`]. The walk stops once more than 200 content
/// words have been passed.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreBlocksAfterContentFromEndFilter;

impl IgnoreBlocksAfterContentFromEndFilter {
    const MAX_WORDS: usize = 200;
}

impl Filter for IgnoreBlocksAfterContentFromEndFilter {
    fn name(&self) -> &'static str {
        "ignore-blocks-after-content-from-end"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        let mut num_words = 0;
        for block in doc.blocks_mut().iter_mut().rev() {
            if block.has_label(labels::INDICATES_END_OF_TEXT) {
                block.add_label(labels::STRICTLY_NOT_CONTENT);
                block.remove_label(labels::MIGHT_BE_CONTENT);
                block.set_is_content(false);
                changes = true;
            } else if block.is_content() {
                num_words += block.num_words();
                if num_words > Self::MAX_WORDS {
                    break;
                }
            }
        }
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextBlock;
    use crate::filters::test_support::{block, content_block, flags};

    fn run(filter: &dyn Filter, doc: &mut TextDocument) -> bool {
        filter.process(doc).unwrap_or_else(|e| panic!("{e}"))
    }

    fn end_marker(offset: usize) -> TextBlock {
        let mut b = block(offset, 2, 0);
        b.add_label(labels::INDICATES_END_OF_TEXT);
        b
    }

    fn article(words_before_marker: usize) -> TextDocument {
        TextDocument::new(vec![
            content_block(0, words_before_marker),
            end_marker(1),
            content_block(2, 40),
        ])
    }

    #[test]
    fn marker_after_59_words_suppresses_nothing() {
        let mut doc = article(59);
        assert!(!run(&IgnoreBlocksAfterContentFilter::default(), &mut doc));
        assert_eq!(flags(&doc), vec![true, false, true]);
    }

    #[test]
    fn marker_after_60_words_suppresses_the_rest() {
        let mut doc = article(60);
        assert!(run(&IgnoreBlocksAfterContentFilter::default(), &mut doc));
        assert_eq!(flags(&doc), vec![true, false, false]);
    }

    #[test]
    fn sparse_content_does_not_count_towards_minimum() {
        // 70 words over 10 lines: text density 7, no full-text words.
        let sparse = TextBlock::builder("menu-like list", 0)
            .num_words(70)
            .wrapped_lines(70, 10)
            .is_content(true)
            .build()
            .unwrap_or_else(|e| panic!("{e}"));
        let mut doc = TextDocument::new(vec![sparse, end_marker(1), content_block(2, 40)]);
        assert!(!run(&IgnoreBlocksAfterContentFilter::default(), &mut doc));
        assert_eq!(flags(&doc), vec![true, false, true]);
    }

    #[test]
    fn suppression_is_sticky() {
        // The second marker sees 99 words; the trigger stays set after it.
        let mut doc = TextDocument::new(vec![
            content_block(0, 59),
            end_marker(1),
            content_block(2, 40),
            end_marker(3),
            content_block(4, 40),
            block(5, 10, 0),
        ]);
        assert!(run(&IgnoreBlocksAfterContentFilter::default(), &mut doc));
        assert_eq!(flags(&doc), vec![true, false, true, false, false, false]);
    }

    #[test]
    fn custom_minimum() {
        let mut doc = article(10);
        assert!(run(&IgnoreBlocksAfterContentFilter::new(10), &mut doc));
        assert_eq!(flags(&doc), vec![true, false, false]);
    }

    #[test]
    fn from_end_relabels_trailing_markers() {
        let mut marker = end_marker(2);
        marker.add_label(labels::MIGHT_BE_CONTENT);
        marker.set_is_content(true);
        let mut doc = TextDocument::new(vec![content_block(0, 100), content_block(1, 50), marker]);
        assert!(run(&IgnoreBlocksAfterContentFromEndFilter, &mut doc));

        let marker = &doc.blocks()[2];
        assert!(!marker.is_content());
        assert!(marker.has_label(labels::STRICTLY_NOT_CONTENT));
        assert!(!marker.has_label(labels::MIGHT_BE_CONTENT));
    }

    #[test]
    fn from_end_stops_after_200_content_words() {
        let mut doc = TextDocument::new(vec![end_marker(0), content_block(1, 201), end_marker(2)]);
        assert!(run(&IgnoreBlocksAfterContentFromEndFilter, &mut doc));
        assert!(!doc.blocks()[0].has_label(labels::STRICTLY_NOT_CONTENT));
        assert!(doc.blocks()[2].has_label(labels::STRICTLY_NOT_CONTENT));
    }

    #[test]
    fn from_end_without_markers_is_noop() {
        let mut doc = TextDocument::new(vec![content_block(0, 10)]);
        assert!(!run(&IgnoreBlocksAfterContentFromEndFilter, &mut doc));
    }
}
