//! Selection filters: pick the main content block and grow or trim the
//! selection around it.

use super::{full_text_words, Filter};
use crate::document::{TextBlock, TextDocument};
use crate::error::Result;
use crate::labels;

/// Keeps only the content block with the most words.
///
/// The first block wins ties. The kept block is labeled
/// [`labels::VERY_LIKELY_CONTENT`]; every other block is demoted and
/// labeled [`labels::MIGHT_BE_CONTENT`].
///
/// With expansion enabled, blocks at the kept block's tag level are promoted
/// again when they have at least `min_words` words. Expansion runs backward
/// and then forward from the kept block and stops in each direction at the
/// first block nested shallower than it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepLargestBlockFilter {
    expand_to_same_tag_level: bool,
    min_words: usize,
}

impl KeepLargestBlockFilter {
    pub const KEEP_ONLY: Self = Self::new(false, 0);
    pub const EXPAND_TO_SAME_TAG_LEVEL: Self = Self::new(true, 0);
    pub const EXPAND_TO_SAME_TAG_LEVEL_MIN_WORDS: Self = Self::new(true, 150);

    #[must_use]
    pub const fn new(expand_to_same_tag_level: bool, min_words: usize) -> Self {
        Self {
            expand_to_same_tag_level,
            min_words,
        }
    }

    fn expand(&self, blocks: &mut [TextBlock], largest: usize) {
        let level = blocks[largest].tag_level();
        let min_words = self.min_words;
        let visit = |block: &mut TextBlock| {
            if block.tag_level() < level {
                return false;
            }
            if block.tag_level() == level && block.num_words() >= min_words {
                block.set_is_content(true);
            }
            true
        };

        for block in blocks[..largest].iter_mut().rev() {
            if !visit(block) {
                break;
            }
        }
        for block in &mut blocks[largest..] {
            if !visit(block) {
                break;
            }
        }
    }
}

impl Default for KeepLargestBlockFilter {
    fn default() -> Self {
        Self::KEEP_ONLY
    }
}

impl Filter for KeepLargestBlockFilter {
    fn name(&self) -> &'static str {
        "keep-largest-block"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let blocks = doc.blocks_mut();
        if blocks.len() < 2 {
            return Ok(false);
        }

        let mut largest: Option<(usize, usize)> = None;
        for (i, block) in blocks.iter().enumerate() {
            if !block.is_content() {
                continue;
            }
            if largest.is_none_or(|(_, words)| block.num_words() > words) {
                largest = Some((i, block.num_words()));
            }
        }
        let largest = largest.map(|(i, _)| i);

        for (i, block) in blocks.iter_mut().enumerate() {
            if Some(i) == largest {
                block.set_is_content(true);
                block.add_label(labels::VERY_LIKELY_CONTENT);
            } else {
                block.set_is_content(false);
                block.add_label(labels::MIGHT_BE_CONTENT);
            }
        }

        if let (true, Some(largest)) = (self.expand_to_same_tag_level, largest) {
            self.expand(blocks, largest);
        }
        Ok(true)
    }
}

/// Keeps only the content block with the most full-text words.
///
/// Like [`KeepLargestBlockFilter`] without expansion, but a block's words
/// only count when its text density is at least 9. The kept block gets no
/// extra label.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepLargestFulltextBlockFilter;

impl Filter for KeepLargestFulltextBlockFilter {
    fn name(&self) -> &'static str {
        "keep-largest-fulltext-block"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let blocks = doc.blocks_mut();
        if blocks.len() < 2 {
            return Ok(false);
        }

        let mut largest: Option<(usize, usize)> = None;
        for (i, block) in blocks.iter().enumerate() {
            if !block.is_content() {
                continue;
            }
            let words = full_text_words(block);
            if largest.is_none_or(|(_, max)| words > max) {
                largest = Some((i, words));
            }
        }
        let Some((largest, _)) = largest else {
            return Ok(false);
        };

        for (i, block) in blocks.iter_mut().enumerate() {
            if i == largest {
                block.set_is_content(true);
            } else {
                block.set_is_content(false);
                block.add_label(labels::MIGHT_BE_CONTENT);
            }
        }
        Ok(true)
    }
}

/// Promotes the blocks between the title and the main content.
///
/// Takes the last [`labels::TITLE`] block up to and including the first
/// content block. If that is the content block itself nothing changes;
/// otherwise marks every block from the title up to the content as content
/// if it is labeled [`labels::MIGHT_BE_CONTENT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandTitleToContentFilter;

impl Filter for ExpandTitleToContentFilter {
    fn name(&self) -> &'static str {
        "expand-title-to-content"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let blocks = doc.blocks_mut();
        let Some(content_start) = blocks.iter().position(TextBlock::is_content) else {
            return Ok(false);
        };
        let Some(title) = blocks[..=content_start]
            .iter()
            .rposition(|b| b.has_label(labels::TITLE))
        else {
            return Ok(false);
        };
        if title == content_start {
            return Ok(false);
        }

        let mut changes = false;
        for block in &mut blocks[title..content_start] {
            if block.has_label(labels::MIGHT_BE_CONTENT) {
                changes |= block.set_is_content(true);
            }
        }
        Ok(changes)
    }
}

/// Promotes large blocks sharing the main block's tag level.
///
/// The main block is the first content block labeled
/// [`labels::VERY_LIKELY_CONTENT`]. Every other block at its exact tag level
/// with at least 100 words becomes content.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargeBlockSameTagLevelToContentFilter;

impl LargeBlockSameTagLevelToContentFilter {
    const MIN_WORDS: usize = 100;
}

impl Filter for LargeBlockSameTagLevelToContentFilter {
    fn name(&self) -> &'static str {
        "large-block-same-tag-level-to-content"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let blocks = doc.blocks_mut();
        let Some(level) = blocks
            .iter()
            .find(|b| b.is_content() && b.has_label(labels::VERY_LIKELY_CONTENT))
            .map(TextBlock::tag_level)
        else {
            return Ok(false);
        };

        let mut changes = false;
        for block in blocks.iter_mut() {
            if !block.is_content() && block.num_words() >= Self::MIN_WORDS && block.tag_level() == level {
                block.set_is_content(true);
                changes = true;
            }
        }
        Ok(changes)
    }
}

/// Promotes list items nested below the main content.
///
/// A block becomes content while it is nested deeper than the last
/// [`labels::VERY_LIKELY_CONTENT`] block, carries both
/// [`labels::MIGHT_BE_CONTENT`] and [`labels::LI`], and has no linked words.
/// Any other block ends the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAtEndFilter;

impl Filter for ListAtEndFilter {
    fn name(&self) -> &'static str {
        "list-at-end"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        let mut ceiling: Option<usize> = None;
        for block in doc.blocks_mut() {
            if block.is_content() && block.has_label(labels::VERY_LIKELY_CONTENT) {
                ceiling = Some(block.tag_level());
            } else if ceiling.is_some_and(|level| block.tag_level() > level)
                && block.has_label(labels::MIGHT_BE_CONTENT)
                && block.has_label(labels::LI)
                && block.link_density() == 0.0
            {
                block.set_is_content(true);
                changes = true;
            } else {
                ceiling = None;
            }
        }
        Ok(changes)
    }
}

/// Demotes headings trailing the content.
///
/// Walks backward over the content blocks; headings
/// ([`labels::HEADING`]) are demoted until the first content block that
/// is not a heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingHeadlineToBoilerplateFilter;

impl Filter for TrailingHeadlineToBoilerplateFilter {
    fn name(&self) -> &'static str {
        "trailing-headline-to-boilerplate"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changes = false;
        for block in doc.blocks_mut().iter_mut().rev() {
            if !block.is_content() {
                continue;
            }
            if !block.has_label(labels::HEADING) {
                break;
            }
            block.set_is_content(false);
            changes = true;
        }
        Ok(changes)
    }
}
