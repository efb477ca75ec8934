//! Block fusion: merging adjacent blocks into one.
//!
//! Every fusion filter walks the sequence with a "previous" cursor. When the
//! current block is merged, it is removed and the cursor stays on the grown
//! block, so the next comparison sees the merged statistics.

use std::collections::BTreeSet;

use super::Filter;
use crate::document::{TextBlock, TextDocument};
use crate::error::Result;
use crate::labels;

/// Merges neighbours whose text densities are exactly equal.
///
/// Densities are ratios of small integers, so equal values identify runs of
/// identically wrapped text; the comparison is bit-exact on purpose.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleBlockFusion;

impl Filter for SimpleBlockFusion {
    fn name(&self) -> &'static str {
        "simple-block-fusion"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        if doc.len() < 2 {
            return Ok(false);
        }
        let mut changes = false;
        let mut prev = 0;
        let mut i = 1;
        while i < doc.len() {
            let blocks = doc.blocks();
            if blocks[prev].text_density().to_bits() == blocks[i].text_density().to_bits() {
                doc.merge_into(prev, i);
                changes = true;
            } else {
                prev = i;
                i += 1;
            }
        }
        Ok(changes)
    }
}

/// Merges content blocks that lie close together in the original sequence.
///
/// The distance between two blocks is the number of original block
/// positions between them (`next.offset_start - prev.offset_end - 1`), so it
/// only exceeds zero after upstream filters removed blocks. Non-content
/// blocks are never merged; they just become the new "previous" block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockProximityFusion {
    max_blocks_distance: usize,
    content_only: bool,
    same_tag_level_only: bool,
}

impl BlockProximityFusion {
    pub const MAX_DISTANCE_1: Self = Self::new(1, false, false);
    pub const MAX_DISTANCE_1_SAME_TAG_LEVEL: Self = Self::new(1, false, true);
    pub const MAX_DISTANCE_1_CONTENT_ONLY: Self = Self::new(1, true, false);
    pub const MAX_DISTANCE_1_CONTENT_ONLY_SAME_TAG_LEVEL: Self = Self::new(1, true, true);

    /// Creates a fusion filter.
    ///
    /// With `content_only`, the previous block must be content too; with
    /// `same_tag_level_only`, both blocks must sit at the same tag level.
    #[must_use]
    pub const fn new(max_blocks_distance: usize, content_only: bool, same_tag_level_only: bool) -> Self {
        Self {
            max_blocks_distance,
            content_only,
            same_tag_level_only,
        }
    }

    fn may_merge(&self, prev: &TextBlock, block: &TextBlock) -> bool {
        // Offsets of blocks split from one parent coincide; treat as adjacent.
        let distance = block
            .offset_start()
            .saturating_sub(prev.offset_end())
            .saturating_sub(1);
        if distance > self.max_blocks_distance {
            return false;
        }
        if self.content_only && !(prev.is_content() && block.is_content()) {
            return false;
        }
        !(self.same_tag_level_only && prev.tag_level() != block.tag_level())
    }
}

impl Filter for BlockProximityFusion {
    fn name(&self) -> &'static str {
        "block-proximity-fusion"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        if doc.len() < 2 {
            return Ok(false);
        }

        let mut prev = if self.content_only {
            match doc.blocks().iter().position(TextBlock::is_content) {
                Some(first) => first,
                None => return Ok(false),
            }
        } else {
            0
        };

        let mut changes = false;
        let mut i = prev + 1;
        while i < doc.len() {
            let blocks = doc.blocks();
            if blocks[i].is_content() && self.may_merge(&blocks[prev], &blocks[i]) {
                doc.merge_into(prev, i);
                changes = true;
            } else {
                prev = i;
                i += 1;
            }
        }
        Ok(changes)
    }
}

/// Fuses text blocks into a preceding content block until nothing changes.
///
/// A block is absorbed when its link density is below `0.56` and it is not
/// labeled [`labels::STRICTLY_NOT_CONTENT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFusion;

impl ContentFusion {
    const MAX_LINK_DENSITY: f64 = 0.56;
}

impl Filter for ContentFusion {
    fn name(&self) -> &'static str {
        "content-fusion"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        if doc.len() < 2 {
            return Ok(false);
        }

        let mut changes = false;
        loop {
            let mut pass_changes = false;
            let mut prev = 0;
            let mut i = 1;
            while i < doc.len() {
                let blocks = doc.blocks();
                let block = &blocks[i];
                if blocks[prev].is_content()
                    && f64::from(block.link_density()) < Self::MAX_LINK_DENSITY
                    && !block.has_label(labels::STRICTLY_NOT_CONTENT)
                {
                    doc.merge_into(prev, i);
                    pass_changes = true;
                } else {
                    prev = i;
                    i += 1;
                }
            }
            if !pass_changes {
                break;
            }
            changes = true;
        }
        Ok(changes)
    }
}

/// Fuses neighbours that carry the same markup labels.
///
/// Only labels starting with [`labels::MARKUP_PREFIX`] are compared. Blocks
/// without any label never fuse.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelFusion;

impl LabelFusion {
    fn markup_labels(block: &TextBlock) -> BTreeSet<&str> {
        block
            .labels()
            .iter()
            .map(String::as_str)
            .filter(|l| labels::is_markup_label(l))
            .collect()
    }

    fn equal_labels(a: &TextBlock, b: &TextBlock) -> bool {
        if a.labels().is_empty() || b.labels().is_empty() {
            return false;
        }
        Self::markup_labels(a) == Self::markup_labels(b)
    }
}

impl Filter for LabelFusion {
    fn name(&self) -> &'static str {
        "label-fusion"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        if doc.len() < 2 {
            return Ok(false);
        }
        let mut changes = false;
        let mut prev = 0;
        let mut i = 1;
        while i < doc.len() {
            let blocks = doc.blocks();
            if Self::equal_labels(&blocks[prev], &blocks[i]) {
                doc.merge_into(prev, i);
                changes = true;
            } else {
                prev = i;
                i += 1;
            }
        }
        Ok(changes)
    }
}
