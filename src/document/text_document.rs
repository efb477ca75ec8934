//! Text documents: an ordered sequence of blocks plus an optional title.

use serde::{Deserialize, Serialize};

use super::block::TextBlock;
use crate::error::{Error, Result};

/// A document made of [`TextBlock`]s in reading order.
///
/// The document owns its blocks. Filters mutate it in place: they reclassify
/// and relabel blocks, fuse neighbours and drop boilerplate, but never
/// reorder the surviving blocks.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::{TextBlock, TextDocument};
///
/// let mut doc = TextDocument::new(vec![
///     TextBlock::builder("Home | News | Sport", 0).num_words(5).num_words_in_anchor_text(5).build()?,
///     TextBlock::builder("A long article paragraph.", 1).num_words(4).is_content(true).build()?,
/// ]);
/// assert_eq!(doc.content(), "A long article paragraph.");
/// # Ok::<(), rs_boilerpipe::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default)]
    blocks: Vec<TextBlock>,
}

impl TextDocument {
    /// Creates a document without a title.
    #[must_use]
    pub fn new(blocks: Vec<TextBlock>) -> Self {
        Self { title: None, blocks }
    }

    /// Creates a document with the given "main" title.
    #[must_use]
    pub fn with_title(title: impl Into<String>, blocks: Vec<TextBlock>) -> Self {
        Self {
            title: Some(title.into()),
            blocks,
        }
    }

    /// Parses a JSON document (`{"title": .., "blocks": [..]}`) and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Serializes the document, including current classification and labels.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks that block offsets are strictly increasing in reading order.
    pub fn validate(&self) -> Result<()> {
        for pair in self.blocks.windows(2) {
            if pair[1].offset_start() <= pair[0].offset_end() {
                return Err(Error::InvalidBlock(format!(
                    "block offset {} does not follow block ending at {}",
                    pair[1].offset_start(),
                    pair[0].offset_end()
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Returns the blocks in reading order.
    #[must_use]
    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    /// Mutable access for filters.
    pub fn blocks_mut(&mut self) -> &mut Vec<TextBlock> {
        &mut self.blocks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Merges the block at `index` into the block at `into`, removing it.
    ///
    /// `into` must precede `index`.
    pub(crate) fn merge_into(&mut self, into: usize, index: usize) {
        debug_assert!(into < index);
        let absorbed = self.blocks.remove(index);
        tracing::trace!(
            into_start = self.blocks[into].offset_start(),
            absorbed_start = absorbed.offset_start(),
            absorbed_end = absorbed.offset_end(),
            "merging block"
        );
        self.blocks[into].merge_next(absorbed);
    }

    /// Returns the text of all content blocks, joined by newlines.
    #[must_use]
    pub fn content(&self) -> String {
        self.text(true, false)
    }

    /// Returns the text of content blocks, non-content blocks, or both.
    #[must_use]
    pub fn text(&self, include_content: bool, include_non_content: bool) -> String {
        self.blocks
            .iter()
            .filter(|b| if b.is_content() { include_content } else { include_non_content })
            .map(TextBlock::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the content blocks.
    pub fn content_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter(|b| b.is_content())
    }

    /// Returns a per-block dump of statistics, classification and labels.
    #[must_use]
    pub fn debug_string(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            out.push_str(&block.to_string());
            out.push('\n');
        }
        out
    }
}
