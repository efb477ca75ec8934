//! Text blocks: the atomic unit the filters classify and fuse.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sentinel preceding the first block of every document.
///
/// Zero words, never content, offset `0`. Filters scanning a
/// `(previous, current, next)` window use it at the left boundary.
pub static EMPTY_START: TextBlock = TextBlock::sentinel(0);

/// Sentinel following the last block of every document.
pub static EMPTY_END: TextBlock = TextBlock::sentinel(usize::MAX);

/// A block of text with word and link statistics.
///
/// A block is either an atomic text run produced upstream (text not
/// interrupted by block-level markup) or the fusion of several such runs.
///
/// # Densities
///
/// - `text_density = num_words_in_wrapped_lines / num_wrapped_lines`
/// - `link_density = num_words_in_anchor_text / num_words` (`0` without words)
///
/// When no wrapped-line statistics are supplied, the block is treated as a
/// single line holding all of its words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTextBlock", into = "RawTextBlock")]
pub struct TextBlock {
    text: String,
    is_content: bool,
    labels: BTreeSet<String>,
    offset_start: usize,
    offset_end: usize,
    num_words: usize,
    num_words_in_anchor_text: usize,
    num_words_in_wrapped_lines: usize,
    num_wrapped_lines: usize,
    tag_level: usize,
    /// Indices of the producer's leaf elements this block was built from.
    /// Provenance only; empty when unknown.
    contained_elements: BTreeSet<usize>,
    text_density: f32,
    link_density: f32,
}

impl TextBlock {
    const fn sentinel(offset: usize) -> Self {
        Self {
            text: String::new(),
            is_content: false,
            labels: BTreeSet::new(),
            offset_start: offset,
            offset_end: offset,
            num_words: 0,
            num_words_in_anchor_text: 0,
            num_words_in_wrapped_lines: 0,
            num_wrapped_lines: 1,
            tag_level: 0,
            contained_elements: BTreeSet::new(),
            text_density: 0.0,
            link_density: 0.0,
        }
    }

    /// Starts building a block for `text` at ordinal position `offset`.
    #[must_use]
    pub fn builder(text: impl Into<String>, offset: usize) -> TextBlockBuilder {
        TextBlockBuilder::new(text.into(), offset)
    }

    /// Creates a block from bare text, counting whitespace-separated words.
    ///
    /// No anchor words, tag level `0`, offset `0`.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let num_words = text.split_whitespace().count();
        let mut block = Self::sentinel(0);
        block.text = text;
        block.num_words = num_words;
        block.init_densities();
        block
    }

    fn init_densities(&mut self) {
        if self.num_words_in_wrapped_lines == 0 {
            self.num_words_in_wrapped_lines = self.num_words;
            self.num_wrapped_lines = 1;
        }
        self.text_density = self.num_words_in_wrapped_lines as f32 / self.num_wrapped_lines as f32;
        self.link_density = if self.num_words == 0 {
            0.0
        } else {
            self.num_words_in_anchor_text as f32 / self.num_words as f32
        };
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_content(&self) -> bool {
        self.is_content
    }

    /// Sets the content flag, returning `true` if the value changed.
    pub fn set_is_content(&mut self, is_content: bool) -> bool {
        if self.is_content == is_content {
            false
        } else {
            self.is_content = is_content;
            true
        }
    }

    #[must_use]
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    #[must_use]
    pub fn num_words_in_anchor_text(&self) -> usize {
        self.num_words_in_anchor_text
    }

    #[must_use]
    pub fn num_words_in_wrapped_lines(&self) -> usize {
        self.num_words_in_wrapped_lines
    }

    #[must_use]
    pub fn num_wrapped_lines(&self) -> usize {
        self.num_wrapped_lines
    }

    #[must_use]
    pub fn text_density(&self) -> f32 {
        self.text_density
    }

    #[must_use]
    pub fn link_density(&self) -> f32 {
        self.link_density
    }

    #[must_use]
    pub fn offset_start(&self) -> usize {
        self.offset_start
    }

    #[must_use]
    pub fn offset_end(&self) -> usize {
        self.offset_end
    }

    #[must_use]
    pub fn tag_level(&self) -> usize {
        self.tag_level
    }

    pub fn set_tag_level(&mut self, tag_level: usize) {
        self.tag_level = tag_level;
    }

    #[must_use]
    pub fn contained_elements(&self) -> &BTreeSet<usize> {
        &self.contained_elements
    }

    #[must_use]
    pub fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Adds a label; returns `true` if it was not present yet.
    pub fn add_label(&mut self, label: impl Into<String>) -> bool {
        self.labels.insert(label.into())
    }

    pub fn add_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
    }

    /// Removes a label; returns `true` if it was present.
    pub fn remove_label(&mut self, label: &str) -> bool {
        self.labels.remove(label)
    }

    /// Absorbs `other`, which directly follows this block.
    ///
    /// Texts are joined with a newline and all word statistics are summed.
    /// Offsets span both blocks, the tag level is the shallower of the two,
    /// labels and contained elements are unioned and the block is content if
    /// either input was.
    pub fn merge_next(&mut self, other: TextBlock) {
        self.text.push('\n');
        self.text.push_str(&other.text);

        self.num_words += other.num_words;
        self.num_words_in_anchor_text += other.num_words_in_anchor_text;
        self.num_words_in_wrapped_lines += other.num_words_in_wrapped_lines;
        self.num_wrapped_lines += other.num_wrapped_lines;

        self.offset_start = self.offset_start.min(other.offset_start);
        self.offset_end = self.offset_end.max(other.offset_end);

        self.init_densities();

        self.is_content |= other.is_content;
        self.contained_elements.extend(other.contained_elements);
        self.labels.extend(other.labels);
        self.tag_level = self.tag_level.min(other.tag_level);
    }
}

impl fmt::Display for TextBlock {
    /// Debug-style rendering: `[start-end;tl=..;nw=..;nwl=..;ld=..]\tCONTENT,{labels}\ntext`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        write!(
            f,
            "[{}-{};tl={}; nw={};nwl={};ld={}]\t{},{{{}}}\n{}",
            self.offset_start,
            self.offset_end,
            self.tag_level,
            self.num_words,
            self.num_wrapped_lines,
            self.link_density,
            if self.is_content { "CONTENT" } else { "boilerplate" },
            labels.join(", "),
            self.text
        )
    }
}

/// Builder for [`TextBlock`], validating producer statistics on `build`.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::TextBlock;
///
/// let block = TextBlock::builder("Read more about it", 3)
///     .num_words(4)
///     .num_words_in_anchor_text(2)
///     .tag_level(5)
///     .build()?;
/// assert_eq!(block.link_density(), 0.5);
/// # Ok::<(), rs_boilerpipe::Error>(())
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct TextBlockBuilder {
    input: RawTextBlock,
}

impl TextBlockBuilder {
    fn new(text: String, offset: usize) -> Self {
        Self {
            input: RawTextBlock {
                text,
                offset,
                ..RawTextBlock::default()
            },
        }
    }

    pub fn num_words(mut self, num_words: usize) -> Self {
        self.input.num_words = num_words;
        self
    }

    pub fn num_words_in_anchor_text(mut self, num_words: usize) -> Self {
        self.input.num_words_in_anchor_text = num_words;
        self
    }

    /// Sets the wrapped-line statistics (words in wrapped lines, line count).
    pub fn wrapped_lines(mut self, num_words_in_wrapped_lines: usize, num_wrapped_lines: usize) -> Self {
        self.input.num_words_in_wrapped_lines = num_words_in_wrapped_lines;
        self.input.num_wrapped_lines = num_wrapped_lines;
        self
    }

    pub fn tag_level(mut self, tag_level: usize) -> Self {
        self.input.tag_level = tag_level;
        self
    }

    pub fn is_content(mut self, is_content: bool) -> Self {
        self.input.is_content = is_content;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.input.labels.insert(label.into());
        self
    }

    pub fn contained_elements(mut self, elements: impl IntoIterator<Item = usize>) -> Self {
        self.input.contained_elements.extend(elements);
        self
    }

    /// Validates the statistics and computes the densities.
    pub fn build(self) -> Result<TextBlock> {
        TextBlock::try_from(self.input)
    }
}

/// Plain, producer-facing form of a block.
///
/// This is the shape blocks take in JSON documents. Densities are not part
/// of it; they are recomputed when converting into a [`TextBlock`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTextBlock {
    pub text: String,
    pub offset: usize,
    /// Only set for blocks that span several positions after fusion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_end: Option<usize>,
    pub num_words: usize,
    pub num_words_in_anchor_text: usize,
    pub num_words_in_wrapped_lines: usize,
    pub num_wrapped_lines: usize,
    pub tag_level: usize,
    pub is_content: bool,
    pub labels: BTreeSet<String>,
    pub contained_elements: BTreeSet<usize>,
}

impl From<TextBlock> for RawTextBlock {
    fn from(block: TextBlock) -> Self {
        Self {
            text: block.text,
            offset: block.offset_start,
            offset_end: (block.offset_end != block.offset_start).then_some(block.offset_end),
            num_words: block.num_words,
            num_words_in_anchor_text: block.num_words_in_anchor_text,
            num_words_in_wrapped_lines: block.num_words_in_wrapped_lines,
            num_wrapped_lines: block.num_wrapped_lines,
            tag_level: block.tag_level,
            is_content: block.is_content,
            labels: block.labels,
            contained_elements: block.contained_elements,
        }
    }
}

impl TryFrom<RawTextBlock> for TextBlock {
    type Error = Error;

    fn try_from(input: RawTextBlock) -> Result<Self> {
        if input.num_words_in_anchor_text > input.num_words {
            return Err(Error::InvalidBlock(format!(
                "block at offset {} has {} anchor words but only {} words",
                input.offset, input.num_words_in_anchor_text, input.num_words
            )));
        }
        if input.num_words_in_wrapped_lines > 0 && input.num_wrapped_lines == 0 {
            return Err(Error::InvalidBlock(format!(
                "block at offset {} has {} words in wrapped lines but no wrapped lines",
                input.offset, input.num_words_in_wrapped_lines
            )));
        }
        let offset_end = input.offset_end.unwrap_or(input.offset);
        if offset_end < input.offset {
            return Err(Error::InvalidBlock(format!(
                "block offsets are reversed ({}-{offset_end})",
                input.offset
            )));
        }

        let mut block = TextBlock {
            text: input.text,
            is_content: input.is_content,
            labels: input.labels,
            offset_start: input.offset,
            offset_end,
            num_words: input.num_words,
            num_words_in_anchor_text: input.num_words_in_anchor_text,
            num_words_in_wrapped_lines: input.num_words_in_wrapped_lines,
            num_wrapped_lines: input.num_wrapped_lines,
            tag_level: input.tag_level,
            contained_elements: input.contained_elements,
            text_density: 0.0,
            link_density: 0.0,
        };
        block.init_densities();
        Ok(block)
    }
}
