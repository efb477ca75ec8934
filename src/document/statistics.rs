//! Word and block statistics over a document.

use serde::Serialize;

use super::text_document::TextDocument;

/// Number of words and blocks in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextDocumentStatistics {
    /// Total words over the counted blocks.
    pub num_words: usize,
    /// Number of counted blocks.
    pub num_blocks: usize,
}

impl TextDocumentStatistics {
    /// Computes statistics over all blocks, or content blocks only.
    #[must_use]
    pub fn new(doc: &TextDocument, content_only: bool) -> Self {
        doc.blocks()
            .iter()
            .filter(|b| !content_only || b.is_content())
            .fold(Self::default(), |acc, b| Self {
                num_words: acc.num_words + b.num_words(),
                num_blocks: acc.num_blocks + 1,
            })
    }

    /// Average number of words per block; `0` for an empty selection.
    #[must_use]
    pub fn avg_num_words(&self) -> f32 {
        if self.num_blocks == 0 {
            0.0
        } else {
            self.num_words as f32 / self.num_blocks as f32
        }
    }
}
