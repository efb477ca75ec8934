//! Result type for extraction output.

use serde::Serialize;

use crate::document::{TextDocument, TextDocumentStatistics};

/// Result of running an extractor over a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractResult {
    /// Content blocks' text, newline-joined.
    pub content_text: String,

    /// Boilerplate blocks' text, if requested via
    /// [`Options::include_boilerplate`](crate::Options::include_boilerplate).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boilerplate_text: Option<String>,

    /// Whether the pipeline changed the document.
    pub changed: bool,

    /// Whether the keep-everything fallback produced this result.
    pub used_fallback: bool,

    /// Word and block counts over the content blocks.
    pub statistics: TextDocumentStatistics,
}

impl ExtractResult {
    pub(crate) fn from_document(doc: &TextDocument, changed: bool, used_fallback: bool, include_boilerplate: bool) -> Self {
        Self {
            content_text: doc.content(),
            boilerplate_text: include_boilerplate.then(|| doc.text(false, true)),
            changed,
            used_fallback,
            statistics: TextDocumentStatistics::new(doc, true),
        }
    }
}
