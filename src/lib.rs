//! # rs-boilerpipe
//!
//! Boilerplate removal over documents that are already segmented into text
//! blocks.
//!
//! An upstream producer (an HTML parser, usually) splits a page into
//! [`TextBlock`]s and records per block the word count, the number of words
//! inside links, wrapped-line statistics and the markup nesting depth. An
//! extractor then decides which blocks are main content and which are
//! navigation, ads, footers or comment sections.
//!
//! ## Quick Start
//!
//! Offsets are block positions in the producer's full sequence; here the
//! blocks in between were dropped upstream.
//!
//! ```rust
//! use rs_boilerpipe::{extract, TextBlock, TextDocument};
//!
//! let mut doc = TextDocument::new(vec![
//!     TextBlock::builder("Home News Sport Weather", 0).num_words(4).num_words_in_anchor_text(4).build()?,
//!     TextBlock::builder("The body of the article.", 3).num_words(80).build()?,
//!     TextBlock::builder("Contact Imprint Privacy", 6).num_words(3).num_words_in_anchor_text(3).build()?,
//! ]);
//!
//! let result = extract(&mut doc)?;
//! assert_eq!(result.content_text, "The body of the article.");
//! # Ok::<(), rs_boilerpipe::Error>(())
//! ```
//!
//! ## Building Blocks
//!
//! - [`document`]: blocks, documents and statistics
//! - [`filters`]: the individual classification, fusion and selection stages
//! - [`extractors`]: the standard pipelines composed from those stages
//!
//! Filters and extractors hold configuration only. They can be shared
//! between threads as long as every call gets its own document.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Document model: blocks, documents and statistics.
pub mod document;

/// Well-known block labels.
pub mod labels;

/// Composable processing stages.
pub mod filters;

/// Named pipelines of filters.
pub mod extractors;

// Public API - re-exports
pub use document::{TextBlock, TextDocument, TextDocumentStatistics};
pub use error::{Error, Result};
pub use extractors::{Extractor, ExtractorKind};
pub use filters::Filter;
pub use options::Options;
pub use result::ExtractResult;

/// Extracts the main content using the default options (article pipeline).
///
/// The document is processed in place; afterwards its blocks reflect the
/// final classification.
///
/// # Errors
///
/// Returns [`Error::InvalidBlock`] if block offsets are not strictly
/// increasing, or any error raised by a filter stage.
pub fn extract(doc: &mut TextDocument) -> Result<ExtractResult> {
    extract_with_options(doc, &Options::default())
}

/// Extracts the main content with custom options.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::{extract_with_options, ExtractorKind, Options, TextBlock, TextDocument};
///
/// let mut doc = TextDocument::new(vec![
///     TextBlock::builder("Menu", 0).num_words(1).num_words_in_anchor_text(1).build()?,
/// ]);
/// let options = Options {
///     extractor: ExtractorKind::Default,
///     keep_everything_fallback: true,
///     ..Options::default()
/// };
/// let result = extract_with_options(&mut doc, &options)?;
/// assert!(result.used_fallback);
/// assert_eq!(result.content_text, "Menu");
/// # Ok::<(), rs_boilerpipe::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(doc: &mut TextDocument, options: &Options) -> Result<ExtractResult> {
    extract::extract_document(doc, options)
}
