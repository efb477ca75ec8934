//! Configuration options for content extraction.
//!
//! The `Options` struct selects the extractor pipeline and controls what
//! happens around it. Filter thresholds are fixed per pipeline.

use serde::{Deserialize, Serialize};

use crate::extractors::ExtractorKind;

/// Configuration options for [`extract_with_options`](crate::extract_with_options).
///
/// All fields are public; missing fields take their defaults when loaded
/// from JSON.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::{ExtractorKind, Options};
///
/// let options = Options {
///     extractor: ExtractorKind::LargestContent,
///     keep_everything_fallback: true,
///     ..Options::default()
/// };
/// assert_eq!(options.fallback_min_words, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Pipeline to run.
    ///
    /// Default: [`ExtractorKind::Article`]
    pub extractor: ExtractorKind,

    /// Retry with the keep-everything pipeline when no content is left.
    ///
    /// The retry starts from the document as it was before extraction.
    ///
    /// Default: `false`
    pub keep_everything_fallback: bool,

    /// Minimum words per block in the fallback; `0` keeps every block.
    ///
    /// Default: `0`
    pub fallback_min_words: usize,

    /// Also return the text of the blocks classified as boilerplate.
    ///
    /// Default: `false`
    pub include_boilerplate: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            extractor: ExtractorKind::Article,
            keep_everything_fallback: false,
            fallback_min_words: 0,
            include_boilerplate: false,
        }
    }
}

impl Options {
    /// Parses options from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
