//! Extraction entry point: runs the configured pipeline and the optional
//! keep-everything fallback.

use crate::document::TextDocument;
use crate::error::Result;
use crate::extractors::{keep_everything_with_min_words, ExtractorKind};
use crate::options::Options;
use crate::result::ExtractResult;

pub(crate) fn extract_document(doc: &mut TextDocument, options: &Options) -> Result<ExtractResult> {
    doc.validate()?;
    tracing::debug!(
        extractor = %options.extractor,
        blocks = doc.len(),
        title = doc.title().is_some(),
        "starting extraction"
    );

    // Backup before the pipeline fuses and drops blocks; the fallback
    // starts over from the producer's segmentation.
    let backup = options.keep_everything_fallback.then(|| doc.clone());

    let mut changed = options.extractor.extractor().process(doc)?;
    let mut used_fallback = false;

    if let Some(backup) = backup {
        if doc.content_blocks().next().is_none() {
            tracing::debug!(
                extractor = %options.extractor,
                min_words = options.fallback_min_words,
                "no content left; falling back to keep-everything"
            );
            *doc = backup;
            changed = if options.fallback_min_words > 0 {
                keep_everything_with_min_words(options.fallback_min_words).process(doc)?
            } else {
                ExtractorKind::KeepEverything.extractor().process(doc)?
            };
            used_fallback = true;
        }
    }

    let result = ExtractResult::from_document(doc, changed, used_fallback, options.include_boilerplate);
    tracing::debug!(
        content_blocks = result.statistics.num_blocks,
        content_words = result.statistics.num_words,
        "extraction finished"
    );
    Ok(result)
}
