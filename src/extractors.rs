//! Extractors: named, fixed pipelines of filters.
//!
//! An [`Extractor`] runs its filters in order against one document and
//! reports whether any of them changed it. The standard pipelines are built
//! once and shared; [`ExtractorKind`] names them.
//!
//! # Example
//!
//! ```rust
//! use rs_boilerpipe::{ExtractorKind, TextBlock, TextDocument};
//!
//! let mut doc = TextDocument::new(vec![
//!     TextBlock::builder("Home About Contact", 0).num_words(3).num_words_in_anchor_text(3).build()?,
//!     TextBlock::builder("A long paragraph of article text.", 1).num_words(50).build()?,
//! ]);
//! ExtractorKind::NumWordsRules.extractor().process(&mut doc)?;
//! assert_eq!(doc.content(), "A long paragraph of article text.");
//! # Ok::<(), rs_boilerpipe::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::document::TextDocument;
use crate::error::{Error, Result};
use crate::filters::{
    BlockProximityFusion, BoilerplateBlockFilter, CanolaClassifier, DensityRulesClassifier,
    DocumentTitleMatchClassifier, ExpandTitleToContentFilter, Filter, IgnoreBlocksAfterContentFilter,
    KeepLargestBlockFilter, LargeBlockSameTagLevelToContentFilter, ListAtEndFilter,
    MarkEverythingContentFilter, MinClauseWordsFilter, MinWordsFilter, NumWordsRulesClassifier,
    SimpleBlockFusion, SplitParagraphBlocksFilter, TerminatingBlocksFinder,
    TrailingHeadlineToBoilerplateFilter,
};

/// An ordered list of filters run as one extraction strategy.
pub struct Extractor {
    name: &'static str,
    filters: Vec<Box<dyn Filter>>,
}

impl Extractor {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            filters: Vec::new(),
        }
    }

    /// Appends a filter.
    #[must_use]
    pub fn with(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Names of the filters, in the order they run.
    #[must_use]
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Runs every filter in order.
    ///
    /// Returns `true` if any filter changed the document. A failing filter
    /// aborts the run and its error is returned unchanged.
    pub fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let span = tracing::debug_span!("extractor", name = self.name);
        let _enter = span.enter();

        let mut changed = false;
        for filter in &self.filters {
            let stage_changed = filter.process(doc)?;
            tracing::debug!(
                filter = filter.name(),
                changed = stage_changed,
                blocks = doc.len(),
                "stage finished"
            );
            changed |= stage_changed;
        }
        Ok(changed)
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field("name", &self.name)
            .field("filters", &self.filter_names())
            .finish()
    }
}

impl Filter for Extractor {
    fn name(&self) -> &'static str {
        self.name
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        Extractor::process(self, doc)
    }
}

// =============================================================================
// Standard pipelines
// =============================================================================

/// News article pipeline.
fn article(name: &'static str) -> Extractor {
    Extractor::new(name)
        .with(TerminatingBlocksFinder)
        .with(DocumentTitleMatchClassifier::from_document())
        .with(NumWordsRulesClassifier)
        .with(IgnoreBlocksAfterContentFilter::default())
        .with(TrailingHeadlineToBoilerplateFilter)
        .with(BlockProximityFusion::MAX_DISTANCE_1)
        .with(BoilerplateBlockFilter::KEEP_TITLE)
        .with(BlockProximityFusion::MAX_DISTANCE_1_CONTENT_ONLY_SAME_TAG_LEVEL)
        .with(KeepLargestBlockFilter::EXPAND_TO_SAME_TAG_LEVEL_MIN_WORDS)
        .with(ExpandTitleToContentFilter)
        .with(LargeBlockSameTagLevelToContentFilter)
        .with(ListAtEndFilter)
}

static ARTICLE: LazyLock<Extractor> = LazyLock::new(|| article("article"));

static ARTICLE_SENTENCES: LazyLock<Extractor> = LazyLock::new(|| {
    article("article-sentences")
        .with(SplitParagraphBlocksFilter)
        .with(MinClauseWordsFilter::default())
});

static DEFAULT: LazyLock<Extractor> = LazyLock::new(|| {
    Extractor::new("default")
        .with(SimpleBlockFusion)
        .with(BlockProximityFusion::MAX_DISTANCE_1)
        .with(DensityRulesClassifier)
});

static LARGEST_CONTENT: LazyLock<Extractor> = LazyLock::new(|| {
    Extractor::new("largest-content")
        .with(NumWordsRulesClassifier)
        .with(BlockProximityFusion::MAX_DISTANCE_1)
        .with(KeepLargestBlockFilter::KEEP_ONLY)
});

static CANOLA: LazyLock<Extractor> = LazyLock::new(|| Extractor::new("canola").with(CanolaClassifier));

static KEEP_EVERYTHING: LazyLock<Extractor> =
    LazyLock::new(|| Extractor::new("keep-everything").with(MarkEverythingContentFilter));

static NUM_WORDS_RULES: LazyLock<Extractor> =
    LazyLock::new(|| Extractor::new("num-words-rules").with(NumWordsRulesClassifier));

/// Marks every block as content, then drops blocks with fewer than
/// `min_words` words.
#[must_use]
pub fn keep_everything_with_min_words(min_words: usize) -> Extractor {
    Extractor::new("keep-everything-min-words")
        .with(MarkEverythingContentFilter)
        .with(MinWordsFilter::new(min_words))
}

/// The standard extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractorKind {
    /// Tuned for news articles.
    #[default]
    Article,
    /// [`ExtractorKind::Article`], then keeps only full sentences.
    ArticleSentences,
    /// Generic text-density rules.
    Default,
    /// Keeps the single largest text block.
    LargestContent,
    /// Classifier trained on the krdwrd Canola corpus.
    Canola,
    /// Everything is content.
    KeepEverything,
    /// Word-count rules only.
    NumWordsRules,
}

impl ExtractorKind {
    pub const ALL: [Self; 7] = [
        Self::Article,
        Self::ArticleSentences,
        Self::Default,
        Self::LargestContent,
        Self::Canola,
        Self::KeepEverything,
        Self::NumWordsRules,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::ArticleSentences => "article-sentences",
            Self::Default => "default",
            Self::LargestContent => "largest-content",
            Self::Canola => "canola",
            Self::KeepEverything => "keep-everything",
            Self::NumWordsRules => "num-words-rules",
        }
    }

    /// The shared pipeline for this kind.
    #[must_use]
    pub fn extractor(self) -> &'static Extractor {
        match self {
            Self::Article => &ARTICLE,
            Self::ArticleSentences => &ARTICLE_SENTENCES,
            Self::Default => &DEFAULT,
            Self::LargestContent => &LARGEST_CONTENT,
            Self::Canola => &CANOLA,
            Self::KeepEverything => &KEEP_EVERYTHING,
            Self::NumWordsRules => &NUM_WORDS_RULES,
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| Error::UnknownExtractor(s.to_string()))
    }
}
