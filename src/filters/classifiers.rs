//! Rule-based content classifiers.
//!
//! Each classifier looks at a block and its two neighbours and decides
//! whether the block is content. The thresholds were learned with a
//! decision-tree learner on shallow text features ("Boilerplate Detection
//! using Shallow Text Features", Kohlschütter et al. 2010) and are kept
//! exactly, including inclusive comparisons.
//!
//! Densities are stored as `f32` and compared against `f64` thresholds.

use super::{classify_each, Filter};
use crate::document::{TextBlock, TextDocument};
use crate::error::Result;

/// Classifies blocks using text and link densities.
#[derive(Debug, Clone, Copy, Default)]
pub struct DensityRulesClassifier;

impl DensityRulesClassifier {
    /// Decides whether `curr` is content given its neighbours.
    #[must_use]
    pub fn is_content(prev: &TextBlock, curr: &TextBlock, next: &TextBlock) -> bool {
        let curr_ld = f64::from(curr.link_density());
        let prev_ld = f64::from(prev.link_density());
        let curr_td = f64::from(curr.text_density());
        let prev_td = f64::from(prev.text_density());
        let next_td = f64::from(next.text_density());

        if curr_ld <= 0.333_333 {
            if prev_ld <= 0.555_556 {
                if curr_td <= 9.0 {
                    !(next_td <= 10.0 && prev_td <= 4.0)
                } else {
                    next_td != 0.0
                }
            } else {
                next_td > 11.0
            }
        } else {
            false
        }
    }
}

impl Filter for DensityRulesClassifier {
    fn name(&self) -> &'static str {
        "density-rules-classifier"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        Ok(classify_each(doc, Self::is_content))
    }
}

/// Classifies blocks using link densities and word counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumWordsRulesClassifier;

impl NumWordsRulesClassifier {
    /// Decides whether `curr` is content given its neighbours.
    #[must_use]
    pub fn is_content(prev: &TextBlock, curr: &TextBlock, next: &TextBlock) -> bool {
        if f64::from(curr.link_density()) <= 0.333_333 {
            if f64::from(prev.link_density()) <= 0.555_556 {
                if curr.num_words() <= 16 {
                    !(next.num_words() <= 15 && prev.num_words() <= 4)
                } else {
                    true
                }
            } else if curr.num_words() <= 40 {
                next.num_words() > 17
            } else {
                true
            }
        } else {
            false
        }
    }
}

impl Filter for NumWordsRulesClassifier {
    fn name(&self) -> &'static str {
        "num-words-rules-classifier"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        Ok(classify_each(doc, Self::is_content))
    }
}

/// Classifier trained on the krdwrd Canola corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanolaClassifier;

impl CanolaClassifier {
    /// Decides whether `curr` is content given its neighbours.
    #[must_use]
    pub fn is_content(prev: &TextBlock, curr: &TextBlock, next: &TextBlock) -> bool {
        (curr.link_density() > 0.0 && next.num_words() > 11)
            || curr.num_words() > 19
            || (next.num_words() > 6
                && next.link_density() == 0.0
                && prev.link_density() == 0.0
                && (curr.num_words() > 6 || prev.num_words() > 7 || next.num_words() > 19))
    }
}

impl Filter for CanolaClassifier {
    fn name(&self) -> &'static str {
        "canola-classifier"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        Ok(classify_each(doc, Self::is_content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::EMPTY_START;
    use crate::filters::test_support::{block, flags};

    /// Block with the given text density (single line) and link density
    /// `anchor / words`.
    fn dense(words: usize, anchor: usize) -> TextBlock {
        block(0, words, anchor)
    }

    // === Density rules ===

    #[test]
    fn density_link_heavy_block_is_never_content() {
        assert!(!DensityRulesClassifier::is_content(&dense(20, 0), &dense(20, 10), &dense(20, 0)));
    }

    #[test]
    fn density_link_density_boundary_uses_inclusive_branch() {
        // 333333 / 1000000 is the f32 nearest to 0.333333.
        let curr = dense(1_000_000, 333_333);
        assert!(DensityRulesClassifier::is_content(&dense(5, 0), &curr, &dense(20, 0)));
        // 1/3 lies above the threshold.
        assert!(!DensityRulesClassifier::is_content(&dense(5, 0), &dense(3, 1), &dense(20, 0)));
    }

    #[test]
    fn density_text_density_nine_takes_low_branch() {
        // curr td 9 -> low branch: next td 10 and prev td 4 -> not content.
        assert!(!DensityRulesClassifier::is_content(&dense(4, 0), &dense(9, 0), &dense(10, 0)));
        // prev td 5 -> content.
        assert!(DensityRulesClassifier::is_content(&dense(5, 0), &dense(9, 0), &dense(10, 0)));
        // next td 11 -> content.
        assert!(DensityRulesClassifier::is_content(&dense(4, 0), &dense(9, 0), &dense(11, 0)));
    }

    #[test]
    fn density_dense_block_needs_non_empty_next() {
        assert!(DensityRulesClassifier::is_content(&dense(4, 0), &dense(10, 0), &dense(1, 0)));
        assert!(!DensityRulesClassifier::is_content(&dense(4, 0), &dense(10, 0), &EMPTY_START));
    }

    #[test]
    fn density_after_link_heavy_block_needs_dense_next() {
        let prev = dense(10, 6);
        assert!(!DensityRulesClassifier::is_content(&prev, &dense(30, 0), &dense(11, 0)));
        assert!(DensityRulesClassifier::is_content(&prev, &dense(30, 0), &dense(12, 0)));
    }

    #[test]
    fn density_prev_link_density_boundary() {
        // 5/9 as f32 is still <= 0.555556.
        let prev = dense(9, 5);
        assert!(DensityRulesClassifier::is_content(&prev, &dense(10, 0), &dense(1, 0)));
    }

    // === Num words rules ===

    #[test]
    fn num_words_short_block_between_short_blocks_is_boilerplate() {
        assert!(!NumWordsRulesClassifier::is_content(&dense(4, 0), &dense(16, 0), &dense(15, 0)));
        assert!(NumWordsRulesClassifier::is_content(&dense(5, 0), &dense(16, 0), &dense(15, 0)));
        assert!(NumWordsRulesClassifier::is_content(&dense(4, 0), &dense(16, 0), &dense(16, 0)));
    }

    #[test]
    fn num_words_long_block_is_content() {
        assert!(NumWordsRulesClassifier::is_content(&EMPTY_START, &dense(17, 0), &EMPTY_START));
    }

    #[test]
    fn num_words_after_link_heavy_block() {
        let prev = dense(10, 9);
        assert!(!NumWordsRulesClassifier::is_content(&prev, &dense(40, 0), &dense(17, 0)));
        assert!(NumWordsRulesClassifier::is_content(&prev, &dense(40, 0), &dense(18, 0)));
        assert!(NumWordsRulesClassifier::is_content(&prev, &dense(41, 0), &EMPTY_START));
    }

    #[test]
    fn num_words_link_heavy_block_is_boilerplate() {
        assert!(!NumWordsRulesClassifier::is_content(&EMPTY_START, &dense(100, 50), &EMPTY_START));
    }

    // === Canola ===

    #[test]
    fn canola_long_block_is_content() {
        assert!(CanolaClassifier::is_content(&EMPTY_START, &dense(20, 20), &EMPTY_START));
        assert!(!CanolaClassifier::is_content(&EMPTY_START, &dense(19, 19), &EMPTY_START));
    }

    #[test]
    fn canola_linked_block_before_long_block_is_content() {
        assert!(CanolaClassifier::is_content(&EMPTY_START, &dense(3, 1), &dense(12, 0)));
        assert!(!CanolaClassifier::is_content(&EMPTY_START, &dense(3, 0), &dense(6, 0)));
    }

    #[test]
    fn canola_link_free_neighbourhood() {
        assert!(CanolaClassifier::is_content(&dense(2, 0), &dense(7, 0), &dense(7, 0)));
        assert!(CanolaClassifier::is_content(&dense(8, 0), &dense(2, 0), &dense(7, 0)));
        assert!(!CanolaClassifier::is_content(&dense(8, 1), &dense(7, 0), &dense(7, 0)));
    }

    // === As filters ===

    #[test]
    fn classifiers_process_whole_document() {
        let mut doc = TextDocument::new(vec![block(0, 3, 3), block(1, 50, 0), block(2, 4, 4)]);
        assert!(NumWordsRulesClassifier.process(&mut doc).unwrap_or_else(|e| panic!("{e}")));
        assert_eq!(flags(&doc), vec![false, true, false]);

        // A second run changes nothing.
        assert!(!NumWordsRulesClassifier.process(&mut doc).unwrap_or_else(|e| panic!("{e}")));
    }
}
