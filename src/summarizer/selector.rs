//! Keyword-coverage sentence selection for summarization
//!
//! Ranks units by how many of the text's keywords they contain, then walks
//! the ranking and keeps units that are not near-duplicates of anything
//! already kept. If deduplication starves the result, a top-up pass re-scans
//! every unit in document order to fill the remaining slots.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::bullet::{format_bullet, DEFAULT_MAX_BULLET_LEN};
use super::dedup::{Deduplicator, SUMMARY_SIMILARITY_THRESHOLD};
use super::scorer::{rank_units, DEFAULT_POSITION_WEIGHT};
use crate::nlp::keywords::{KeywordExtractor, KeywordRanking, DEFAULT_TOP_K};
use crate::nlp::segmenter::Segmenter;
use crate::types::TextUnit;

/// Configuration for bullet selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Maximum number of bullets to return
    pub max_bullets: usize,
    /// Number of top keywords used for scoring
    pub keyword_top_k: usize,
    /// Jaccard similarity at or above which a unit is a duplicate
    pub similarity_threshold: f64,
    /// Constant added to every unit score
    pub position_weight: f64,
    /// Maximum bullet length in characters
    pub max_bullet_len: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_bullets: 7,
            keyword_top_k: DEFAULT_TOP_K,
            similarity_threshold: SUMMARY_SIMILARITY_THRESHOLD,
            position_weight: DEFAULT_POSITION_WEIGHT,
            max_bullet_len: DEFAULT_MAX_BULLET_LEN,
        }
    }
}

/// How a bullet made it into the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPass {
    /// Picked while walking the score ranking
    Ranked,
    /// Picked by the document-order top-up pass
    TopUp,
    /// The text had no keywords; leading units were taken as-is
    Leading,
}

/// A selected bullet with its provenance
#[derive(Debug, Clone, Serialize)]
pub struct SelectedBullet {
    /// Formatted bullet text
    pub text: String,
    /// Index of the source unit
    pub index: usize,
    /// Relevance score of the source unit (0 on the leading-units path)
    pub score: f64,
    pub pass: SelectionPass,
}

/// Result of bullet selection
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryResult {
    /// Bullets in selection order
    pub bullets: Vec<SelectedBullet>,
}

impl SummaryResult {
    /// Bullet texts in selection order
    pub fn texts(&self) -> Vec<String> {
        self.bullets.iter().map(|b| b.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }
}

/// Bookkeeping shared by the ranked and top-up passes
struct Selection {
    max: usize,
    max_len: usize,
    dedup: Deduplicator,
    seen: FxHashSet<String>,
    bullets: Vec<SelectedBullet>,
}

impl Selection {
    fn new(config: &SummarizerConfig) -> Self {
        Self {
            max: config.max_bullets,
            max_len: config.max_bullet_len,
            dedup: Deduplicator::new(config.similarity_threshold),
            seen: FxHashSet::default(),
            bullets: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.bullets.len() >= self.max
    }

    /// Format and keep `unit` if it is neither similar to a kept unit nor a
    /// case-insensitive repeat of a kept bullet.
    fn consider(&mut self, unit: &TextUnit, score: f64, pass: SelectionPass, dedup: bool) {
        if dedup && self.dedup.is_near_duplicate(&unit.text) {
            return;
        }
        let text = format_bullet(&unit.text, self.max_len);
        if text.is_empty() || !self.seen.insert(text.to_lowercase()) {
            return;
        }
        self.dedup.accept(&unit.text);
        self.bullets.push(SelectedBullet {
            text,
            index: unit.index,
            score,
            pass,
        });
    }
}

/// Extractive summarizer
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
    segmenter: Segmenter,
    extractor: KeywordExtractor,
}

impl Summarizer {
    /// Create a new summarizer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Use a custom segmenter
    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Set number of bullets to select
    pub fn with_max_bullets(mut self, n: usize) -> Self {
        self.config.max_bullets = n;
        self
    }

    /// Set the near-duplicate threshold
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.config.similarity_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text` into at most `max_bullets` bullet strings.
    pub fn summarize(&self, text: &str) -> Vec<String> {
        self.select(text).texts()
    }

    /// Segment `text`, rank its keywords and select bullets.
    pub fn select(&self, text: &str) -> SummaryResult {
        let units = self.segmenter.segment(text);
        if units.is_empty() {
            return SummaryResult::default();
        }
        let ranking = self.extractor.rank(text);
        self.select_units(&units, &ranking)
    }

    /// Select bullets from pre-segmented units.
    ///
    /// `ranking` must be computed from the full original text, not from the
    /// units, so that callers sharing it with the quiz stage see the same
    /// topics.
    pub fn select_units(&self, units: &[TextUnit], ranking: &KeywordRanking) -> SummaryResult {
        let mut selection = Selection::new(&self.config);
        if units.is_empty() || selection.is_full() {
            return SummaryResult::default();
        }

        let keywords = ranking.top(self.config.keyword_top_k);
        if keywords.is_empty() {
            for unit in units {
                if selection.is_full() {
                    break;
                }
                selection.consider(unit, 0.0, SelectionPass::Leading, false);
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(
                bullets = selection.bullets.len(),
                "no keywords, using leading units"
            );

            return SummaryResult {
                bullets: selection.bullets,
            };
        }

        let ranked = rank_units(units, keywords, self.config.position_weight);
        for scored in &ranked {
            if selection.is_full() {
                break;
            }
            selection.consider(scored.unit, scored.score, SelectionPass::Ranked, true);
        }

        if !selection.is_full() {
            for unit in units {
                if selection.is_full() {
                    break;
                }
                selection.consider(unit, 0.0, SelectionPass::TopUp, true);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            units = units.len(),
            keywords = keywords.len(),
            bullets = selection.bullets.len(),
            topped_up = selection
                .bullets
                .iter()
                .filter(|b| b.pass == SelectionPass::TopUp)
                .count(),
            "selected summary bullets"
        );

        SummaryResult {
            bullets: selection.bullets,
        }
    }
}

/// Convenience function to summarize text with default settings
pub fn summarize(text: &str, max_bullets: usize) -> Vec<String> {
    Summarizer::new().with_max_bullets(max_bullets).summarize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHOTOSYNTHESIS: &str = "Photosynthesis converts light into energy. Plants use chlorophyll. \
                                  Photosynthesis is vital for life. The sun provides the light.";

    #[test]
    fn test_photosynthesis_example() {
        let bullets = summarize(PHOTOSYNTHESIS, 2);
        assert_eq!(
            bullets,
            vec![
                "Photosynthesis converts light into energy",
                "Photosynthesis is vital for life",
            ]
        );
    }

    #[test]
    fn test_selection_order_is_score_order() {
        let result = Summarizer::new().with_max_bullets(4).select(PHOTOSYNTHESIS);
        let order: Vec<usize> = result.bullets.iter().map(|b| b.index).collect();
        // Scores 5.15, 3.15, 2.15, 2.15
        assert_eq!(order, vec![0, 2, 1, 3]);
        assert!(result.bullets.iter().all(|b| b.pass == SelectionPass::Ranked));
        for pair in result.bullets.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(summarize("", 5).is_empty());
        assert!(summarize("   ", 5).is_empty());
        assert!(summarize("\n\t", 5).is_empty());
    }

    #[test]
    fn test_zero_max_bullets() {
        assert!(summarize(PHOTOSYNTHESIS, 0).is_empty());
    }

    #[test]
    fn test_respects_max_and_length() {
        let long_sentence = format!("{} end.", "lengthy ".repeat(60));
        let text = format!(
            "{long_sentence} Another sentence about rivers. Rivers flow into oceans. \
             Oceans cover most of the planet. Planets orbit stars."
        );
        let bullets = summarize(&text, 5);
        assert_eq!(bullets.len(), 5);
        for bullet in &bullets {
            assert!(bullet.chars().count() <= 200);
        }
        assert!(bullets.iter().any(|b| b.ends_with("...")));

        let capped = summarize(&text, 2);
        assert_eq!(capped.len(), 2);
    }

    #[test]
    fn test_near_duplicates_collapsed() {
        let text = "The mitochondria is the powerhouse of the cell. \
                    The mitochondria is the powerhouse of every cell. \
                    Ribosomes build proteins from amino acids.";
        let bullets = summarize(text, 3);
        let powerhouse = bullets.iter().filter(|b| b.contains("powerhouse")).count();
        assert_eq!(powerhouse, 1);
        assert!(bullets.iter().any(|b| b.contains("Ribosomes")));
    }

    #[test]
    fn test_case_insensitive_uniqueness() {
        // Word sets differ ("light." vs "light;") so only the formatted-text
        // check catches the repeat.
        let units = vec![
            TextUnit::new(0, "Gravity bends light."),
            TextUnit::new(1, "GRAVITY BENDS LIGHT;"),
            TextUnit::new(2, "Mass curves space."),
        ];
        let ranking = KeywordExtractor::new().rank("gravity light mass");
        let result = Summarizer::new()
            .with_similarity_threshold(1.0)
            .with_max_bullets(5)
            .select_units(&units, &ranking);
        assert_eq!(result.texts(), vec!["Gravity bends light", "Mass curves space"]);
    }

    #[test]
    fn test_zero_threshold_keeps_single_bullet() {
        // Every pair has similarity >= 0, so nothing after the first survives
        let text = "Alpha beta gamma. Delta epsilon zeta. Theta iota kappa.";
        let strict = Summarizer::new()
            .with_similarity_threshold(0.0)
            .with_max_bullets(3)
            .select(text);
        assert_eq!(strict.len(), 1);

        let relaxed = Summarizer::new().with_max_bullets(3).select(text);
        assert_eq!(relaxed.len(), 3);
    }

    #[test]
    fn test_rejected_units_not_readded_by_top_up() {
        let units = vec![
            TextUnit::new(0, "shared words here"),
            TextUnit::new(1, "quantum shared words here"),
            TextUnit::new(2, "completely different sentence"),
        ];
        // Only "quantum" is a keyword: unit 1 ranks first and unit 0 is its
        // near-duplicate in both passes.
        let ranking = KeywordExtractor::new().rank("quantum");
        let result = Summarizer::new()
            .with_max_bullets(3)
            .select_units(&units, &ranking);

        let order: Vec<usize> = result.bullets.iter().map(|b| b.index).collect();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_no_keywords_uses_leading_units() {
        let text = "A cat sat. It was big. The dog ran off. We all saw.";
        let result = Summarizer::new().with_max_bullets(2).select(text);
        assert_eq!(result.texts(), vec!["A cat sat", "It was big"]);
        assert!(result.bullets.iter().all(|b| b.pass == SelectionPass::Leading));
    }

    #[test]
    fn test_chunk_fallback_yields_multiple_bullets() {
        // 200 words, no terminal punctuation: five 40-word chunks
        let text = (0..200)
            .map(|i| format!("topic{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let bullets = summarize(&text, 7);
        assert_eq!(bullets.len(), 5);
        for bullet in &bullets {
            assert!(bullet.chars().count() <= 200);
        }
    }

    #[test]
    fn test_idempotent() {
        let summarizer = Summarizer::new();
        assert_eq!(
            summarizer.summarize(PHOTOSYNTHESIS),
            summarizer.summarize(PHOTOSYNTHESIS)
        );
    }
}
