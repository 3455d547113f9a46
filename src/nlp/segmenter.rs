//! Sentence segmentation
//!
//! Splits text into sentence-like [`TextUnit`]s. Transcript-style text with
//! sparse punctuation yields too few sentences to rank, so below a minimum
//! sentence count the segmenter switches to fixed-size word chunks.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::normalize::normalize_whitespace;
use crate::types::TextUnit;

/// Terminal punctuation followed by whitespace. The split point is right
/// after the punctuation, so it stays with its sentence.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Configuration for segmentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Words per chunk in the fallback chunk mode
    pub max_words_per_chunk: usize,
    /// Fewer sentences than this switches to chunk mode
    pub min_sentences: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_words_per_chunk: 40,
            min_sentences: 3,
        }
    }
}

/// Sentence segmenter with a word-chunk fallback
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    /// Create a new segmenter with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// Set the chunk size used when punctuation is too sparse
    pub fn with_max_words_per_chunk(mut self, words: usize) -> Self {
        self.config.max_words_per_chunk = words;
        self
    }

    /// Set the sentence count below which chunk mode engages
    pub fn with_min_sentences(mut self, min: usize) -> Self {
        self.config.min_sentences = min;
        self
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment text into ordered units.
    pub fn segment(&self, text: &str) -> Vec<TextUnit> {
        let normalized = normalize_whitespace(&text.replace('\n', " "));
        if normalized.is_empty() {
            return Vec::new();
        }

        let sentences = split_sentences(&normalized);
        if sentences.len() >= self.config.min_sentences {
            return sentences
                .into_iter()
                .enumerate()
                .map(|(i, s)| TextUnit::new(i, s))
                .collect();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            min_sentences = self.config.min_sentences,
            "sparse punctuation, falling back to word chunks"
        );

        self.chunk_words(&normalized)
    }

    /// Fixed-size word chunks in original order
    fn chunk_words(&self, text: &str) -> Vec<TextUnit> {
        let size = self.config.max_words_per_chunk.max(1);
        let words: Vec<&str> = text.split_whitespace().collect();

        words
            .chunks(size)
            .map(|chunk| chunk.join(" "))
            .filter(|chunk| !chunk.is_empty())
            .enumerate()
            .map(|(i, chunk)| TextUnit::new(i, chunk))
            .collect()
    }
}

/// Split normalized text at sentence boundaries, dropping empty pieces.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BOUNDARY.find_iter(text) {
        // Boundary punctuation is a single ASCII byte
        push_trimmed(&mut sentences, &text[start..m.start() + 1]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

/// Convenience function to segment with the default config
pub fn segment(text: &str) -> Vec<TextUnit> {
    Segmenter::new().segment(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(units: &[TextUnit]) -> Vec<&str> {
        units.iter().map(|u| u.text.as_str()).collect()
    }

    #[test]
    fn test_sentence_split() {
        let units = segment("First one. Second one! Third one? Fourth.");
        assert_eq!(
            texts(&units),
            vec!["First one.", "Second one!", "Third one?", "Fourth."]
        );
        for (i, unit) in units.iter().enumerate() {
            assert_eq!(unit.index, i);
        }
    }

    #[test]
    fn test_newlines_become_spaces() {
        let units = segment("Line one\ncontinues here. Line two.\n\nLine three.");
        assert_eq!(
            texts(&units),
            vec!["Line one continues here.", "Line two.", "Line three."]
        );
    }

    #[test]
    fn test_punctuation_without_space_does_not_split() {
        let units = segment("Version 1.5 is out. It fixes e.g.bugs. Upgrade now.");
        assert_eq!(units.len(), 3);
        assert_eq!(units[0].text, "Version 1.5 is out.");
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_chunk_fallback_for_sparse_punctuation() {
        let text = (0..100)
            .map(|i| format!("word{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let units = segment(&text);

        assert_eq!(units.len(), 3);
        assert_eq!(units[0].word_count(), 40);
        assert_eq!(units[1].word_count(), 40);
        assert_eq!(units[2].word_count(), 20);
        assert!(units[0].text.starts_with("word0 word1"));
        assert!(units[2].text.ends_with("word99"));
    }

    #[test]
    fn test_two_sentences_use_chunks() {
        let units = segment("Only two sentences here. Second one.");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].text, "Only two sentences here. Second one.");
    }

    #[test]
    fn test_custom_chunk_size() {
        let segmenter = Segmenter::new().with_max_words_per_chunk(2);
        let units = segmenter.segment("a b c d e");
        assert_eq!(texts(&units), vec!["a b", "c d", "e"]);
    }

    #[test]
    fn test_custom_min_sentences() {
        let segmenter = Segmenter::new().with_min_sentences(1);
        let units = segmenter.segment("Just one. And two.");
        assert_eq!(texts(&units), vec!["Just one.", "And two."]);
    }

    #[test]
    fn test_zero_chunk_size_terminates() {
        let segmenter = Segmenter::new().with_max_words_per_chunk(0);
        let units = segmenter.segment("a b c");
        assert_eq!(units.len(), 3);
    }

    #[test]
    fn test_restartable() {
        let text = "Alpha beta. Gamma delta. Epsilon zeta.";
        assert_eq!(segment(text), segment(text));
    }
}
