//! Filler and repeat removal for transcripts

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::nlp::normalize::normalize_whitespace;
use crate::nlp::segmenter::Segmenter;
use crate::summarizer::dedup::{Deduplicator, TRANSCRIPT_SIMILARITY_THRESHOLD};

/// Greeting and channel-chatter openers, matched at the start of a sentence
static FILLER_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:hey|hi|hello|welcome back|welcome to|thanks for watching|thank you for watching|today i['’]m going to|in this video|don['’]t forget to|make sure to|like and subscribe|so guys)\b",
    )
    .expect("filler pattern is valid")
});

/// Configuration for transcript cleaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Clean transcripts before summarizing
    pub clean: bool,
    /// Jaccard similarity at or above which a sentence is a repeat
    pub similarity_threshold: f64,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            clean: true,
            similarity_threshold: TRANSCRIPT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Removes filler openers and repeated sentences from transcripts
#[derive(Debug, Clone, Default)]
pub struct TranscriptCleaner {
    config: TranscriptConfig,
    segmenter: Segmenter,
}

impl TranscriptCleaner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TranscriptConfig) -> Self {
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

    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// True if `sentence` opens with a greeting or filler phrase
    pub fn is_filler(sentence: &str) -> bool {
        FILLER_OPENER.is_match(sentence.trim_start())
    }

    /// Clean `text`, never reducing usable content to nothing.
    ///
    /// If every sentence is filtered out the normalized original is returned.
    pub fn clean(&self, text: &str) -> String {
        let mut dedup = Deduplicator::new(self.config.similarity_threshold);
        let mut kept: Vec<String> = Vec::new();
        let units = self.segmenter.segment(text);

        for unit in &units {
            let sentence = normalize_whitespace(&unit.text);
            if sentence.is_empty() || Self::is_filler(&sentence) {
                continue;
            }
            if dedup.try_accept(&sentence) {
                kept.push(sentence);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            units = units.len(),
            kept = kept.len(),
            "cleaned transcript"
        );

        if kept.is_empty() {
            return normalize_whitespace(text);
        }
        kept.join(" ")
    }
}

/// Convenience function to clean a transcript with default settings
pub fn clean_transcript(text: &str) -> String {
    TranscriptCleaner::new().clean(text)
}
