//! Notes pipeline specification types.
//!
//! A [`NotesSpec`] overrides the defaults of each pipeline stage and sets
//! strictness. Omitted fields keep their defaults. These types are the input
//! to the [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "segmenter": { "max_words_per_chunk": 40, "min_sentences": 3 },
//!   "summary": { "max_bullets": 7, "similarity_threshold": 0.6 },
//!   "quiz": { "num_questions": 5, "cloze": true },
//!   "transcript": { "clean": true, "similarity_threshold": 0.8 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::NotesError;
use crate::nlp::segmenter::SegmenterConfig;
use crate::quiz::QuizConfig;
use crate::summarizer::SummarizerConfig;
use crate::transcript::TranscriptConfig;

/// Spec version understood by this crate.
pub const SPEC_VERSION: u32 = 1;

/// Top-level notes specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    #[serde(default)]
    pub segmenter: SegmenterSpec,

    #[serde(default)]
    pub summary: SummarySpec,

    #[serde(default)]
    pub quiz: QuizSpec,

    #[serde(default)]
    pub transcript: TranscriptSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for NotesSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            segmenter: SegmenterSpec::default(),
            summary: SummarySpec::default(),
            quiz: QuizSpec::default(),
            transcript: TranscriptSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl NotesSpec {
    /// Parse a spec from JSON. Parsing does not validate.
    pub fn from_json(json: &str) -> Result<Self, NotesError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn segmenter_config(&self) -> SegmenterConfig {
        let mut cfg = SegmenterConfig::default();
        let s = &self.segmenter;
        if let Some(v) = s.max_words_per_chunk {
            cfg.max_words_per_chunk = v;
        }
        if let Some(v) = s.min_sentences {
            cfg.min_sentences = v;
        }
        cfg
    }

    pub fn summarizer_config(&self) -> SummarizerConfig {
        let mut cfg = SummarizerConfig::default();
        let s = &self.summary;
        if let Some(v) = s.max_bullets {
            cfg.max_bullets = v;
        }
        if let Some(v) = s.keyword_top_k {
            cfg.keyword_top_k = v;
        }
        if let Some(v) = s.similarity_threshold {
            cfg.similarity_threshold = v;
        }
        if let Some(v) = s.position_weight {
            cfg.position_weight = v;
        }
        if let Some(v) = s.max_bullet_len {
            cfg.max_bullet_len = v;
        }
        cfg
    }

    pub fn quiz_config(&self) -> QuizConfig {
        let mut cfg = QuizConfig::default();
        let s = &self.quiz;
        if let Some(v) = s.num_questions {
            cfg.num_questions = v;
        }
        if let Some(v) = s.keyword_top_k {
            cfg.keyword_top_k = v;
        }
        if let Some(v) = s.hint_len {
            cfg.hint_len = v;
        }
        if let Some(v) = s.cloze {
            cfg.cloze = v;
        }
        if let Some(v) = s.explain {
            cfg.explain = v;
        }
        if s.stopword_language.is_some() {
            cfg.stopword_language = s.stopword_language.clone();
        }
        if let Some(words) = &s.extra_stopwords {
            cfg.extra_stopwords = words.clone();
        }
        cfg
    }

    pub fn transcript_config(&self) -> TranscriptConfig {
        let mut cfg = TranscriptConfig::default();
        let s = &self.transcript;
        if let Some(v) = s.clean {
            cfg.clean = v;
        }
        if let Some(v) = s.similarity_threshold {
            cfg.similarity_threshold = v;
        }
        cfg
    }
}

/// Segmentation overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmenterSpec {
    #[serde(default)]
    pub max_words_per_chunk: Option<usize>,

    /// Fewer sentences than this switches to word chunks.
    #[serde(default)]
    pub min_sentences: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Summary overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarySpec {
    #[serde(default)]
    pub max_bullets: Option<usize>,

    #[serde(default)]
    pub keyword_top_k: Option<usize>,

    #[serde(default)]
    pub similarity_threshold: Option<f64>,

    #[serde(default)]
    pub position_weight: Option<f64>,

    #[serde(default)]
    pub max_bullet_len: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Quiz overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizSpec {
    #[serde(default)]
    pub num_questions: Option<usize>,

    #[serde(default)]
    pub keyword_top_k: Option<usize>,

    #[serde(default)]
    pub hint_len: Option<usize>,

    #[serde(default)]
    pub cloze: Option<bool>,

    #[serde(default)]
    pub explain: Option<bool>,

    /// Language of the `stop-words` list replacing the built-in one.
    #[serde(default)]
    pub stopword_language: Option<String>,

    /// Extra words to keep out of blanks and explain topics.
    #[serde(default)]
    pub extra_stopwords: Option<Vec<String>>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Transcript cleaning overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptSpec {
    #[serde(default)]
    pub clean: Option<bool>,

    #[serde(default)]
    pub similarity_threshold: Option<f64>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}
