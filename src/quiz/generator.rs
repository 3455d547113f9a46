//! Tiered quiz generation
//!
//! Questions are numbered from 1 across all tiers and generation stops for
//! good once the requested count is reached:
//!
//! 1. **Cloze**: per quiz keyword, blank it out of the first sentence that
//!    contains it as a whole word.
//! 2. **Explain**: per summary bullet, ask to explain the first keyword it
//!    mentions, quoting the bullet as a hint.
//! 3. **Takeaway**: only if nothing else was produced, ask for the main
//!    takeaway of each leading bullet.
//!
//! Without summary bullets no questions are generated at all.

use serde::{Deserialize, Serialize};

use super::cloze::{mask_keyword, whole_word_matcher};
use crate::nlp::keywords::{KeywordExtractor, KeywordRanking};
use crate::nlp::normalize::normalize_whitespace;
use crate::nlp::segmenter::Segmenter;
use crate::nlp::stopwords::StopwordFilter;
use crate::summarizer::bullet::truncate_with_ellipsis;
use crate::types::{Keyword, Question, TextUnit};

/// Keyword used in explain prompts when a bullet mentions none
pub const FALLBACK_TOPIC: &str = "this topic";

/// Configuration for quiz generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Maximum number of questions
    pub num_questions: usize,
    /// Number of top keywords considered before filtering
    pub keyword_top_k: usize,
    /// Maximum length of the bullet quoted in explain prompts
    pub hint_len: usize,
    /// Enable the cloze tier
    pub cloze: bool,
    /// Enable the explain tier
    pub explain: bool,
    /// Use the `stop-words` list for this language instead of the built-in list
    pub stopword_language: Option<String>,
    /// Words never used as blanks or topics, on top of the stopword list
    pub extra_stopwords: Vec<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            num_questions: 5,
            keyword_top_k: 40,
            hint_len: 140,
            cloze: true,
            explain: true,
            stopword_language: None,
            extra_stopwords: Vec::new(),
        }
    }
}

/// Collects questions, assigning ids and enforcing the limit
struct QuestionSink {
    limit: usize,
    questions: Vec<Question>,
}

impl QuestionSink {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            questions: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.questions.len() >= self.limit
    }

    fn next_id(&self) -> u32 {
        self.questions.len() as u32 + 1
    }

    fn fill_blank(&mut self, masked_sentence: String, answer_keyword: String) {
        let id = self.next_id();
        self.questions.push(Question::FillBlank {
            id,
            masked_sentence,
            answer_keyword,
        });
    }

    fn short_answer(&mut self, prompt: String, answer_text: String) {
        let id = self.next_id();
        self.questions.push(Question::ShortAnswer {
            id,
            prompt,
            answer_text,
        });
    }
}

/// Tiered quiz generator
#[derive(Debug, Clone)]
pub struct QuizGenerator {
    config: QuizConfig,
    segmenter: Segmenter,
    extractor: KeywordExtractor,
    stopwords: StopwordFilter,
}

impl Default for QuizGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizGenerator {
    /// Create a new generator with default config
    pub fn new() -> Self {
        Self::with_config(QuizConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: QuizConfig) -> Self {
        let mut stopwords = match &config.stopword_language {
            Some(language) => StopwordFilter::new(language),
            None => StopwordFilter::default(),
        };
        stopwords.add_stopwords(&config.extra_stopwords);
        Self {
            config,
            segmenter: Segmenter::new(),
            extractor: KeywordExtractor::new(),
            stopwords,
        }
    }

    /// Use a custom segmenter
    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Set the maximum number of questions
    pub fn with_num_questions(mut self, n: usize) -> Self {
        self.config.num_questions = n;
        self
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Generate questions about `text`, falling back on `bullets`.
    pub fn generate<S: AsRef<str>>(&self, text: &str, bullets: &[S]) -> Vec<Question> {
        let bullets = clean_bullets(bullets);
        if bullets.is_empty() {
            return Vec::new();
        }
        let ranking = self.extractor.rank(text);
        let units = self.segmenter.segment(text);
        self.generate_cleaned(&units, &ranking, &bullets)
    }

    /// Generate from a pre-segmented text and its keyword ranking.
    ///
    /// `ranking` must come from the full text so that questions and summary
    /// share topics.
    pub fn generate_from<S: AsRef<str>>(
        &self,
        units: &[TextUnit],
        ranking: &KeywordRanking,
        bullets: &[S],
    ) -> Vec<Question> {
        self.generate_cleaned(units, ranking, &clean_bullets(bullets))
    }

    /// `bullets` are already whitespace-normalized and non-empty.
    fn generate_cleaned(
        &self,
        units: &[TextUnit],
        ranking: &KeywordRanking,
        bullets: &[String],
    ) -> Vec<Question> {
        let mut sink = QuestionSink::new(self.config.num_questions);
        if bullets.is_empty() || sink.is_full() {
            return Vec::new();
        }

        let keywords = self.quiz_keywords(ranking);

        if self.config.cloze {
            self.cloze_tier(units, &keywords, &mut sink);
        }

        if self.config.explain && !sink.is_full() {
            self.explain_tier(bullets, &keywords, &mut sink);
        }

        if sink.questions.is_empty() {
            self.takeaway_tier(bullets, &mut sink);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            keywords = keywords.len(),
            questions = sink.questions.len(),
            cloze = sink
                .questions
                .iter()
                .filter(|q| matches!(q, Question::FillBlank { .. }))
                .count(),
            "generated quiz"
        );

        sink.questions
    }

    /// Top keywords that are purely alphabetic and not stopwords
    fn quiz_keywords<'a>(&self, ranking: &'a KeywordRanking) -> Vec<&'a Keyword> {
        ranking
            .top(self.config.keyword_top_k)
            .iter()
            .filter(|kw| kw.is_alphabetic() && !self.stopwords.is_stopword(&kw.term))
            .collect()
    }

    fn cloze_tier(&self, units: &[TextUnit], keywords: &[&Keyword], sink: &mut QuestionSink) {
        for keyword in keywords {
            if sink.is_full() {
                return;
            }
            let Some(matcher) = whole_word_matcher(&keyword.term) else {
                continue;
            };

            let masked = units.iter().find_map(|unit| {
                let masked = mask_keyword(&unit.text, &matcher)?;
                // A longer word can still carry the keyword, e.g. "lightning"
                (!masked.to_lowercase().contains(keyword.term.as_str())).then_some(masked)
            });

            if let Some(masked) = masked {
                sink.fill_blank(masked, keyword.term.clone());
            }
        }
    }

    fn explain_tier(&self, bullets: &[String], keywords: &[&Keyword], sink: &mut QuestionSink) {
        for bullet in bullets {
            if sink.is_full() {
                return;
            }
            let lowered = bullet.to_lowercase();
            let topic = keywords
                .iter()
                .find(|kw| lowered.contains(kw.term.as_str()))
                .map(|kw| kw.term.as_str())
                .unwrap_or(FALLBACK_TOPIC);
            let hint = truncate_with_ellipsis(bullet, self.config.hint_len);

            sink.short_answer(
                format!("Explain {topic} in your own words. Hint: \"{hint}\""),
                bullet.clone(),
            );
        }
    }

    fn takeaway_tier(&self, bullets: &[String], sink: &mut QuestionSink) {
        for bullet in bullets {
            if sink.is_full() {
                return;
            }
            sink.short_answer(
                format!("What is the main takeaway of: \"{bullet}\"?"),
                bullet.clone(),
            );
        }
    }
}

/// Whitespace-normalized, non-empty bullets
fn clean_bullets<S: AsRef<str>>(bullets: &[S]) -> Vec<String> {
    bullets
        .iter()
        .map(|b| normalize_whitespace(b.as_ref()))
        .filter(|b| !b.is_empty())
        .collect()
}

/// Convenience function to generate a quiz with default settings
pub fn generate_quiz<S: AsRef<str>>(
    text: &str,
    bullets: &[S],
    num_questions: usize,
) -> Vec<Question> {
    QuizGenerator::new()
        .with_num_questions(num_questions)
        .generate(text, bullets)
}
