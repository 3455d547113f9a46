//! Stopword filtering
//!
//! Quiz keywords are filtered against a fixed list of common English words
//! that are long enough to survive the keyword length cut but make useless
//! blanks. A full language list from the `stop-words` crate can be used
//! instead, and extra words can be added on top of either.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Function words longer than three letters
const QUIZ_STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "also", "among", "another", "because",
    "been", "before", "being", "below", "between", "both", "came", "come", "could", "does",
    "doing", "down", "during", "each", "even", "every", "from", "further", "have", "having",
    "here", "herself", "himself", "into", "itself", "just", "like", "make", "many", "more",
    "most", "much", "must", "once", "only", "other", "ourselves", "over", "same", "should",
    "some", "such", "than", "that", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "under", "until", "upon", "used", "using",
    "very", "were", "what", "when", "where", "which", "while", "whom", "will", "with",
    "within", "without", "would", "your", "yours", "yourself",
];

static DEFAULT_FILTER: LazyLock<StopwordFilter> =
    LazyLock::new(|| StopwordFilter::from_list(QUIZ_STOPWORDS));

/// A filter for removing stopwords from keyword lists
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        DEFAULT_FILTER.clone()
    }
}

impl StopwordFilter {
    /// Create a filter from the `stop-words` list for the given language
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// True if `language` names a list this filter can load
    pub fn is_supported_language(language: &str) -> bool {
        Self::language_of(language).is_some()
    }

    fn language_of(language: &str) -> Option<LANGUAGE> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            _ => return None,
        };
        Some(lang)
    }

    /// Load stopwords for a language
    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = Self::language_of(language).unwrap_or(LANGUAGE::English);
        get(lang).iter().map(|s| s.to_string()).collect()
    }
}
