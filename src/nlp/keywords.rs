//! Frequency-based keyword ranking
//!
//! Keywords are the most frequent significant tokens of the whole text. The
//! ranking is computed once per text and shared by the summarizer (top 20)
//! and the quiz generator (top 40); because the order is deterministic the
//! shorter list is always a prefix of the longer one.

use rustc_hash::FxHashMap;

use crate::types::Keyword;

/// Default number of keywords used for sentence scoring
pub const DEFAULT_TOP_K: usize = 20;

/// Tokens must be longer than this many characters
pub const MIN_TOKEN_LEN: usize = 3;

/// Full keyword ranking for one text, most frequent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordRanking {
    keywords: Vec<Keyword>,
}

impl KeywordRanking {
    /// The `k` highest-ranked keywords
    pub fn top(&self, k: usize) -> &[Keyword] {
        &self.keywords[..k.min(self.keywords.len())]
    }

    /// The `k` highest-ranked terms as owned strings
    pub fn top_terms(&self, k: usize) -> Vec<String> {
        self.top(k).iter().map(|kw| kw.term.clone()).collect()
    }

    pub fn all(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Tokenizes and counts significant tokens
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    min_token_len: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            min_token_len: MIN_TOKEN_LEN,
        }
    }

    /// Rank every significant token of `text`.
    ///
    /// Ties in frequency keep first-encounter order.
    pub fn rank(&self, text: &str) -> KeywordRanking {
        let lowered: String = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
            .collect();

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        let mut order: Vec<&str> = Vec::new();

        for token in lowered
            .split_whitespace()
            .filter(|t| t.len() > self.min_token_len)
        {
            let count = counts.entry(token).or_insert(0);
            if *count == 0 {
                order.push(token);
            }
            *count += 1;
        }

        let mut keywords: Vec<Keyword> = order
            .into_iter()
            .map(|term| Keyword::new(term, counts[term]))
            .collect();

        // Stable sort keeps first-encounter order among equal counts
        keywords.sort_by(|a, b| b.frequency.cmp(&a.frequency));

        KeywordRanking { keywords }
    }

    /// Top `top_k` keyword terms of `text`
    pub fn extract(&self, text: &str, top_k: usize) -> Vec<String> {
        self.rank(text).top_terms(top_k)
    }
}

/// Convenience function to extract the `top_k` most frequent keywords
pub fn extract_keywords(text: &str, top_k: usize) -> Vec<String> {
    KeywordExtractor::new().extract(text, top_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_order() {
        let text = "Rust rust RUST. Memory safety without garbage. Memory matters.";
        let keywords = extract_keywords(text, 10);
        assert_eq!(keywords[0], "rust");
        assert_eq!(keywords[1], "memory");
    }

    #[test]
    fn test_ties_keep_first_encounter() {
        let keywords = extract_keywords("zebra apple mango", 10);
        assert_eq!(keywords, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let keywords = extract_keywords("the cat sat on a big mat with dogs", 10);
        assert_eq!(keywords, vec!["with", "dogs"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let keywords = extract_keywords("state-of-the-art, well_known; e-mail", 10);
        assert_eq!(keywords, vec!["state", "well", "known", "mail"]);
    }

    #[test]
    fn test_top_k_limits() {
        let text = "alpha bravo charlie delta echoes foxtrot";
        assert_eq!(extract_keywords(text, 2), vec!["alpha", "bravo"]);
        assert_eq!(extract_keywords(text, 0), Vec::<String>::new());
    }

    #[test]
    fn test_no_duplicates() {
        let keywords = extract_keywords("Light light LIGHT lights", 10);
        assert_eq!(keywords, vec!["light", "lights"]);
    }

    #[test]
    fn test_empty_text() {
        let ranking = KeywordExtractor::new().rank("");
        assert!(ranking.is_empty());
        assert!(ranking.top(20).is_empty());
    }

    #[test]
    fn test_short_list_is_prefix_of_long_list() {
        let text = "Photosynthesis converts light into energy. Plants use chlorophyll. \
                    Photosynthesis is vital for life. The sun provides the light.";
        let ranking = KeywordExtractor::new().rank(text);
        let short = ranking.top_terms(3);
        let long = ranking.top_terms(40);
        assert_eq!(&long[..3], &short[..]);
        assert_eq!(short, vec!["photosynthesis", "light", "converts"]);
        assert_eq!(ranking.all()[0].frequency, 2);
    }
}
