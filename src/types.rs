//! Core data types shared across the notes pipeline.

use serde::{Deserialize, Serialize};

/// One sentence (or fixed-size word chunk) of the input text.
///
/// Units are produced once per run by the segmenter and never mutated.
/// `index` is the position in original order and doubles as the tie-break
/// key wherever units are ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextUnit {
    /// Position in original order (0-based)
    pub index: usize,
    /// Whitespace-normalized text
    pub text: String,
}

impl TextUnit {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A frequency-ranked significant token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Lowercased token
    pub term: String,
    /// Occurrences in the whole text
    pub frequency: usize,
}

impl Keyword {
    pub fn new(term: impl Into<String>, frequency: usize) -> Self {
        Self {
            term: term.into(),
            frequency,
        }
    }

    /// True if every character is an ASCII letter
    pub fn is_alphabetic(&self) -> bool {
        !self.term.is_empty() && self.term.chars().all(|c| c.is_ascii_alphabetic())
    }
}

/// A unit with its relevance score, used transiently during selection
#[derive(Debug, Clone, Copy)]
pub struct ScoredUnit<'a> {
    pub unit: &'a TextUnit,
    pub score: f64,
}

impl<'a> ScoredUnit<'a> {
    pub fn index(&self) -> usize {
        self.unit.index
    }
}

/// Which flavour of question was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    FillBlank,
    ShortAnswer,
}

impl QuestionKind {
    /// Returns the wire name used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FillBlank => "fill_blank",
            Self::ShortAnswer => "short_answer",
        }
    }
}

/// A quiz question.
///
/// The two variants keep their own field shapes; on the wire both flatten to
/// `{ "type", "id", "question", "answer" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    /// Cloze question: a sentence with one keyword blanked out
    FillBlank {
        id: u32,
        #[serde(rename = "question")]
        masked_sentence: String,
        #[serde(rename = "answer")]
        answer_keyword: String,
    },
    /// Free-text question answered by a summary bullet
    ShortAnswer {
        id: u32,
        #[serde(rename = "question")]
        prompt: String,
        #[serde(rename = "answer")]
        answer_text: String,
    },
}

impl Question {
    pub fn id(&self) -> u32 {
        match self {
            Self::FillBlank { id, .. } | Self::ShortAnswer { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::FillBlank { .. } => QuestionKind::FillBlank,
            Self::ShortAnswer { .. } => QuestionKind::ShortAnswer,
        }
    }

    /// The text shown to the learner
    pub fn question(&self) -> &str {
        match self {
            Self::FillBlank {
                masked_sentence, ..
            } => masked_sentence,
            Self::ShortAnswer { prompt, .. } => prompt,
        }
    }

    /// The expected answer
    pub fn answer(&self) -> &str {
        match self {
            Self::FillBlank { answer_keyword, .. } => answer_keyword,
            Self::ShortAnswer { answer_text, .. } => answer_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_wire_shape() {
        let q = Question::FillBlank {
            id: 1,
            masked_sentence: "_____ converts light into energy.".to_string(),
            answer_keyword: "photosynthesis".to_string(),
        };
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["type"], "fill_blank");
        assert_eq!(value["id"], 1);
        assert_eq!(value["question"], "_____ converts light into energy.");
        assert_eq!(value["answer"], "photosynthesis");
    }

    #[test]
    fn test_short_answer_deserialize() {
        let json = r#"{"type":"short_answer","id":3,"question":"Why?","answer":"Because."}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.kind(), QuestionKind::ShortAnswer);
        assert_eq!(q.id(), 3);
        assert_eq!(q.question(), "Why?");
        assert_eq!(q.answer(), "Because.");
    }

    #[test]
    fn test_keyword_alphabetic() {
        assert!(Keyword::new("light", 2).is_alphabetic());
        assert!(!Keyword::new("2024", 1).is_alphabetic());
        assert!(!Keyword::new("covid19", 1).is_alphabetic());
    }

    #[test]
    fn test_word_count() {
        let unit = TextUnit::new(0, "Plants use chlorophyll.");
        assert_eq!(unit.word_count(), 3);
        assert_eq!(QuestionKind::FillBlank.as_str(), "fill_blank");
    }
}
