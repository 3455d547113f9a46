//! Input sources for the notes pipeline.
//!
//! Fetching and parsing are left to the caller: a document arrives as the
//! text of its pages, a video as its caption text.

use serde::{Deserialize, Serialize};

/// Text handed to [`NotesPipeline::run`](super::runner::NotesPipeline::run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    /// Plain text pasted by the user
    Text { text: String },
    /// Extracted page texts of a document, in page order
    Document { pages: Vec<String> },
    /// Caption text of a video
    Transcript { text: String },
}

impl Source {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn transcript(text: impl Into<String>) -> Self {
        Self::Transcript { text: text.into() }
    }

    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Document {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }

    /// Short name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Document { .. } => "document",
            Self::Transcript { .. } => "transcript",
        }
    }

    pub fn is_transcript(&self) -> bool {
        matches!(self, Self::Transcript { .. })
    }

    /// Raw text of the source. Document pages are joined with newlines.
    pub fn contents(&self) -> String {
        match self {
            Self::Text { text } | Self::Transcript { text } => text.clone(),
            Self::Document { pages } => pages.join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_pages_joined_with_newline() {
        let source = Source::from_pages(["Page one.", "Page two."]);
        assert_eq!(source.contents(), "Page one.\nPage two.");
        assert_eq!(source.kind(), "document");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Source::text("a").kind(), "text");
        assert!(Source::transcript("a").is_transcript());
        assert!(!Source::text("a").is_transcript());
    }

    #[test]
    fn test_serde_tagged() {
        let source: Source =
            serde_json::from_str(r#"{ "kind": "transcript", "text": "hi there" }"#).unwrap();
        assert_eq!(source, Source::transcript("hi there"));
    }
}
