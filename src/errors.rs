//! Error types for the notes pipeline.
//!
//! The text-processing stages themselves are total; errors only arise at the
//! pipeline boundary (empty sources, bad configuration) or are handed over
//! by the collaborators that produce the input text.

use thiserror::Error;

use crate::pipeline::validation::ValidationReport;

/// Errors from notes pipeline operations.
#[derive(Debug, Error)]
pub enum NotesError {
    /// The source contained no text after trimming
    #[error("no text found in {source_kind}")]
    EmptyInput { source_kind: &'static str },

    /// The spec failed validation
    #[error("invalid notes spec: {}", summarize_report(.0))]
    InvalidSpec(ValidationReport),

    /// A document or transcript collaborator could not produce text
    #[error("{message}")]
    Collaborator { message: String },

    #[error("failed to parse notes spec: {0}")]
    Json(#[from] serde_json::Error),
}

impl NotesError {
    /// Wrap a failure reported by a document or transcript collaborator.
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator {
            message: message.into(),
        }
    }
}

fn summarize_report(report: &ValidationReport) -> String {
    report
        .errors()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias for results carrying a [`NotesError`].
pub type NotesResult<T> = Result<T, NotesError>;
