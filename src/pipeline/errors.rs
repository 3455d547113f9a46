//! Structured spec diagnostics.

use serde::Serialize;
use thiserror::Error;

use super::error_code::ErrorCode;

/// A single problem found in a [`super::spec::NotesSpec`].
///
/// `path` is a JSON pointer to the offending field; `hint` suggests a fix.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("[{code}] {path}: {message}")]
pub struct SpecError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
