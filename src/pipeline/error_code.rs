//! Stable, machine-readable codes for spec diagnostics.

use serde::Serialize;

/// Category of a [`super::errors::SpecError`].
///
/// Codes serialize as snake_case strings and are part of the JSON output of
/// a [`super::validation::ValidationReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The `v` field names a version this crate does not understand
    UnsupportedVersion,
    /// A count or length that must be positive is zero or too small
    InvalidValue,
    /// A ratio lies outside `[0, 1]`
    OutOfRange,
    /// A field not recognized by the schema
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidValue => "invalid_value",
            Self::OutOfRange => "out_of_range",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
