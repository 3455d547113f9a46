//! Validation engine for notes specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`NotesSpec`](super::spec::NotesSpec) and collects every diagnostic into a
//! [`ValidationReport`]. It never short-circuits on the first error, so
//! users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use smart_notes::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::*;
use crate::nlp::stopwords::StopwordFilter;
use crate::summarizer::bullet::ELLIPSIS;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding: an error or warning attached to a
/// [`SpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`NotesSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"positive_counts"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &NotesSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`NotesSpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(PositiveCountsRule));
        engine.add_rule(Box::new(ThresholdRangeRule));
        engine.add_rule(Box::new(LengthBudgetRule));
        engine.add_rule(Box::new(StopwordLanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &NotesSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Supported spec version ──────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &NotesSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\" to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Counts must be positive when set ────────────────────────────────────

struct PositiveCountsRule;

impl ValidationRule for PositiveCountsRule {
    fn name(&self) -> &str {
        "positive_counts"
    }

    fn validate(&self, spec: &NotesSpec) -> Vec<ValidationDiagnostic> {
        let checks: &[(&str, Option<usize>)] = &[
            (
                "/segmenter/max_words_per_chunk",
                spec.segmenter.max_words_per_chunk,
            ),
            ("/summary/max_bullets", spec.summary.max_bullets),
            ("/summary/keyword_top_k", spec.summary.keyword_top_k),
            ("/quiz/num_questions", spec.quiz.num_questions),
            ("/quiz/keyword_top_k", spec.quiz.keyword_top_k),
        ];

        checks
            .iter()
            .filter(|(_, value)| *value == Some(0))
            .map(|&(path, _)| {
                let field = field_name(path);
                ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::InvalidValue,
                        path,
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint(format!("Remove {field} to use the default, or set it to a positive value")),
                )
            })
            .collect()
    }
}

// ─── 3. Similarity thresholds lie in [0, 1] ─────────────────────────────────

struct ThresholdRangeRule;

impl ValidationRule for ThresholdRangeRule {
    fn name(&self) -> &str {
        "threshold_range"
    }

    fn validate(&self, spec: &NotesSpec) -> Vec<ValidationDiagnostic> {
        let checks: &[(&str, Option<f64>)] = &[
            (
                "/summary/similarity_threshold",
                spec.summary.similarity_threshold,
            ),
            (
                "/transcript/similarity_threshold",
                spec.transcript.similarity_threshold,
            ),
        ];

        let mut out: Vec<ValidationDiagnostic> = checks
            .iter()
            .filter_map(|&(path, value)| value.map(|v| (path, v)))
            .filter(|(_, v)| !(0.0..=1.0).contains(v))
            .map(|(path, v)| {
                ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::OutOfRange,
                        path,
                        format!("{} must be between 0 and 1, got {v}", field_name(path)),
                    )
                    .with_hint("Jaccard similarity is a ratio; use a value like 0.6"),
                )
            })
            .collect();

        if let Some(w) = spec.summary.position_weight {
            if !w.is_finite() || w < 0.0 {
                out.push(ValidationDiagnostic::error(SpecError::new(
                    ErrorCode::OutOfRange,
                    "/summary/position_weight",
                    format!("position_weight must be a non-negative number, got {w}"),
                )));
            }
        }

        out
    }
}

// ─── 4. Length budgets leave room for the ellipsis ──────────────────────────

struct LengthBudgetRule;

impl ValidationRule for LengthBudgetRule {
    fn name(&self) -> &str {
        "length_budget"
    }

    fn validate(&self, spec: &NotesSpec) -> Vec<ValidationDiagnostic> {
        let min = ELLIPSIS.len() + 1;
        let checks: &[(&str, Option<usize>)] = &[
            ("/summary/max_bullet_len", spec.summary.max_bullet_len),
            ("/quiz/hint_len", spec.quiz.hint_len),
        ];

        checks
            .iter()
            .filter_map(|&(path, value)| value.map(|v| (path, v)))
            .filter(|&(_, v)| v < min)
            .map(|(path, v)| {
                ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::InvalidValue,
                        path,
                        format!("{} must be at least {min}, got {v}", field_name(path)),
                    )
                    .with_hint("Truncated text needs room for at least one character and the ellipsis"),
                )
            })
            .collect()
    }
}

// ─── 5. Stopword language must have a list ─────────────────────────────────

struct StopwordLanguageRule;

impl ValidationRule for StopwordLanguageRule {
    fn name(&self) -> &str {
        "stopword_language"
    }

    fn validate(&self, spec: &NotesSpec) -> Vec<ValidationDiagnostic> {
        match spec.quiz.stopword_language.as_deref() {
            Some(language) if !StopwordFilter::is_supported_language(language) => {
                vec![ValidationDiagnostic::warning(
                    SpecError::new(
                        ErrorCode::InvalidValue,
                        "/quiz/stopword_language",
                        format!("no stopword list for \"{language}\", using English"),
                    )
                    .with_hint("Use one of en, de, fr, es, it, pt, nl"),
                )]
            }
            _ => vec![],
        }
    }
}

// ─── 6. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &NotesSpec) -> Vec<ValidationDiagnostic> {
        let sections: [(&str, &HashMap<String, serde_json::Value>); 5] = [
            ("", &spec.unknown_fields),
            ("/segmenter", &spec.segmenter.unknown_fields),
            ("/summary", &spec.summary.unknown_fields),
            ("/quiz", &spec.quiz.unknown_fields),
            ("/transcript", &spec.transcript.unknown_fields),
        ];

        sections
            .into_iter()
            .flat_map(|(path, unknowns)| Self::check_unknowns(path, unknowns, spec.strict))
            .collect()
    }
}

/// Last segment of a JSON pointer
fn field_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
