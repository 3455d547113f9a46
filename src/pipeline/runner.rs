//! Pipeline runner: turns a [`Source`] into [`StudyNotes`].
//!
//! The [`NotesPipeline`] owns one configured instance of every stage. Calling
//! [`NotesPipeline::run`] executes them in order, sharing a single
//! segmentation and a single keyword ranking between the summary and the
//! quiz, and notifying a [`PipelineObserver`] at each stage boundary.

use serde::{Deserialize, Serialize};

use crate::errors::{NotesError, NotesResult};
use crate::nlp::keywords::KeywordExtractor;
use crate::nlp::segmenter::Segmenter;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_CLEAN_TRANSCRIPT, STAGE_KEYWORDS, STAGE_QUIZ,
    STAGE_SEGMENT, STAGE_SUMMARIZE,
};
use crate::pipeline::source::Source;
use crate::pipeline::spec::NotesSpec;
use crate::pipeline::validation::ValidationEngine;
use crate::quiz::QuizGenerator;
use crate::summarizer::Summarizer;
use crate::transcript::TranscriptCleaner;
use crate::types::Question;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Run `body` as the stage `name`, reporting its duration and output size.
macro_rules! run_stage {
    ($observer:expr, $name:expr, $body:expr, $items:expr) => {{
        trace_stage!($name);
        $observer.on_stage_start($name);
        let clock = StageClock::start();
        let out = $body;
        let report = StageReport::new(clock.elapsed(), $items(&out));
        $observer.on_stage_end($name, &report);
        out
    }};
}

/// Summary bullets and quiz questions for one source.
///
/// Serializes as `{ "summary": [...], "quiz": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyNotes {
    pub summary: Vec<String>,
    pub quiz: Vec<Question>,
}

/// The configured notes pipeline.
#[derive(Debug, Clone)]
pub struct NotesPipeline {
    segmenter: Segmenter,
    extractor: KeywordExtractor,
    summarizer: Summarizer,
    quiz: QuizGenerator,
    cleaner: TranscriptCleaner,
}

impl Default for NotesPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesPipeline {
    /// Pipeline with every stage at its defaults.
    pub fn new() -> Self {
        Self::assemble(&NotesSpec::default())
    }

    /// Validate `spec` and build a pipeline from it.
    ///
    /// Warnings (unknown fields in non-strict mode) are logged and otherwise
    /// ignored.
    pub fn from_spec(spec: &NotesSpec) -> NotesResult<Self> {
        let report = ValidationEngine::with_defaults().validate(spec);
        if report.has_errors() {
            return Err(NotesError::InvalidSpec(report));
        }

        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(%warning, "notes spec warning");
        }

        Ok(Self::assemble(spec))
    }

    fn assemble(spec: &NotesSpec) -> Self {
        let segmenter = Segmenter::with_config(spec.segmenter_config());
        Self {
            extractor: KeywordExtractor::new(),
            summarizer: Summarizer::with_config(spec.summarizer_config())
                .with_segmenter(segmenter.clone()),
            quiz: QuizGenerator::with_config(spec.quiz_config()).with_segmenter(segmenter.clone()),
            cleaner: TranscriptCleaner::with_config(spec.transcript_config())
                .with_segmenter(segmenter.clone()),
            segmenter,
        }
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    pub fn quiz_generator(&self) -> &QuizGenerator {
        &self.quiz
    }

    /// Produce study notes for `source`.
    ///
    /// Fails only when the source holds no text.
    pub fn run(
        &self,
        source: &Source,
        observer: &mut impl PipelineObserver,
    ) -> NotesResult<StudyNotes> {
        let raw = source.contents();
        if raw.trim().is_empty() {
            return Err(NotesError::EmptyInput {
                source_kind: source.kind(),
            });
        }

        let text = if source.is_transcript() && self.cleaner.config().clean {
            run_stage!(
                observer,
                STAGE_CLEAN_TRANSCRIPT,
                self.cleaner.clean(&raw),
                |t: &String| t.split_whitespace().count()
            )
        } else {
            raw
        };

        let units = run_stage!(
            observer,
            STAGE_SEGMENT,
            self.segmenter.segment(&text),
            |u: &Vec<_>| u.len()
        );

        let ranking = run_stage!(
            observer,
            STAGE_KEYWORDS,
            self.extractor.rank(&text),
            |r: &crate::nlp::KeywordRanking| r.len()
        );

        let summary = run_stage!(
            observer,
            STAGE_SUMMARIZE,
            self.summarizer.select_units(&units, &ranking).texts(),
            |b: &Vec<String>| b.len()
        );

        let quiz = run_stage!(
            observer,
            STAGE_QUIZ,
            self.quiz.generate_from(&units, &ranking, &summary),
            |q: &Vec<Question>| q.len()
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            source = source.kind(),
            bullets = summary.len(),
            questions = quiz.len(),
            "built study notes"
        );

        Ok(StudyNotes { summary, quiz })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::pipeline::observer::NoopObserver;
    use crate::types::QuestionKind;

    const PHOTOSYNTHESIS: &str = "Photosynthesis converts light into energy. Plants use chlorophyll. \
                                  Photosynthesis is vital for life. The sun provides the light.";

    /// Records every stage boundary it sees.
    #[derive(Default)]
    struct StageRecorder {
        started: Vec<&'static str>,
        reports: Vec<(&'static str, StageReport)>,
    }

    impl PipelineObserver for StageRecorder {
        fn on_stage_start(&mut self, stage: &'static str) {
            self.started.push(stage);
        }

        fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
            self.reports.push((stage, *report));
        }
    }

    impl StageRecorder {
        fn items(&self, stage: &str) -> Option<usize> {
            self.reports
                .iter()
                .find(|(name, _)| *name == stage)
                .map(|(_, r)| r.items())
        }
    }

    #[test]
    fn test_text_source_matches_free_functions() {
        let notes = NotesPipeline::new()
            .run(&Source::text(PHOTOSYNTHESIS), &mut NoopObserver)
            .unwrap();

        let bullets = crate::summarizer::summarize(PHOTOSYNTHESIS, 7);
        assert_eq!(notes.summary, bullets);
        assert_eq!(
            notes.quiz,
            crate::quiz::generate_quiz(PHOTOSYNTHESIS, &bullets, 5)
        );
        assert_eq!(notes.summary.len(), 4);
        assert_eq!(notes.quiz.len(), 5);
    }

    #[test]
    fn test_observer_sees_stages_in_order() {
        let mut obs = StageRecorder::default();
        NotesPipeline::new()
            .run(&Source::text(PHOTOSYNTHESIS), &mut obs)
            .unwrap();

        let expected = vec![STAGE_SEGMENT, STAGE_KEYWORDS, STAGE_SUMMARIZE, STAGE_QUIZ];
        assert_eq!(obs.started, expected);
        let ended: Vec<&str> = obs.reports.iter().map(|(name, _)| *name).collect();
        assert_eq!(ended, expected);
        assert!(obs.reports.iter().all(|(_, r)| r.elapsed() >= Duration::ZERO));

        assert_eq!(obs.items(STAGE_SEGMENT), Some(4));
        assert_eq!(obs.items(STAGE_SUMMARIZE), Some(4));
        assert_eq!(obs.items(STAGE_QUIZ), Some(5));
    }

    #[test]
    fn test_transcript_source_is_cleaned_first() {
        let text = "Hey everyone. Welcome back to the channel. \
                    Rust ownership prevents data races. \
                    Rust ownership prevents data races. \
                    Borrowing lets functions use values without moving them. \
                    The compiler checks every lifetime at build time. \
                    Thanks for watching!";
        let mut obs = StageRecorder::default();
        let notes = NotesPipeline::new()
            .run(&Source::transcript(text), &mut obs)
            .unwrap();

        assert_eq!(obs.started[0], STAGE_CLEAN_TRANSCRIPT);
        assert_eq!(obs.items(STAGE_SEGMENT), Some(3));
        assert_eq!(notes.summary.len(), 3);
        assert!(notes
            .summary
            .contains(&"Rust ownership prevents data races".to_string()));
        for bullet in &notes.summary {
            let lowered = bullet.to_lowercase();
            assert!(!lowered.contains("welcome"));
            assert!(!lowered.contains("watching"));
        }
    }

    #[test]
    fn test_transcript_cleaning_can_be_disabled() {
        let spec = NotesSpec::from_json(r#"{ "v": 1, "transcript": { "clean": false } }"#).unwrap();
        let pipeline = NotesPipeline::from_spec(&spec).unwrap();
        let mut obs = StageRecorder::default();
        pipeline
            .run(&Source::transcript("Hello there. Rust is fast."), &mut obs)
            .unwrap();
        assert!(!obs.started.contains(&STAGE_CLEAN_TRANSCRIPT));
    }

    #[test]
    fn test_document_pages() {
        let source = Source::from_pages([
            "Photosynthesis converts light into energy. Plants use chlorophyll.",
            "Photosynthesis is vital for life. The sun provides the light.",
        ]);
        let notes = NotesPipeline::new().run(&source, &mut NoopObserver).unwrap();
        assert_eq!(notes.summary[0], "Photosynthesis converts light into energy");
        assert_eq!(notes.summary.len(), 4);
    }

    #[test]
    fn test_empty_sources_rejected() {
        let pipeline = NotesPipeline::new();
        let cases = [
            (Source::text("   "), "text"),
            (Source::from_pages(["", " \n "]), "document"),
            (Source::from_pages(Vec::<String>::new()), "document"),
            (Source::transcript(""), "transcript"),
        ];
        for (source, kind) in cases {
            match pipeline.run(&source, &mut NoopObserver) {
                Err(NotesError::EmptyInput { source_kind }) => assert_eq!(source_kind, kind),
                other => panic!("expected EmptyInput for {kind}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_spec_applies_limits() {
        let spec = NotesSpec::from_json(
            r#"{ "v": 1, "summary": { "max_bullets": 2 }, "quiz": { "num_questions": 3, "cloze": false } }"#,
        )
        .unwrap();
        let notes = NotesPipeline::from_spec(&spec)
            .unwrap()
            .run(&Source::text(PHOTOSYNTHESIS), &mut NoopObserver)
            .unwrap();

        assert_eq!(
            notes.summary,
            vec![
                "Photosynthesis converts light into energy",
                "Photosynthesis is vital for life",
            ]
        );
        assert_eq!(notes.quiz.len(), 2);
        assert!(notes
            .quiz
            .iter()
            .all(|q| q.kind() == QuestionKind::ShortAnswer));
    }

    #[test]
    fn test_from_spec_rejects_invalid() {
        let spec = NotesSpec::from_json(r#"{ "v": 1, "summary": { "max_bullets": 0 } }"#).unwrap();
        let err = NotesPipeline::from_spec(&spec).unwrap_err();
        match &err {
            NotesError::InvalidSpec(report) => assert_eq!(report.errors().count(), 1),
            other => panic!("expected InvalidSpec, got {other:?}"),
        }
        assert!(err.to_string().contains("/summary/max_bullets"));
    }

    #[test]
    fn test_study_notes_wire_shape() {
        let notes = NotesPipeline::new()
            .run(&Source::text(PHOTOSYNTHESIS), &mut NoopObserver)
            .unwrap();
        let value = serde_json::to_value(&notes).unwrap();

        assert_eq!(value["summary"][0], "Photosynthesis converts light into energy");
        let first = &value["quiz"][0];
        assert_eq!(first["id"], 1);
        assert_eq!(first["type"], "fill_blank");
        assert_eq!(first["question"], "_____ converts light into energy.");
        assert_eq!(first["answer"], "photosynthesis");

        let back: StudyNotes = serde_json::from_value(value).unwrap();
        assert_eq!(back, notes);
    }
}
