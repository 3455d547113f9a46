//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages and emitting structured
//! telemetry from an embedding application.

use std::time::{Duration, Instant};

/// Transcript filler and repeat removal (transcript sources only).
pub const STAGE_CLEAN_TRANSCRIPT: &str = "clean_transcript";
/// Sentence segmentation.
pub const STAGE_SEGMENT: &str = "segment";
/// Keyword ranking over the full text.
pub const STAGE_KEYWORDS: &str = "keywords";
/// Bullet selection.
pub const STAGE_SUMMARIZE: &str = "summarize";
/// Question generation.
pub const STAGE_QUIZ: &str = "quiz";

/// Receives callbacks as the pipeline moves through its stages.
///
/// Every hook has a no-op default, so implementors only override what they
/// need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a finished stage reports to the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    elapsed: Duration,
    items: usize,
}

impl StageReport {
    /// `items` is the stage's output size: units, keywords, bullets or
    /// questions.
    pub fn new(elapsed: Duration, items: usize) -> Self {
        Self { elapsed, items }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn items(&self) -> usize {
        self.items
    }
}
