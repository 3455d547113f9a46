//! Notes pipeline
//!
//! Wires transcript cleaning, segmentation, keyword ranking, summarization
//! and quiz generation into a single run over a [`Source`], configured by a
//! validated [`NotesSpec`].

pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod source;
pub mod spec;
pub mod validation;

pub use error_code::ErrorCode;
pub use errors::SpecError;
pub use observer::{NoopObserver, PipelineObserver, StageClock, StageReport};
pub use runner::{NotesPipeline, StudyNotes};
pub use source::Source;
pub use spec::{NotesSpec, SPEC_VERSION};
pub use validation::{ValidationEngine, ValidationReport, ValidationRule};
