//! # smart-notes
//!
//! Extractive study notes: a bullet summary and a short quiz built from
//! plain text, document pages or video transcripts.
//!
//! ## Quick Start
//!
//! ```rust
//! use smart_notes::{generate_quiz, summarize};
//!
//! let text = "Photosynthesis converts light into energy. Plants use chlorophyll. \
//!             Photosynthesis is vital for life. The sun provides the light.";
//! let bullets = summarize(text, 2);
//! assert_eq!(bullets[0], "Photosynthesis converts light into energy");
//!
//! let quiz = generate_quiz(text, &bullets, 3);
//! assert_eq!(quiz.len(), 3);
//! ```
//!
//! For transcripts and configurable runs use [`pipeline::NotesPipeline`].

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod quiz;
pub mod summarizer;
pub mod transcript;
pub mod types;

pub use errors::{NotesError, NotesResult};
pub use pipeline::{NotesPipeline, NotesSpec, Source, StudyNotes};
pub use quiz::{generate_quiz, QuizConfig, QuizGenerator};
pub use summarizer::{summarize, Summarizer, SummarizerConfig};
pub use transcript::{clean_transcript, TranscriptCleaner};
pub use types::{Keyword, Question, QuestionKind, TextUnit};
