//! Spoken-transcript cleanup
//!
//! Video captions open with greetings and channel chatter and often repeat
//! lines. Cleaning removes both before the text is summarized.

pub mod cleaner;

pub use cleaner::{clean_transcript, TranscriptCleaner, TranscriptConfig};
