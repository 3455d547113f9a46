//! Quiz generation
//!
//! Builds fill-in-the-blank and short-answer questions from the input text
//! and its summary bullets, in three tiers: cloze questions from keyword
//! sentences, explain-this questions from bullets, and a last-resort
//! takeaway question per bullet.

pub mod cloze;
pub mod generator;

pub use generator::{generate_quiz, QuizConfig, QuizGenerator};
