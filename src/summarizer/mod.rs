//! Summarization components
//!
//! Provides extractive summarization: keyword-coverage scoring,
//! Jaccard-based deduplication and bullet formatting.

pub mod bullet;
pub mod dedup;
pub mod scorer;
pub mod selector;

pub use bullet::format_bullet;
pub use dedup::{jaccard_similarity, Deduplicator};
pub use selector::{summarize, SummarizerConfig, Summarizer, SummaryResult};
