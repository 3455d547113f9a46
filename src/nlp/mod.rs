//! Natural Language Processing components
//!
//! This module provides whitespace normalization, sentence segmentation,
//! keyword ranking and stopword filtering.

pub mod keywords;
pub mod normalize;
pub mod segmenter;
pub mod stopwords;

pub use keywords::{extract_keywords, KeywordExtractor, KeywordRanking};
pub use normalize::normalize_whitespace;
pub use segmenter::{segment, Segmenter, SegmenterConfig};
pub use stopwords::StopwordFilter;
