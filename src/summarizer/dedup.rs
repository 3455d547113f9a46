//! Near-duplicate detection
//!
//! Similarity is the Jaccard index over lowercased word sets. Summary
//! selection uses a strict threshold to avoid repeating a point, transcript
//! cleaning a lenient one that only drops near-exact repeats.

use rustc_hash::FxHashSet;

/// Threshold used when selecting summary bullets
pub const SUMMARY_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Threshold used when cleaning transcripts
pub const TRANSCRIPT_SIMILARITY_THRESHOLD: f64 = 0.8;

fn word_set(text: &str) -> FxHashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Jaccard similarity of the word sets of `a` and `b`.
///
/// Returns 0.0 if either text has no words.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let set_a = word_set(a);
    let set_b = word_set(b);
    jaccard(&set_a, &set_b)
}

fn jaccard(a: &FxHashSet<String>, b: &FxHashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Tracks accepted texts and rejects candidates too similar to any of them
#[derive(Debug, Clone)]
pub struct Deduplicator {
    threshold: f64,
    accepted: Vec<FxHashSet<String>>,
}

impl Deduplicator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            accepted: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// True if `candidate` is at least `threshold` similar to an accepted text
    pub fn is_near_duplicate(&self, candidate: &str) -> bool {
        let words = word_set(candidate);
        self.accepted
            .iter()
            .any(|kept| jaccard(&words, kept) >= self.threshold)
    }

    /// Record `text` as accepted
    pub fn accept(&mut self, text: &str) {
        self.accepted.push(word_set(text));
    }

    /// Accept `text` unless it is a near-duplicate; returns whether it was kept
    pub fn try_accept(&mut self, text: &str) -> bool {
        if self.is_near_duplicate(text) {
            return false;
        }
        self.accept(text);
        true
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// Check `candidate` against a slice of already-accepted texts
pub fn is_near_duplicate<S: AsRef<str>>(candidate: &str, accepted: &[S], threshold: f64) -> bool {
    let words = word_set(candidate);
    accepted
        .iter()
        .any(|kept| jaccard(&words, &word_set(kept.as_ref())) >= threshold)
}
