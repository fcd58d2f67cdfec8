//! Correction-acceptance counters feeding a bounded ranking bonus.

use std::collections::HashMap;

/// Score reduction granted per accepted correction.
const BONUS_PER_CORRECTION: f64 = 0.1;
/// Ceiling on the total reduction, reached after five acceptances.
const MAX_BONUS: f64 = 0.5;

/// Per-word acceptance counts, keyed by lowercased word.
///
/// Counts only grow; `reset` wipes the store between independent runs.
/// Nothing is persisted. Increments take `&mut self`, so concurrent callers
/// must serialize them; reads are free to share.
#[derive(Debug, Default)]
pub struct LearningStore {
    counts: HashMap<String, u32>,
}

impl LearningStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `word` was accepted as a correction.
    pub fn record_correction(&mut self, word: &str) {
        *self.counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    /// Times `word` has been accepted, case-insensitively.
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Ranking bonus for `word`: 0.1 per acceptance, capped at 0.5. The
    /// stored count keeps growing past the cap.
    pub fn bonus(&self, word: &str) -> f64 {
        (BONUS_PER_CORRECTION * f64::from(self.count(word))).min(MAX_BONUS)
    }

    /// Drop all counts, e.g. between independent evaluation runs.
    pub fn reset(&mut self) {
        self.counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
