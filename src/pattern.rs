use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Canonical set of braille dot indices (1-6) for one character cell.
///
/// Always stored sorted and deduplicated, so equal dot sets compare equal and
/// hash identically regardless of key press order. That lets a pattern key
/// trie children directly. The empty pattern is valid: letters absent from a
/// language table map to it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DotPattern(Vec<u8>);

impl DotPattern {
    /// Build a canonical pattern from arbitrary dot indices.
    pub fn new(dots: impl IntoIterator<Item = u8>) -> Self {
        let mut dots: Vec<u8> = dots.into_iter().collect();
        dots.sort_unstable();
        dots.dedup();
        Self(dots)
    }

    /// The pattern of an unmapped character: no dots at all.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn dots(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Jaccard distance `1 - |a n b| / |a u b|` between two dot sets.
    ///
    /// 0.0 for identical non-empty patterns, 1.0 for disjoint ones. Two empty
    /// patterns are defined as maximally dissimilar (1.0) so substituting one
    /// unmapped cell for another is never free.
    pub fn jaccard_distance(&self, other: &DotPattern) -> f64 {
        let mut shared = 0usize;
        let (mut i, mut j) = (0, 0);
        // Both sides are sorted, so a single merge pass counts the overlap.
        while i < self.0.len() && j < other.0.len() {
            match self.0[i].cmp(&other.0[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        let union = self.0.len() + other.0.len() - shared;
        if union == 0 {
            return 1.0;
        }
        1.0 - shared as f64 / union as f64
    }
}

impl fmt::Display for DotPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("()");
        }
        for (idx, dot) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("-")?;
            }
            write!(f, "{dot}")?;
        }
        Ok(())
    }
}
