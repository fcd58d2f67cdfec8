//! Weighted edit distance between dot-pattern sequences.

use crate::pattern::DotPattern;

/// Added once per unit of length difference between input and candidate,
/// outside the DP recurrence.
pub const LENGTH_SKEW_PENALTY: f64 = 0.5;

/// Edit distance with unit insertion/deletion cost and a continuous
/// substitution cost, plus a single post-hoc length-skew penalty.
///
/// A dropped or added chord costs 1.0; a misread chord costs the Jaccard
/// distance between the two cells, so near-miss chords substitute cheaply.
/// The skew penalty biases ranking against candidates whose group count
/// differs sharply from the input's. Symmetric in its arguments.
pub fn sequence_distance(input: &[DotPattern], candidate: &[DotPattern]) -> f64 {
    let penalty = LENGTH_SKEW_PENALTY * input.len().abs_diff(candidate.len()) as f64;

    // Keep the shorter sequence on the DP row: O(n*m) time, O(min(n,m)) space.
    let (longer, shorter) = if input.len() < candidate.len() {
        (candidate, input)
    } else {
        (input, candidate)
    };
    if shorter.is_empty() {
        return longer.len() as f64 + penalty;
    }

    let mut previous: Vec<f64> = (0..=shorter.len()).map(|j| j as f64).collect();
    let mut current = vec![0.0; shorter.len() + 1];
    for (i, a) in longer.iter().enumerate() {
        current[0] = (i + 1) as f64;
        for (j, b) in shorter.iter().enumerate() {
            let insertion = previous[j + 1] + 1.0;
            let deletion = current[j] + 1.0;
            let substitution = previous[j] + a.jaccard_distance(b);
            current[j + 1] = insertion.min(deletion).min(substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[shorter.len()] + penalty
}
