//! Euclidean distance between score vectors.

use archetype_core::ScoreVector;

/// `sqrt(sum((a[d] - b[d])^2))` over all 8 dimensions. Raw scores are used
/// on every dimension; inverted dimensions are not flipped.
pub fn euclidean(a: &ScoreVector, b: &ScoreVector) -> f64 {
    squared_euclidean(a, b).sqrt()
}

/// Squared distance, for callers that only compare magnitudes.
pub fn squared_euclidean(a: &ScoreVector, b: &ScoreVector) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|((_, x), (_, y))| (x - y) * (x - y))
        .sum()
}
