//! Nearest-archetype lookup and confidence scoring.

use archetype_core::constants::{DEGENERATE_CONFIDENCE, MAX_CONFIDENCE};
use archetype_core::errors::ClassificationError;
use archetype_core::{Archetype, ArchetypeDistance, ClassificationResult, ScoreVector};
use archetype_observability::events;

use crate::distance::euclidean;

/// Classify `query` against `catalog`.
///
/// The match is the archetype with the smallest distance. Ties go to the
/// archetype that comes first in catalog order.
pub fn classify(
    query: &ScoreVector,
    catalog: &[Archetype],
) -> Result<ClassificationResult, ClassificationError> {
    let mut distances = Vec::with_capacity(catalog.len());
    let mut best: Option<(usize, f64)> = None;
    let mut max_distance = 0.0_f64;

    for (i, archetype) in catalog.iter().enumerate() {
        let distance = euclidean(query, &archetype.profile);
        distances.push(ArchetypeDistance {
            archetype: archetype.name.to_string(),
            distance,
        });

        // Strict `<` keeps the first of equal distances.
        if best.map_or(true, |(_, min)| distance < min) {
            best = Some((i, distance));
        }
        max_distance = max_distance.max(distance);
    }

    let (best_idx, min_distance) = best.ok_or(ClassificationError::EmptyCatalog)?;
    if max_distance == 0.0 {
        events::degenerate_distances(catalog.len());
    }

    Ok(ClassificationResult {
        archetype: catalog[best_idx].name.to_string(),
        distance: min_distance,
        confidence: confidence(min_distance, max_distance),
        distances,
    })
}

/// `round((1 - min / max) * 100)`, clamped to [0, 100].
///
/// When `max` is zero every archetype coincides with the query and the
/// confidence is 100.
pub fn confidence(min_distance: f64, max_distance: f64) -> u8 {
    if max_distance <= 0.0 {
        return DEGENERATE_CONFIDENCE;
    }
    let raw = ((1.0 - min_distance / max_distance) * 100.0).round();
    raw.clamp(0.0, f64::from(MAX_CONFIDENCE)) as u8
}
