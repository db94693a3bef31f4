use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Distance from a query to one archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArchetypeDistance {
    pub archetype: String,
    pub distance: f64,
}

/// Outcome of classifying one score vector against a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResult {
    /// Name of the nearest archetype.
    pub archetype: String,
    /// Euclidean distance to the nearest archetype.
    pub distance: f64,
    /// Normalised inverse-distance score in [0, 100]. Not a probability.
    pub confidence: u8,
    /// One entry per catalog archetype, in catalog order.
    pub distances: Vec<ArchetypeDistance>,
}

impl ClassificationResult {
    /// Distance to a named archetype, if it was part of the catalog.
    pub fn distance_to(&self, archetype: &str) -> Option<f64> {
        self.distances
            .iter()
            .find(|d| d.archetype == archetype)
            .map(|d| d.distance)
    }

    /// Archetypes sorted by ascending distance. Equal distances keep catalog order.
    pub fn ranked(&self) -> Vec<&ArchetypeDistance> {
        let mut ranked: Vec<&ArchetypeDistance> = self.distances.iter().collect();
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ranked
    }
}
