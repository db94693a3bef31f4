use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dimension::Dimension;

/// A dimension where the team sits far from its matched archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrongDifference {
    pub dimension: Dimension,
    pub team_score: f64,
    pub archetype_score: f64,
}

impl std::fmt::Display for StrongDifference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} vs {}",
            self.dimension, self.team_score, self.archetype_score
        )
    }
}

/// Explanation of why a team matched an archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Justification {
    pub archetype: String,
    /// Dimensions within the strong-match threshold.
    pub strong_matches: usize,
    pub strong_differences: Vec<StrongDifference>,
    /// Next-closest archetypes, nearest first.
    pub runner_ups: Vec<String>,
    /// Rendered sentence(s) for display.
    pub text: String,
}
