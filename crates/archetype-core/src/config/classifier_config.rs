use serde::{Deserialize, Serialize};

use super::defaults;

/// Classifier and justification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Absolute per-dimension difference below which a dimension counts as a strong match.
    pub strong_match_threshold: f64,
    /// Absolute per-dimension difference above which a dimension counts as a strong difference.
    pub strong_difference_threshold: f64,
    /// How many next-closest archetypes the justification names.
    pub runner_up_count: usize,
    /// Append strong differences to the justification text.
    pub surface_strong_differences: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            strong_match_threshold: defaults::DEFAULT_STRONG_MATCH_THRESHOLD,
            strong_difference_threshold: defaults::DEFAULT_STRONG_DIFFERENCE_THRESHOLD,
            runner_up_count: defaults::DEFAULT_RUNNER_UP_COUNT,
            surface_strong_differences: defaults::DEFAULT_SURFACE_STRONG_DIFFERENCES,
        }
    }
}
