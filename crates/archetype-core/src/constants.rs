/// Number of archetypes in the built-in catalog.
pub const ARCHETYPE_COUNT: usize = 7;

/// Lowest score a dimension may take.
pub const SCORE_MIN: f64 = 0.0;

/// Highest score a dimension may take.
pub const SCORE_MAX: f64 = 4.0;

/// Confidence reported when every catalog distance is zero.
pub const DEGENERATE_CONFIDENCE: u8 = 100;

/// Upper bound of the confidence scale.
pub const MAX_CONFIDENCE: u8 = 100;
