// Single source of truth for all default values.

// --- Classifier ---
pub const DEFAULT_STRONG_MATCH_THRESHOLD: f64 = 0.5;
pub const DEFAULT_STRONG_DIFFERENCE_THRESHOLD: f64 = 1.5;
pub const DEFAULT_RUNNER_UP_COUNT: usize = 2;
pub const DEFAULT_SURFACE_STRONG_DIFFERENCES: bool = false;

// --- Intake ---
pub const DEFAULT_MANUAL_TEAM_NAME: &str = "Your Team";
pub const DEFAULT_DELIMITER: char = ',';

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
