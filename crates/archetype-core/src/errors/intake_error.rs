/// Collector errors. Each maps to one user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("please provide scores for all dimensions (missing: {})", .missing.join(", "))]
    IncompleteScores { missing: Vec<String> },

    #[error("no input provided")]
    EmptyInput,

    #[error("could not read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("no column found for: {}", .dimensions.join(", "))]
    UnresolvedColumns { dimensions: Vec<String> },

    #[error("no valid teams found ({skipped} rows skipped)")]
    NoValidTeams { skipped: usize },

    #[error("not a number: '{value}'")]
    InvalidNumber { value: String },

    #[error("expected <dimension>=<score>, got '{input}'")]
    MalformedAssignment { input: String },

    #[error("invalid score: {0}")]
    InvalidScore(#[from] super::ScoreError),
}
