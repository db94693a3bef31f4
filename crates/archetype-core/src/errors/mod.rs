mod classification_error;
mod config_error;
mod intake_error;
mod score_error;

pub use classification_error::ClassificationError;
pub use config_error::ConfigError;
pub use intake_error::IntakeError;
pub use score_error::ScoreError;

/// Top-level error type. Subsystem errors convert into it with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ArchetypeError {
    #[error("score error: {0}")]
    Score(#[from] ScoreError),

    #[error("classification error: {0}")]
    Classification(#[from] ClassificationError),

    #[error("{0}")]
    Intake(#[from] IntakeError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ArchetypeResult<T> = Result<T, ArchetypeError>;
