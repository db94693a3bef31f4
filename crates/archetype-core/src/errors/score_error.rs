use crate::dimension::Dimension;

/// Score validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("score for {dimension} is {value}, outside [{min}, {max}]")]
    OutOfRange {
        dimension: Dimension,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("score for {dimension} is not a finite number")]
    NotFinite { dimension: Dimension },

    #[error("expected {expected} scores, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("unknown dimension: {name}")]
    UnknownDimension { name: String },
}
