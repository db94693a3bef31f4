//! # archetype-core
//!
//! Foundation crate for team archetype classification.
//! Defines the 8 performance dimensions, validated score vectors, the static
//! archetype catalog, result models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod archetype;
pub mod config;
pub mod constants;
pub mod dimension;
pub mod errors;
pub mod models;
pub mod score_vector;
pub mod team;

// Re-export the most commonly used types at the crate root.
pub use archetype::{Archetype, CATALOG};
pub use config::ArchetypeConfig;
pub use dimension::Dimension;
pub use errors::{ArchetypeError, ArchetypeResult};
pub use models::{ArchetypeDistance, BatchEntry, ClassificationResult, Justification};
pub use score_vector::ScoreVector;
pub use team::TeamRecord;
