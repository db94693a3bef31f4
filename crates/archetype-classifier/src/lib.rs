//! # archetype-classifier
//!
//! Nearest-centroid classification of team score vectors against the
//! archetype catalog. Euclidean distance over the 8 raw dimension scores,
//! an inverse-distance confidence in [0, 100], a templated justification
//! naming the closest runner-ups, and an order-preserving batch pipeline.

pub mod classify;
pub mod distance;
pub mod engine;
pub mod justify;

pub use classify::{classify, confidence};
pub use distance::euclidean;
pub use engine::ClassifierEngine;
pub use justify::justify;
