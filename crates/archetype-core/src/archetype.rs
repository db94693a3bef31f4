//! Archetype reference profiles and the built-in catalog.
//!
//! The catalog is hand-authored, immutable, and iterated in declaration
//! order. That order is the classifier's tie-break.

use std::borrow::Cow;

use serde::Serialize;

use crate::score_vector::ScoreVector;

/// A named reference profile used as a classification target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Archetype {
    pub name: Cow<'static, str>,
    pub profile: ScoreVector,
}

impl Archetype {
    /// Build a custom archetype, e.g. for an alternative catalog.
    pub fn new(name: impl Into<Cow<'static, str>>, profile: ScoreVector) -> Self {
        Self {
            name: name.into(),
            profile,
        }
    }

    const fn builtin(name: &'static str, values: [f64; 8]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            profile: ScoreVector::from_array(values),
        }
    }
}

/// The 7 built-in archetypes. Values are in `Dimension::ALL` order:
/// team perf, product perf, throughput, instability, individual
/// effectiveness, valuable work, friction, burnout.
pub static CATALOG: [Archetype; 7] = [
    Archetype::builtin("Foundational Challenges", [1.0, 1.0, 1.5, 2.5, 1.0, 1.0, 3.0, 3.0]),
    Archetype::builtin("Legacy bottleneck", [0.5, 1.0, 1.5, 3.0, 2.0, 2.0, 2.0, 2.0]),
    Archetype::builtin("Constrained by process", [2.0, 2.0, 2.0, 2.0, 1.5, 1.5, 3.0, 3.0]),
    Archetype::builtin("High impact, low cadence", [3.0, 3.0, 2.0, 4.0, 3.0, 3.0, 1.0, 1.0]),
    Archetype::builtin("Stable and methodical", [2.0, 2.0, 1.5, 2.0, 2.5, 2.5, 2.0, 1.5]),
    Archetype::builtin("Pragmatic performers", [2.0, 2.0, 2.5, 1.5, 2.0, 2.0, 2.0, 2.0]),
    Archetype::builtin("Harmonious high achiever", [3.0, 3.0, 2.5, 1.5, 3.0, 3.0, 1.0, 1.0]),
];

/// Find an archetype in a catalog by exact name.
pub fn find<'a>(catalog: &'a [Archetype], name: &str) -> Option<&'a Archetype> {
    catalog.iter().find(|a| a.name == name)
}
