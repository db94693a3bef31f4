use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::defaults;
use crate::score_vector::ScoreVector;

/// A team's display name and its complete score vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TeamRecord {
    pub name: String,
    pub scores: ScoreVector,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>, scores: ScoreVector) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }

    /// A record named with the default manual-entry team name.
    pub fn manual(scores: ScoreVector) -> Self {
        Self::new(defaults::DEFAULT_MANUAL_TEAM_NAME, scores)
    }
}
