use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{ClassificationResult, Justification};
use crate::score_vector::ScoreVector;
use crate::team::TeamRecord;

/// Everything presentation needs for one team: the team, its match, the
/// matched archetype's profile to chart alongside it, and the explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatchEntry {
    pub team: TeamRecord,
    pub result: ClassificationResult,
    pub archetype_profile: ScoreVector,
    pub justification: Justification,
}
