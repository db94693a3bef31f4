//! ManualEntry — score-by-score input for a single team.

use archetype_core::config::IntakeConfig;
use archetype_core::errors::IntakeError;
use archetype_core::score_vector::validate_score;
use archetype_core::{Dimension, ScoreVector, TeamRecord};

/// Accumulates one score per dimension until the entry is complete.
///
/// This is the explicit state a form or CLI holds between keystrokes; it
/// only becomes a [`TeamRecord`] once every dimension has a score.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualEntry {
    team_name: String,
    scores: [Option<f64>; Dimension::COUNT],
}

impl Default for ManualEntry {
    fn default() -> Self {
        Self::new(&IntakeConfig::default())
    }
}

impl ManualEntry {
    pub fn new(config: &IntakeConfig) -> Self {
        Self {
            team_name: config.manual_team_name.clone(),
            scores: [None; Dimension::COUNT],
        }
    }

    /// Record a score, replacing any previous one for the dimension.
    pub fn set_score(&mut self, dimension: Dimension, score: f64) -> Result<(), IntakeError> {
        validate_score(dimension, score)?;
        self.scores[dimension.index()] = Some(score);
        Ok(())
    }

    /// Apply a `<dimension>=<score>` assignment, e.g. `burnout=1.5`.
    pub fn apply(&mut self, assignment: &str) -> Result<(), IntakeError> {
        let (name, value) =
            assignment
                .split_once('=')
                .ok_or_else(|| IntakeError::MalformedAssignment {
                    input: assignment.to_string(),
                })?;
        let dimension: Dimension = name.parse()?;
        let score = parse_number(value)?;
        self.set_score(dimension, score)
    }

    /// Set all 8 scores from a comma-separated list in display order.
    pub fn apply_list(&mut self, list: &str) -> Result<(), IntakeError> {
        let values = list
            .split(',')
            .map(parse_number)
            .collect::<Result<Vec<f64>, _>>()?;
        let scores = ScoreVector::from_slice(&values)?;
        for (dimension, score) in scores.iter() {
            self.scores[dimension.index()] = Some(score);
        }
        Ok(())
    }

    pub fn clear(&mut self, dimension: Dimension) {
        self.scores[dimension.index()] = None;
    }

    /// Forget every score. The team name is kept.
    pub fn reset(&mut self) {
        self.scores = [None; Dimension::COUNT];
    }

    pub fn score(&self, dimension: Dimension) -> Option<f64> {
        self.scores[dimension.index()]
    }

    /// Dimensions still without a score, in display order.
    pub fn missing(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.scores[d.index()].is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }

    /// The completed team record, or the list of missing dimensions.
    pub fn submit(&self) -> Result<TeamRecord, IntakeError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(IntakeError::IncompleteScores {
                missing: missing.iter().map(|d| d.name().to_string()).collect(),
            });
        }
        let values = self.scores.map(|s| s.unwrap_or_default());
        Ok(TeamRecord::new(self.team_name.clone(), ScoreVector::new(values)?))
    }
}

fn parse_number(raw: &str) -> Result<f64, IntakeError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| IntakeError::InvalidNumber {
        value: trimmed.to_string(),
    })
}
