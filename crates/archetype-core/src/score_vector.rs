use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{SCORE_MAX, SCORE_MIN};
use crate::dimension::Dimension;
use crate::errors::ScoreError;

/// A complete assignment of a score in [0, 4] to every dimension.
///
/// Fields are private so the range invariant holds for every constructed
/// value. A vector with a missing dimension cannot be built; collectors
/// accumulate partial input elsewhere and convert once it is complete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "RawScores")]
pub struct ScoreVector {
    team_performance: f64,
    product_performance: f64,
    software_delivery_throughput: f64,
    software_delivery_instability: f64,
    individual_effectiveness: f64,
    valuable_work: f64,
    friction: f64,
    burnout: f64,
}

/// Unvalidated mirror of [`ScoreVector`] used during deserialization.
#[derive(Deserialize)]
struct RawScores {
    team_performance: f64,
    product_performance: f64,
    software_delivery_throughput: f64,
    software_delivery_instability: f64,
    individual_effectiveness: f64,
    valuable_work: f64,
    friction: f64,
    burnout: f64,
}

impl TryFrom<RawScores> for ScoreVector {
    type Error = ScoreError;

    fn try_from(raw: RawScores) -> Result<Self, Self::Error> {
        Self::new([
            raw.team_performance,
            raw.product_performance,
            raw.software_delivery_throughput,
            raw.software_delivery_instability,
            raw.individual_effectiveness,
            raw.valuable_work,
            raw.friction,
            raw.burnout,
        ])
    }
}

impl ScoreVector {
    /// Build from values in [`Dimension::ALL`] order, validating each one.
    pub fn new(values: [f64; Dimension::COUNT]) -> Result<Self, ScoreError> {
        for dimension in Dimension::ALL {
            validate_score(dimension, values[dimension.index()])?;
        }
        Ok(Self::from_array(values))
    }

    /// Build without validation. Only for compile-time reference data.
    pub(crate) const fn from_array(values: [f64; Dimension::COUNT]) -> Self {
        Self {
            team_performance: values[0],
            product_performance: values[1],
            software_delivery_throughput: values[2],
            software_delivery_instability: values[3],
            individual_effectiveness: values[4],
            valuable_work: values[5],
            friction: values[6],
            burnout: values[7],
        }
    }

    /// Build from a slice; the slice must hold exactly one value per dimension.
    pub fn from_slice(values: &[f64]) -> Result<Self, ScoreError> {
        let values: [f64; Dimension::COUNT] =
            values
                .try_into()
                .map_err(|_| ScoreError::WrongLength {
                    expected: Dimension::COUNT,
                    actual: values.len(),
                })?;
        Self::new(values)
    }

    /// Every dimension set to the same score.
    pub fn uniform(score: f64) -> Result<Self, ScoreError> {
        Self::new([score; Dimension::COUNT])
    }

    /// Score on one dimension.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::TeamPerformance => self.team_performance,
            Dimension::ProductPerformance => self.product_performance,
            Dimension::SoftwareDeliveryThroughput => self.software_delivery_throughput,
            Dimension::SoftwareDeliveryInstability => self.software_delivery_instability,
            Dimension::IndividualEffectiveness => self.individual_effectiveness,
            Dimension::ValuableWork => self.valuable_work,
            Dimension::Friction => self.friction,
            Dimension::Burnout => self.burnout,
        }
    }

    /// Copy with one dimension replaced.
    pub fn with(mut self, dimension: Dimension, score: f64) -> Result<Self, ScoreError> {
        validate_score(dimension, score)?;
        let slot = match dimension {
            Dimension::TeamPerformance => &mut self.team_performance,
            Dimension::ProductPerformance => &mut self.product_performance,
            Dimension::SoftwareDeliveryThroughput => &mut self.software_delivery_throughput,
            Dimension::SoftwareDeliveryInstability => &mut self.software_delivery_instability,
            Dimension::IndividualEffectiveness => &mut self.individual_effectiveness,
            Dimension::ValuableWork => &mut self.valuable_work,
            Dimension::Friction => &mut self.friction,
            Dimension::Burnout => &mut self.burnout,
        };
        *slot = score;
        Ok(self)
    }

    /// Values in [`Dimension::ALL`] order.
    pub fn to_array(&self) -> [f64; Dimension::COUNT] {
        Dimension::ALL.map(|d| self.get(d))
    }

    /// `(dimension, score)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

/// Check that a single score is finite and within [0, 4].
pub fn validate_score(dimension: Dimension, score: f64) -> Result<(), ScoreError> {
    if !score.is_finite() {
        return Err(ScoreError::NotFinite { dimension });
    }
    if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
        return Err(ScoreError::OutOfRange {
            dimension,
            value: score,
            min: SCORE_MIN,
            max: SCORE_MAX,
        });
    }
    Ok(())
}
