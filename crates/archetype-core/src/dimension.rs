use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ScoreError;

/// The 8 performance dimensions a team is scored on.
///
/// Variant order is display order. Three dimensions are inverted (lower raw
/// score is the better outcome); the flag only changes how labels read; it
/// never transforms the numbers used for distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    TeamPerformance,
    ProductPerformance,
    SoftwareDeliveryThroughput,
    SoftwareDeliveryInstability,
    IndividualEffectiveness,
    ValuableWork,
    Friction,
    Burnout,
}

impl Dimension {
    /// Total number of dimensions.
    pub const COUNT: usize = 8;

    /// All variants in display order.
    pub const ALL: [Dimension; 8] = [
        Self::TeamPerformance,
        Self::ProductPerformance,
        Self::SoftwareDeliveryThroughput,
        Self::SoftwareDeliveryInstability,
        Self::IndividualEffectiveness,
        Self::ValuableWork,
        Self::Friction,
        Self::Burnout,
    ];

    /// Human-readable name, as shown on forms and charts.
    pub fn name(self) -> &'static str {
        match self {
            Self::TeamPerformance => "Team Performance",
            Self::ProductPerformance => "Product Performance",
            Self::SoftwareDeliveryThroughput => "Software Delivery Throughput",
            Self::SoftwareDeliveryInstability => "Software Delivery Instability",
            Self::IndividualEffectiveness => "Individual Effectiveness",
            Self::ValuableWork => "Valuable Work",
            Self::Friction => "Friction",
            Self::Burnout => "Burnout",
        }
    }

    /// Stable snake_case key used in config files, JSON, and CLI arguments.
    pub fn key(self) -> &'static str {
        match self {
            Self::TeamPerformance => "team_performance",
            Self::ProductPerformance => "product_performance",
            Self::SoftwareDeliveryThroughput => "software_delivery_throughput",
            Self::SoftwareDeliveryInstability => "software_delivery_instability",
            Self::IndividualEffectiveness => "individual_effectiveness",
            Self::ValuableWork => "valuable_work",
            Self::Friction => "friction",
            Self::Burnout => "burnout",
        }
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        match self {
            Self::TeamPerformance => 0,
            Self::ProductPerformance => 1,
            Self::SoftwareDeliveryThroughput => 2,
            Self::SoftwareDeliveryInstability => 3,
            Self::IndividualEffectiveness => 4,
            Self::ValuableWork => 5,
            Self::Friction => 6,
            Self::Burnout => 7,
        }
    }

    /// True when a lower raw score is the better outcome.
    pub fn is_inverted(self) -> bool {
        matches!(
            self,
            Self::SoftwareDeliveryInstability | Self::Friction | Self::Burnout
        )
    }

    /// Input hint shown next to the label.
    pub fn hint(self) -> &'static str {
        if self.is_inverted() {
            "(lower is better)"
        } else {
            "(higher is better)"
        }
    }

    /// Name plus direction hint, e.g. `"Burnout (lower is better)"`.
    pub fn label(self) -> String {
        format!("{} {}", self.name(), self.hint())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = ScoreError;

    /// Accepts the display name (any case, any spacing) or the snake_case key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        Self::ALL
            .into_iter()
            .find(|d| d.name().to_lowercase() == normalized)
            .ok_or_else(|| ScoreError::UnknownDimension {
                name: s.to_string(),
            })
    }
}
