mod classifier_config;
pub mod defaults;
mod intake_config;
mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use classifier_config::ClassifierConfig;
pub use intake_config::IntakeConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::ConfigError;

/// Top-level configuration, loaded from TOML. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypeConfig {
    pub classifier: ClassifierConfig,
    pub intake: IntakeConfig,
    pub observability: ObservabilityConfig,
}

impl ArchetypeConfig {
    /// Parse and validate a TOML string. Missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    /// Reject thresholds that would make the justification meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.classifier;
        if !c.strong_match_threshold.is_finite() || c.strong_match_threshold < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "classifier.strong_match_threshold".into(),
                reason: format!("must be a non-negative number, got {}", c.strong_match_threshold),
            });
        }
        if !c.strong_difference_threshold.is_finite()
            || c.strong_difference_threshold < c.strong_match_threshold
        {
            return Err(ConfigError::InvalidValue {
                field: "classifier.strong_difference_threshold".into(),
                reason: format!(
                    "must be >= strong_match_threshold ({}), got {}",
                    c.strong_match_threshold, c.strong_difference_threshold
                ),
            });
        }
        if self.intake.manual_team_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "intake.manual_team_name".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.intake.delimiter.is_alphanumeric() || self.intake.delimiter == '.' {
            return Err(ConfigError::InvalidValue {
                field: "intake.delimiter".into(),
                reason: format!("'{}' would collide with team names or numbers", self.intake.delimiter),
            });
        }
        Ok(())
    }
}
