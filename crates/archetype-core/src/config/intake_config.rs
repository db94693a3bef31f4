use serde::{Deserialize, Serialize};

use super::defaults;

/// Collector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Display name given to a manually entered team.
    pub manual_team_name: String,
    /// Column separator for tabular input.
    pub delimiter: char,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            manual_team_name: defaults::DEFAULT_MANUAL_TEAM_NAME.to_string(),
            delimiter: defaults::DEFAULT_DELIMITER,
        }
    }
}
