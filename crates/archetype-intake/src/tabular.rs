//! Tabular text intake: a header row, then one team per row.
//!
//! The first column is the team name. Other columns bind to dimensions via
//! [`ColumnBinding`]. A row is kept only when every bound cell parses as a
//! score in [0, 4]; other rows are skipped and reported, never fatal.

use std::path::Path;

use archetype_core::config::IntakeConfig;
use archetype_core::errors::IntakeError;
use archetype_core::{Dimension, ScoreVector, TeamRecord};
use archetype_observability::{events, intake_span};

use crate::columns::ColumnBinding;

/// A data row that did not become a team record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the input text.
    pub line: usize,
    pub reason: String,
}

/// Accepted records in input order, plus the rows that were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularIntake {
    pub records: Vec<TeamRecord>,
    pub skipped: Vec<SkippedRow>,
}

/// Parser for delimiter-separated team score tables.
#[derive(Debug, Clone)]
pub struct TabularParser {
    delimiter: char,
}

impl Default for TabularParser {
    fn default() -> Self {
        Self::new(&IntakeConfig::default())
    }
}

impl TabularParser {
    pub fn new(config: &IntakeConfig) -> Self {
        Self {
            delimiter: config.delimiter,
        }
    }

    /// Parse a whole table. Blank lines are ignored.
    ///
    /// Errors: empty text, a header missing a dimension column, or no row
    /// surviving validation.
    pub fn parse(&self, text: &str) -> Result<TabularIntake, IntakeError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, header) = lines.next().ok_or(IntakeError::EmptyInput)?;
        let headers = self.split(header);
        let binding = ColumnBinding::resolve(&headers)?;

        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for (line, row) in lines {
            match self.parse_row(row, &binding) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    events::row_skipped(line, &reason);
                    skipped.push(SkippedRow { line, reason });
                }
            }
        }

        events::intake_completed(records.len(), skipped.len());
        if records.is_empty() {
            return Err(IntakeError::NoValidTeams {
                skipped: skipped.len(),
            });
        }
        Ok(TabularIntake { records, skipped })
    }

    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        line.split(self.delimiter).map(str::trim).collect()
    }

    fn parse_row(&self, row: &str, binding: &ColumnBinding) -> Result<TeamRecord, String> {
        let cells = self.split(row);
        let name = cells[0];

        let mut values = [0.0; Dimension::COUNT];
        for dimension in Dimension::ALL {
            let column = binding.column(dimension);
            let cell = cells
                .get(column)
                .filter(|c| !c.is_empty())
                .ok_or_else(|| format!("missing value for {dimension}"))?;
            values[dimension.index()] = cell
                .parse()
                .map_err(|_| format!("{dimension}: '{cell}' is not a number"))?;
        }

        let scores = ScoreVector::new(values).map_err(|e| e.to_string())?;
        Ok(TeamRecord::new(name, scores))
    }
}

/// Parse with the default config (comma-separated).
pub fn parse_tabular(text: &str) -> Result<TabularIntake, IntakeError> {
    TabularParser::default().parse(text)
}

/// Read and parse a file.
pub fn parse_file(path: impl AsRef<Path>, config: &IntakeConfig) -> Result<TabularIntake, IntakeError> {
    let path = path.as_ref();
    let span = intake_span!(path.display());
    let _guard = span.enter();

    let text = std::fs::read_to_string(path).map_err(|e| IntakeError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    TabularParser::new(config).parse(&text)
}
