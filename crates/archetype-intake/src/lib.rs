//! # archetype-intake
//!
//! Collectors that turn user input into complete [`TeamRecord`]s:
//! a manual entry state object for one team, and a tabular text parser for
//! many. Partial input never reaches the classifier; it is rejected here.
//!
//! [`TeamRecord`]: archetype_core::TeamRecord

pub mod columns;
pub mod manual;
pub mod tabular;

pub use columns::{ColumnBinding, DIMENSION_ALIASES};
pub use manual::ManualEntry;
pub use tabular::{parse_file, parse_tabular, SkippedRow, TabularIntake, TabularParser};
