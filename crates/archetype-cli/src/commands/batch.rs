//! `batch`: many teams from a tabular file.

use std::path::PathBuf;

use anyhow::Context;
use archetype_classifier::ClassifierEngine;
use archetype_core::ArchetypeConfig;
use archetype_intake::parse_file;
use clap::Args;

use super::{format_entries, OutputFormat};

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Delimited text file: header row, then one team per row
    pub file: PathBuf,
}

pub fn handle_batch(
    args: &BatchArgs,
    config: &ArchetypeConfig,
    engine: &ClassifierEngine,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let intake = parse_file(&args.file, &config.intake)
        .with_context(|| format!("failed to load teams from {}", args.file.display()))?;

    if !intake.skipped.is_empty() {
        tracing::warn!(
            skipped = intake.skipped.len(),
            accepted = intake.records.len(),
            "some rows were skipped"
        );
    }

    let entries = engine.run_batch(&intake.records)?;
    format_entries(&entries, format)
}
