//! `classify`: one team from scores given on the command line.

use anyhow::Context;
use archetype_classifier::ClassifierEngine;
use archetype_core::ArchetypeConfig;
use archetype_intake::ManualEntry;
use clap::Args;

use super::{format_entries, OutputFormat};

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// All 8 scores in display order, comma-separated (see `dimensions`)
    #[arg(long, value_name = "LIST")]
    pub scores: Option<String>,

    /// One score as <dimension>=<value>; repeatable, applied after --scores
    #[arg(long = "score", value_name = "DIM=VALUE")]
    pub assignments: Vec<String>,

    /// Team name shown in the output
    #[arg(long)]
    pub name: Option<String>,
}

pub fn handle_classify(
    args: &ClassifyArgs,
    config: &ArchetypeConfig,
    engine: &ClassifierEngine,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut intake = config.intake.clone();
    if let Some(name) = &args.name {
        intake.manual_team_name = name.clone();
    }

    let mut entry = ManualEntry::new(&intake);
    if let Some(list) = &args.scores {
        entry.apply_list(list).context("invalid --scores")?;
    }
    for assignment in &args.assignments {
        entry
            .apply(assignment)
            .with_context(|| format!("invalid --score {assignment}"))?;
    }

    let record = entry.submit()?;
    let entries = engine.run_batch(std::slice::from_ref(&record))?;
    format_entries(&entries, format)
}
