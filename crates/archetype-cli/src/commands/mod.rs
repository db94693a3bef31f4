//! CLI command handlers
//!
//! Each handler returns the text to print on stdout; `main` owns printing
//! and exit codes.
//!
//! # Modules
//!
//! - `classify`: manual entry for a single team
//! - `batch`: tabular file intake for many teams
//! - `catalog`: reference data listings

pub mod batch;
pub mod catalog;
pub mod classify;

use anyhow::Context;
use archetype_core::BatchEntry;
use clap::ValueEnum;

use crate::render;

/// Output format for classification results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub(crate) fn format_entries(entries: &[BatchEntry], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render::render_text(entries)),
        OutputFormat::Json => render::render_json(entries).context("failed to serialize results"),
    }
}
