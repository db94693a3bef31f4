//! Team archetype CLI
//!
//! Classifies team performance profiles against the archetype catalog.
//!
//! # Commands
//!
//! - `classify`: one team from `--scores` and/or repeated `--score dim=value`
//! - `batch <file>`: every valid row of a delimited table
//! - `catalog`: list archetypes and their reference profiles
//! - `dimensions`: list dimensions with their direction hints
//!
//! Results go to stdout, logs and errors to stderr. Exit code 1 means the
//! submission was rejected, 2 means the config could not be loaded.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use archetype_classifier::ClassifierEngine;
use archetype_core::ArchetypeConfig;
use clap::{Parser, Subcommand};

mod commands;
mod error;
mod render;

use commands::OutputFormat;
use error::{exit_code_for_error, CliExitCode};

/// Team archetype classifier
#[derive(Parser)]
#[command(name = "archetypes")]
#[command(version)]
#[command(about = "Match team performance profiles to the nearest archetype")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single team from scores on the command line
    Classify(commands::classify::ClassifyArgs),
    /// Classify every team in a delimited text file
    Batch(commands::batch::BatchArgs),
    /// List the archetype catalog
    Catalog,
    /// List the scored dimensions
    Dimensions,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref(), cli.verbose) {
        Ok(config) => config,
        Err(err) => return report(&err),
    };
    if let Err(err) = archetype_observability::init_tracing(&config.observability) {
        return report(&anyhow::Error::from(err));
    }

    match run(&cli, &config) {
        Ok(output) => {
            print!("{output}");
            CliExitCode::Success.into()
        }
        Err(err) => report(&err),
    }
}

fn load_config(path: Option<&std::path::Path>, verbose: u8) -> anyhow::Result<ArchetypeConfig> {
    let mut config = match path {
        Some(path) => ArchetypeConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ArchetypeConfig::default(),
    };

    match verbose {
        0 => {}
        1 => config.observability.log_level = "debug".into(),
        _ => config.observability.log_level = "trace".into(),
    }
    archetype_observability::parse_log_filter(&config.observability.log_level)?;
    Ok(config)
}

fn run(cli: &Cli, config: &ArchetypeConfig) -> anyhow::Result<String> {
    let engine = ClassifierEngine::new(config.classifier.clone());

    match &cli.command {
        Commands::Classify(args) => {
            commands::classify::handle_classify(args, config, &engine, cli.format)
        }
        Commands::Batch(args) => commands::batch::handle_batch(args, config, &engine, cli.format),
        Commands::Catalog => Ok(commands::catalog::handle_catalog(&engine)),
        Commands::Dimensions => Ok(commands::catalog::handle_dimensions()),
    }
}

fn report(err: &anyhow::Error) -> ExitCode {
    tracing::error!(error = %format!("{err:#}"), "command failed");
    eprintln!("error: {err:#}");
    exit_code_for_error(err).into()
}
