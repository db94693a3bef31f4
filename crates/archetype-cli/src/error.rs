//! CLI exit code handling.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input error (bad scores, unreadable or invalid table)
//! - 2: Configuration error

use std::process::ExitCode;

use archetype_core::errors::{ArchetypeError, ConfigError, IntakeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    /// The submission was rejected; the message tells the user why.
    InputError = 1,
    /// The config file could not be loaded.
    ConfigError = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Map an error chain to an exit code by its root typed error.
pub fn exit_code_for_error(err: &anyhow::Error) -> CliExitCode {
    for cause in err.chain() {
        if cause.downcast_ref::<ConfigError>().is_some() {
            return CliExitCode::ConfigError;
        }
        if let Some(ArchetypeError::Config(_)) = cause.downcast_ref::<ArchetypeError>() {
            return CliExitCode::ConfigError;
        }
        if cause.downcast_ref::<IntakeError>().is_some() {
            return CliExitCode::InputError;
        }
    }
    CliExitCode::InputError
}
