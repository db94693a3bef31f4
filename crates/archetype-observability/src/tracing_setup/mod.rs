//! Tracing setup — structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use archetype_core::config::ObservabilityConfig;
use archetype_core::errors::ConfigError;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "ARCHETYPE_LOG";

/// Parse a configured log filter.
///
/// Accepts a bare level (`"info"`) or `EnvFilter` directives
/// (`"archetype=debug,warn"`). A bare word must be a level name: `EnvFilter`
/// would read `"inf"` as a target and silently log nothing useful.
pub fn parse_log_filter(directives: &str) -> Result<EnvFilter, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        field: "observability.log_level".into(),
        reason,
    };

    if directives.trim().is_empty() {
        return Err(invalid("must not be empty".into()));
    }
    for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        if !directive.contains(['=', '[']) && directive.parse::<LevelFilter>().is_err() {
            return Err(invalid(format!("unknown log level '{directive}'")));
        }
    }
    EnvFilter::try_new(directives).map_err(|e| invalid(format!("'{directives}': {e}")))
}

/// Initialize the global tracing subscriber.
///
/// `ARCHETYPE_LOG` wins over `config.log_level` when set and valid. Logs go
/// to stderr so stdout stays clean for results. Returns `Ok(false)` if a
/// global subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<bool, ConfigError> {
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => parse_log_filter(&config.log_level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if config.json_logs {
        builder
            .json()
            .with_file(true)
            .with_line_number(true)
            .try_init()
            .is_ok()
    } else {
        builder.compact().try_init().is_ok()
    };
    Ok(installed)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
