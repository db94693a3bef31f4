//! # archetype-observability
//!
//! Tracing subscriber setup driven by [`ObservabilityConfig`], span macros
//! for each pipeline stage, and structured event helpers.
//!
//! [`ObservabilityConfig`]: archetype_core::config::ObservabilityConfig

pub mod tracing_setup;

pub use tracing_setup::{
    events, init_tracing, init_tracing_with_filter, parse_log_filter, LOG_ENV_VAR,
};

#[doc(hidden)]
pub use tracing;
