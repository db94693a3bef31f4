//! Span definitions per pipeline stage: intake, classification, batch.

/// Create a classification span.
#[macro_export]
macro_rules! classify_span {
    ($team:expr) => {
        $crate::tracing::debug_span!("archetype.classify", team = %$team)
    };
}

/// Create a batch span.
#[macro_export]
macro_rules! batch_span {
    ($record_count:expr) => {
        $crate::tracing::info_span!("archetype.batch", record_count = $record_count)
    };
}

/// Create an intake span.
#[macro_export]
macro_rules! intake_span {
    ($source:expr) => {
        $crate::tracing::info_span!("archetype.intake", source = %$source)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CLASSIFY: &str = "archetype.classify";
    pub const BATCH: &str = "archetype.batch";
    pub const INTAKE: &str = "archetype.intake";
}
