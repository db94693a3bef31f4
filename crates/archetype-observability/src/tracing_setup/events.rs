//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed classification.
pub fn team_classified(team: &str, archetype: &str, distance: f64, confidence: u8) {
    tracing::debug!(
        event = "team_classified",
        team = %team,
        archetype = %archetype,
        distance = distance,
        confidence = confidence,
        "team classified"
    );
}

/// Log a degenerate catalog where every distance is zero.
pub fn degenerate_distances(archetype_count: usize) {
    tracing::warn!(
        event = "degenerate_distances",
        archetype_count = archetype_count,
        "all archetype distances are zero; confidence pinned to 100"
    );
}

/// Log batch completion.
pub fn batch_completed(record_count: usize) {
    tracing::info!(
        event = "batch_completed",
        record_count = record_count,
        "batch classification completed"
    );
}

/// Log a tabular row that was dropped.
pub fn row_skipped(line: usize, reason: &str) {
    tracing::debug!(
        event = "row_skipped",
        line = line,
        reason = %reason,
        "tabular row skipped"
    );
}

/// Log the outcome of parsing tabular input.
pub fn intake_completed(accepted: usize, skipped: usize) {
    tracing::info!(
        event = "intake_completed",
        accepted = accepted,
        skipped = skipped,
        "tabular intake completed"
    );
}

/// Log a header column bound to a dimension.
pub fn column_bound(dimension: &str, column: usize, header: &str) {
    tracing::trace!(
        event = "column_bound",
        dimension = %dimension,
        column = column,
        header = %header,
        "header column bound"
    );
}
