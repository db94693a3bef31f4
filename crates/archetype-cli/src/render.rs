//! Text and JSON rendering of batch results.
//!
//! Text output puts the matched archetype's profile and the team's profile
//! side by side on the same 0–4 bar scale so they can be compared directly.

use std::fmt::Write;

use archetype_core::constants::SCORE_MAX;
use archetype_core::{Archetype, ArchetypeResult, BatchEntry, Dimension, ScoreVector};

/// Bar cells per score point.
const CELLS_PER_POINT: usize = 3;
const BAR_WIDTH: usize = SCORE_MAX as usize * CELLS_PER_POINT;
const LABEL_WIDTH: usize = 32;

/// All entries as text, separated by a rule.
pub fn render_text(entries: &[BatchEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(&"─".repeat(LABEL_WIDTH + 2 * (BAR_WIDTH + 6)));
            out.push_str("\n\n");
        }
        render_entry(&mut out, entry);
    }
    out
}

/// All entries as pretty JSON.
pub fn render_json(entries: &[BatchEntry]) -> ArchetypeResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

fn render_entry(out: &mut String, entry: &BatchEntry) {
    let _ = writeln!(out, "{}: {}", entry.team.name, entry.result.archetype);
    let _ = writeln!(out, "Confidence: {}%", entry.result.confidence);
    let _ = writeln!(out, "{}", entry.justification.text);
    out.push('\n');
    out.push_str(&comparison(
        "Matched Archetype",
        &entry.archetype_profile,
        &entry.team.name,
        &entry.team.scores,
    ));
    out.push('\n');
}

/// Two profiles as labelled bars, one row per dimension.
pub fn comparison(left_title: &str, left: &ScoreVector, right_title: &str, right: &ScoreVector) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<label$}  {:<bar$}  {:<bar$}",
        "",
        truncate(left_title, BAR_WIDTH + 4),
        truncate(right_title, BAR_WIDTH + 4),
        label = LABEL_WIDTH,
        bar = BAR_WIDTH + 4,
    );
    for dimension in Dimension::ALL {
        let _ = writeln!(
            out,
            "{:<label$}  {} {:.1}  {} {:.1}",
            dimension.name(),
            bar(left.get(dimension)),
            left.get(dimension),
            bar(right.get(dimension)),
            right.get(dimension),
            label = LABEL_WIDTH,
        );
    }
    out
}

/// The catalog, one archetype per block.
pub fn render_catalog(catalog: &[Archetype]) -> String {
    let mut out = String::new();
    for archetype in catalog {
        let _ = writeln!(out, "{}", archetype.name);
        for (dimension, score) in archetype.profile.iter() {
            let _ = writeln!(
                out,
                "  {:<label$}{} {:.1}",
                dimension.name(),
                bar(score),
                score,
                label = LABEL_WIDTH,
            );
        }
        out.push('\n');
    }
    out
}

/// Dimension labels with their direction hints.
pub fn render_dimensions() -> String {
    Dimension::ALL
        .into_iter()
        .map(|d| format!("{:<30} {}\n", d.key(), d.label()))
        .collect()
}

fn bar(score: f64) -> String {
    let filled = ((score * CELLS_PER_POINT as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "·".repeat(BAR_WIDTH - filled))
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}
