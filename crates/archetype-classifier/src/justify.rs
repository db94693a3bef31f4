//! Justification text: per-dimension alignment with the matched archetype
//! and the next-closest archetypes.

use archetype_core::archetype;
use archetype_core::config::ClassifierConfig;
use archetype_core::errors::ClassificationError;
use archetype_core::models::StrongDifference;
use archetype_core::{Archetype, ArchetypeDistance, Justification, ScoreVector};

/// Explain why `query` matched `matched`.
///
/// `distances` is the full distance list from classification; it drives the
/// runner-up selection. Fails only if `matched` is not in `catalog`.
pub fn justify(
    query: &ScoreVector,
    matched: &str,
    distances: &[ArchetypeDistance],
    catalog: &[Archetype],
    config: &ClassifierConfig,
) -> Result<Justification, ClassificationError> {
    let reference = archetype::find(catalog, matched).ok_or_else(|| {
        ClassificationError::UnknownArchetype {
            name: matched.to_string(),
        }
    })?;

    let mut strong_matches = 0;
    let mut strong_differences = Vec::new();
    for (dimension, team_score) in query.iter() {
        let archetype_score = reference.profile.get(dimension);
        let diff = (team_score - archetype_score).abs();
        if diff < config.strong_match_threshold {
            strong_matches += 1;
        } else if diff > config.strong_difference_threshold {
            strong_differences.push(StrongDifference {
                dimension,
                team_score,
                archetype_score,
            });
        }
    }

    let runner_ups = runner_ups(matched, distances, config.runner_up_count);
    let text = render(
        matched,
        strong_matches,
        &runner_ups,
        config
            .surface_strong_differences
            .then_some(strong_differences.as_slice()),
    );

    Ok(Justification {
        archetype: matched.to_string(),
        strong_matches,
        strong_differences,
        runner_ups,
        text,
    })
}

/// The `count` closest archetypes other than `matched`, nearest first.
fn runner_ups(matched: &str, distances: &[ArchetypeDistance], count: usize) -> Vec<String> {
    let mut others: Vec<&ArchetypeDistance> = distances
        .iter()
        .filter(|d| d.archetype != matched)
        .collect();
    // Stable sort: equal distances stay in catalog order.
    others.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    others
        .into_iter()
        .take(count)
        .map(|d| d.archetype.clone())
        .collect()
}

fn render(
    matched: &str,
    strong_matches: usize,
    runner_ups: &[String],
    differences: Option<&[StrongDifference]>,
) -> String {
    let mut text = format!(
        "{matched} is the best match. \
         Your team's profile aligns well with this archetype profile, \
         with strong alignment on {strong_matches} dimensions."
    );

    if !runner_ups.is_empty() {
        text.push_str(&format!(
            " Other potential matches: {}.",
            runner_ups.join(", ")
        ));
    }

    if let Some(differences) = differences.filter(|d| !d.is_empty()) {
        let listed: Vec<String> = differences.iter().map(ToString::to_string).collect();
        text.push_str(&format!(" Notable differences: {}.", listed.join("; ")));
    }

    text
}
