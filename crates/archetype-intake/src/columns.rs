//! Header-to-dimension binding for tabular input.
//!
//! Each dimension lists the header phrases it accepts. A header cell binds
//! when its normalised text contains one of those phrases. Column 0 holds
//! the team name and never binds; each column binds to at most one dimension.

use archetype_core::errors::IntakeError;
use archetype_core::Dimension;
use archetype_observability::events;

/// Accepted header phrases per dimension, lowercase and single-spaced.
pub static DIMENSION_ALIASES: [(Dimension, &[&str]); 8] = [
    (
        Dimension::TeamPerformance,
        &["team performance", "team perf"],
    ),
    (
        Dimension::ProductPerformance,
        &["product performance", "product perf", "product"],
    ),
    (
        Dimension::SoftwareDeliveryThroughput,
        &["software delivery throughput", "delivery throughput", "throughput"],
    ),
    (
        Dimension::SoftwareDeliveryInstability,
        &["software delivery instability", "delivery instability", "instability"],
    ),
    (
        Dimension::IndividualEffectiveness,
        &["individual effectiveness", "individual eff", "individual"],
    ),
    (Dimension::ValuableWork, &["valuable work", "valuable"]),
    (Dimension::Friction, &["friction"]),
    (Dimension::Burnout, &["burnout"]),
];

/// Column index holding each dimension's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBinding {
    columns: [usize; Dimension::COUNT],
}

impl ColumnBinding {
    /// Bind every dimension to a header column.
    ///
    /// Fails with [`IntakeError::UnresolvedColumns`] naming every dimension
    /// that no header matched.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, IntakeError> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize(h.as_ref())).collect();
        let mut taken = vec![false; normalized.len()];
        let mut columns = [None; Dimension::COUNT];

        for (dimension, aliases) in &DIMENSION_ALIASES {
            let found = normalized
                .iter()
                .enumerate()
                .skip(1)
                .find(|(i, header)| !taken[*i] && aliases.iter().any(|a| header.contains(a)));

            if let Some((i, header)) = found {
                taken[i] = true;
                columns[dimension.index()] = Some(i);
                events::column_bound(dimension.name(), i, header);
            }
        }

        let unresolved: Vec<String> = Dimension::ALL
            .into_iter()
            .filter(|d| columns[d.index()].is_none())
            .map(|d| d.name().to_string())
            .collect();
        if !unresolved.is_empty() {
            return Err(IntakeError::UnresolvedColumns {
                dimensions: unresolved,
            });
        }

        Ok(Self {
            columns: columns.map(|c| c.unwrap_or_default()),
        })
    }

    /// Column holding `dimension`.
    pub fn column(&self, dimension: Dimension) -> usize {
        self.columns[dimension.index()]
    }
}

/// Lowercase, treat `_`/`-` as spaces, collapse runs of whitespace.
fn normalize(header: &str) -> String {
    header
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
