//! ClassifierEngine — classify, justify, and batch over one catalog.

use std::borrow::Cow;

use archetype_core::archetype;
use archetype_core::config::ClassifierConfig;
use archetype_core::errors::{ArchetypeResult, ClassificationError};
use archetype_core::{
    Archetype, BatchEntry, ClassificationResult, Justification, ScoreVector, TeamRecord, CATALOG,
};
use archetype_observability::{batch_span, classify_span, events};

use crate::{classify, justify};

/// Stateless classification pipeline bound to a catalog and config.
///
/// The default engine borrows the static catalog, so cloning is cheap and
/// instances can be shared across threads.
#[derive(Debug, Clone)]
pub struct ClassifierEngine {
    config: ClassifierConfig,
    catalog: Cow<'static, [Archetype]>,
}

impl Default for ClassifierEngine {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl ClassifierEngine {
    /// Engine over the built-in catalog.
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            catalog: Cow::Borrowed(CATALOG.as_slice()),
        }
    }

    /// Engine over a caller-supplied catalog. Iteration order is the tie-break.
    ///
    /// Results refer to archetypes by name, so names must be unique.
    pub fn with_catalog(
        config: ClassifierConfig,
        catalog: Vec<Archetype>,
    ) -> Result<Self, ClassificationError> {
        if catalog.is_empty() {
            return Err(ClassificationError::EmptyCatalog);
        }
        for (i, archetype) in catalog.iter().enumerate() {
            if catalog[..i].iter().any(|a| a.name == archetype.name) {
                return Err(ClassificationError::DuplicateArchetype {
                    name: archetype.name.to_string(),
                });
            }
        }
        Ok(Self {
            config,
            catalog: Cow::Owned(catalog),
        })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[Archetype] {
        &self.catalog
    }

    /// Reference profile of a catalog archetype.
    pub fn profile(&self, name: &str) -> Option<&ScoreVector> {
        archetype::find(&self.catalog, name).map(|a| &a.profile)
    }

    /// Nearest archetype, confidence, and all distances for one vector.
    pub fn classify(&self, query: &ScoreVector) -> Result<ClassificationResult, ClassificationError> {
        classify::classify(query, &self.catalog)
    }

    /// Justification for an existing classification of `query`.
    pub fn justify(
        &self,
        query: &ScoreVector,
        result: &ClassificationResult,
    ) -> Result<Justification, ClassificationError> {
        justify::justify(
            query,
            &result.archetype,
            &result.distances,
            &self.catalog,
            &self.config,
        )
    }

    /// Classify and justify one team.
    pub fn evaluate(&self, team: &TeamRecord) -> ArchetypeResult<BatchEntry> {
        let span = classify_span!(team.name);
        let _guard = span.enter();

        let result = self.classify(&team.scores)?;
        let justification = self.justify(&team.scores, &result)?;
        let archetype_profile = *self.profile(&result.archetype).ok_or_else(|| {
            ClassificationError::UnknownArchetype {
                name: result.archetype.clone(),
            }
        })?;

        events::team_classified(
            &team.name,
            &result.archetype,
            result.distance,
            result.confidence,
        );

        Ok(BatchEntry {
            team: team.clone(),
            result,
            archetype_profile,
            justification,
        })
    }

    /// Evaluate every record. Output order matches input order; an empty
    /// slice yields an empty vec.
    pub fn run_batch(&self, records: &[TeamRecord]) -> ArchetypeResult<Vec<BatchEntry>> {
        let span = batch_span!(records.len());
        let _guard = span.enter();

        let entries = records
            .iter()
            .map(|record| self.evaluate(record))
            .collect::<ArchetypeResult<Vec<_>>>()?;

        events::batch_completed(entries.len());
        Ok(entries)
    }
}
