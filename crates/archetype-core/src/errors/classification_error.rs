/// Classifier and justification errors.
///
/// Unreachable with the built-in catalog; they guard caller-supplied catalogs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassificationError {
    #[error("archetype catalog is empty")]
    EmptyCatalog,

    #[error("unknown archetype: {name}")]
    UnknownArchetype { name: String },

    #[error("archetype name appears more than once in catalog: {name}")]
    DuplicateArchetype { name: String },
}
