mod batch_entry;
mod classification;
mod justification;

pub use batch_entry::BatchEntry;
pub use classification::{ArchetypeDistance, ClassificationResult};
pub use justification::{Justification, StrongDifference};
