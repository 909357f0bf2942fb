//! Caller-owned accumulation of references discovered while rendering.
//!
//! The renderer only appends. Deduplication and merging across entities are
//! the caller's business; `CollectedReferences` provides both for pipelines
//! that give each concurrent task a private collector.

use std::collections::BTreeSet;
use symdoc_model::Reference;

/// Append-only target for resolved references.
pub trait ReferenceSink {
    fn report(&mut self, reference: Reference);
}

impl ReferenceSink for Vec<Reference> {
    fn report(&mut self, reference: Reference) {
        self.push(reference);
    }
}

/// Ordered record of every reported reference, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedReferences {
    references: Vec<Reference>,
}

impl CollectedReferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// All reports in arrival order.
    pub fn as_slice(&self) -> &[Reference] {
        &self.references
    }

    pub fn into_vec(self) -> Vec<Reference> {
        self.references
    }

    /// Append another collector's reports after this one's.
    pub fn merge(&mut self, other: Self) {
        self.references.extend(other.references);
    }

    /// References in first-seen order with repeats removed.
    pub fn unique(&self) -> Vec<Reference> {
        let mut seen = BTreeSet::new();
        self.references
            .iter()
            .filter(|reference| seen.insert(*reference))
            .cloned()
            .collect()
    }
}

impl ReferenceSink for CollectedReferences {
    fn report(&mut self, reference: Reference) {
        self.references.push(reference);
    }
}
