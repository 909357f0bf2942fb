//! Read-only lookup capabilities consumed by renderers.

use crate::error::StoreError;
use crate::node::DocumentationNode;
use crate::reference::Reference;

/// Maps compiler-assigned precise identifiers to resolved references.
pub trait SymbolIndex {
    fn resolve_precise_identifier(&self, precise_identifier: &str) -> Option<Reference>;
}

/// Resolves references to the entities they name.
pub trait EntityStore {
    fn entity(&self, reference: &Reference) -> Result<&DocumentationNode, StoreError>;
}
