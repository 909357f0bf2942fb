//! Error types for entity store lookups.

use crate::reference::Reference;

/// Errors raised while hydrating or querying an entity store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No entity is registered under the reference.
    #[error("entity not found: {0}")]
    NotFound(Reference),

    /// Serialized store content could not be decoded.
    #[error("invalid store json: {0}")]
    Parse(#[from] serde_json::Error),
}
