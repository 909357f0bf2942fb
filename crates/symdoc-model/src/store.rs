//! Canonical in-memory entity store.
//!
//! This is the lookup boundary renderers are tested against:
//! - hydrate nodes from already-built values or a JSON array
//! - index symbols by precise identifier
//! - answer deterministic, read-only queries

use crate::error::StoreError;
use crate::node::DocumentationNode;
use crate::reference::Reference;
use crate::resolve::{EntityStore, SymbolIndex};
use crate::symbol::Symbol;
use std::collections::BTreeMap;

/// Deterministic in-memory state for documented entities.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    nodes: BTreeMap<Reference, DocumentationNode>,
    precise_identifiers: BTreeMap<String, Reference>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from fully-materialized nodes.
    ///
    /// Duplicate references are resolved with deterministic last-write-wins
    /// semantics.
    pub fn from_nodes(nodes: impl IntoIterator<Item = DocumentationNode>) -> Self {
        let mut store = Self::new();
        for node in nodes {
            store.insert(node);
        }
        store
    }

    /// Hydrate a store from a JSON array of nodes.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let nodes: Vec<DocumentationNode> = serde_json::from_str(json)?;
        Ok(Self::from_nodes(nodes))
    }

    /// Insert or replace a node by reference.
    ///
    /// Symbols carrying a precise identifier are indexed under it. Returns the
    /// previous node if present.
    pub fn insert(&mut self, node: impl Into<DocumentationNode>) -> Option<DocumentationNode> {
        let node = node.into();
        if let DocumentationNode::Symbol(symbol) = &node
            && let Some(precise_identifier) = &symbol.precise_identifier
        {
            self.precise_identifiers
                .insert(precise_identifier.clone(), symbol.reference.clone());
        }
        self.nodes.insert(node.reference().clone(), node)
    }

    /// Index a precise identifier that has no node of its own in this store,
    /// such as a symbol from another module.
    pub fn register_precise_identifier(
        &mut self,
        precise_identifier: impl Into<String>,
        reference: Reference,
    ) {
        self.precise_identifiers
            .insert(precise_identifier.into(), reference);
    }

    /// Total number of nodes in memory.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store has zero nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lookup one node by reference.
    pub fn node(&self, reference: &Reference) -> Option<&DocumentationNode> {
        self.nodes.get(reference)
    }

    /// Lookup one symbol by reference.
    pub fn symbol(&self, reference: &Reference) -> Option<&Symbol> {
        self.node(reference).and_then(DocumentationNode::as_symbol)
    }

    /// Iterate all symbols in deterministic reference order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.nodes.values().filter_map(DocumentationNode::as_symbol)
    }
}

impl SymbolIndex for MemoryStore {
    fn resolve_precise_identifier(&self, precise_identifier: &str) -> Option<Reference> {
        self.precise_identifiers.get(precise_identifier).cloned()
    }
}

impl EntityStore for MemoryStore {
    fn entity(&self, reference: &Reference) -> Result<&DocumentationNode, StoreError> {
        self.node(reference)
            .ok_or_else(|| StoreError::NotFound(reference.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::SourceLanguage;
    use crate::node::Article;

    fn symbol(path: &str, precise_identifier: &str) -> Symbol {
        Symbol::new(path, SourceLanguage::swift()).with_precise_identifier(precise_identifier)
    }

    #[test]
    fn inserted_symbols_are_indexed_by_precise_identifier() {
        let store = MemoryStore::from_nodes([
            symbol("doc://Kit/Bar", "s:3Kit3BarV").into(),
            DocumentationNode::from(Article {
                reference: Reference::new("doc://Kit/Guide"),
                title: "Guide".to_string(),
            }),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.resolve_precise_identifier("s:3Kit3BarV"),
            Some(Reference::new("doc://Kit/Bar"))
        );
        assert!(store.resolve_precise_identifier("s:missing").is_none());
        assert_eq!(store.symbols().count(), 1);
    }

    #[test]
    fn missing_reference_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .entity(&Reference::new("doc://Kit/Nope"))
            .expect_err("empty store must not resolve");
        assert!(matches!(err, StoreError::NotFound(reference) if reference.absolute_string() == "doc://Kit/Nope"));
    }

    #[test]
    fn duplicate_reference_last_write_wins() {
        let mut store = MemoryStore::new();
        store.insert(symbol("doc://Kit/Bar", "s:old"));
        let previous = store.insert(symbol("doc://Kit/Bar", "s:new").with_title("Bar"));

        assert!(previous.is_some());
        assert_eq!(store.len(), 1);
        let bar = store.symbol(&Reference::new("doc://Kit/Bar")).expect("bar");
        assert_eq!(bar.title, "Bar");
    }

    #[test]
    fn external_identifiers_resolve_without_nodes() {
        let mut store = MemoryStore::new();
        store.register_precise_identifier("s:Si", Reference::new("doc://Swift/Int"));
        assert_eq!(
            store.resolve_precise_identifier("s:Si"),
            Some(Reference::new("doc://Swift/Int"))
        );
        assert!(store.entity(&Reference::new("doc://Swift/Int")).is_err());
    }

    #[test]
    fn hydrates_from_json() {
        let raw = r#"[
            { "kind": "symbol", "reference": "doc://Kit/Bar", "preciseIdentifier": "s:3Kit3BarV" },
            { "kind": "article", "reference": "doc://Kit/Guide" }
        ]"#;
        let store = MemoryStore::from_json_str(raw).expect("must hydrate");
        assert_eq!(store.len(), 2);
        assert!(store.symbol(&Reference::new("doc://Kit/Bar")).is_some());

        assert!(matches!(
            MemoryStore::from_json_str("{"),
            Err(StoreError::Parse(_))
        ));
    }
}
