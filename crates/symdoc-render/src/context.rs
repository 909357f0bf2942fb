//! Read-only collaborators threaded through a translation pass.

use crate::config::TranslatorConfig;
use symdoc_model::{EntityStore, SymbolIndex};

/// Lookups and settings shared by every component of one translation pass.
///
/// Nothing here is mutated; the only mutable state is the caller's
/// reference sink, passed separately.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub symbols: &'a dyn SymbolIndex,
    pub entities: &'a dyn EntityStore,
    pub config: &'a TranslatorConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        symbols: &'a dyn SymbolIndex,
        entities: &'a dyn EntityStore,
        config: &'a TranslatorConfig,
    ) -> Self {
        Self {
            symbols,
            entities,
            config,
        }
    }
}
