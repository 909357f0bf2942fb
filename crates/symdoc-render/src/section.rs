//! Declarations section assembly for one entity.

use crate::context::RenderContext;
use crate::declarations::build_declaration_set;
use crate::render::DeclarationsRenderSection;
use crate::sink::ReferenceSink;
use symdoc_model::{Reference, Symbol, VariantTrait};
use tracing::{debug, debug_span};

/// The declarations section rendered for one trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitSection {
    pub variant: VariantTrait,
    pub section: DeclarationsRenderSection,
}

/// Translates a symbol's declaration variants into its declarations section.
pub struct DeclarationsSectionTranslator<'a> {
    context: RenderContext<'a>,
}

impl<'a> DeclarationsSectionTranslator<'a> {
    pub fn new(context: RenderContext<'a>) -> Self {
        Self { context }
    }

    /// One section per trait that has declarations, in trait order.
    pub fn translate_variants(
        &self,
        symbol: &Symbol,
        sink: &mut dyn ReferenceSink,
    ) -> Vec<TraitSection> {
        symbol
            .declaration_variants
            .keys()
            .filter_map(|variant| {
                let declarations = build_declaration_set(symbol, variant, self.context, sink);
                if declarations.is_empty() {
                    return None;
                }
                Some(TraitSection {
                    variant: variant.clone(),
                    section: DeclarationsRenderSection { declarations },
                })
            })
            .collect()
    }

    /// The symbol's declarations section, traits kept in contiguous groups.
    ///
    /// Returns `None` when no trait has declarations.
    pub fn translate_section(
        &self,
        symbol: &Symbol,
        sink: &mut dyn ReferenceSink,
    ) -> Option<DeclarationsRenderSection> {
        let _span = debug_span!("declarations", symbol = %symbol.reference).entered();

        let variants = self.translate_variants(symbol, sink);
        if variants.is_empty() {
            debug!("symbol has no declarations");
            return None;
        }

        Some(DeclarationsRenderSection {
            declarations: variants
                .into_iter()
                .flat_map(|variant| variant.section.declarations)
                .collect(),
        })
    }

    /// Translate many symbols into one sink, omitting symbols without a
    /// section.
    pub fn translate_sections<'s>(
        &self,
        symbols: impl IntoIterator<Item = &'s Symbol>,
        sink: &mut dyn ReferenceSink,
    ) -> Vec<(Reference, DeclarationsRenderSection)> {
        symbols
            .into_iter()
            .filter_map(|symbol| {
                self.translate_section(symbol, sink)
                    .map(|section| (symbol.reference.clone(), section))
            })
            .collect()
    }
}
