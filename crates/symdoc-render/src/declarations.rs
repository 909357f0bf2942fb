//! Per-trait declaration entries.
//!
//! One entry is produced for each platform-set ↦ declaration pair of a trait,
//! in input order. Groups are never merged or split.

use crate::context::RenderContext;
use crate::overloads::render_other_declarations;
use crate::render::DeclarationRenderSection;
use crate::sink::ReferenceSink;
use crate::tokens::render_declaration_tokens;
use symdoc_model::{PlatformName, Symbol, VariantTrait};

/// Display-order predicate for platform names.
///
/// Named platforms compare by raw value. When either side is unspecified the
/// result is whether the left side is the unspecified one, so two
/// unspecified platforms each precede the other. Callers must not rely on a
/// particular order among several unspecified entries.
pub fn platform_precedes(lhs: Option<&PlatformName>, rhs: Option<&PlatformName>) -> bool {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs.raw_value() < rhs.raw_value(),
        _ => lhs.is_none(),
    }
}

/// Sort a platform set for display with `platform_precedes`.
///
/// The predicate is not a strict weak order, so this is a plain insertion
/// sort driven by it rather than `sort_by`, which may panic on an
/// inconsistent comparator. Platform sets are a handful of entries.
pub fn sorted_platform_names(platforms: &[Option<PlatformName>]) -> Vec<Option<PlatformName>> {
    let mut sorted = platforms.to_vec();
    for i in 1..sorted.len() {
        let mut j = i;
        while j > 0 && platform_precedes(sorted[j].as_ref(), sorted[j - 1].as_ref()) {
            sorted.swap(j, j - 1);
            j -= 1;
        }
    }
    sorted
}

/// The language id an entry is declared in: the trait's interface language,
/// else the symbol's source language.
pub fn resolve_language(variant: &VariantTrait, symbol: &Symbol) -> String {
    variant
        .interface_language
        .clone()
        .unwrap_or_else(|| symbol.source_language.id.clone())
}

/// Build the declaration entries of `symbol` for one trait.
///
/// Returns no entries when the trait has no platform-set pairs. The overload
/// block is rendered once and attached to every entry of the trait.
pub fn build_declaration_set(
    symbol: &Symbol,
    variant: &VariantTrait,
    context: RenderContext<'_>,
    sink: &mut dyn ReferenceSink,
) -> Vec<DeclarationRenderSection> {
    let pairs = symbol.declarations(variant);
    if pairs.is_empty() {
        return Vec::new();
    }

    let language = resolve_language(variant, symbol);
    let rendered: Vec<_> = pairs
        .iter()
        .map(|pair| {
            (
                sorted_platform_names(&pair.platforms),
                render_declaration_tokens(&pair.declaration.fragments, context.symbols, sink),
            )
        })
        .collect();

    let other_declarations =
        render_other_declarations(symbol.overloads(variant), variant, context, sink);

    rendered
        .into_iter()
        .map(|(platforms, tokens)| DeclarationRenderSection {
            languages: vec![language.clone()],
            platforms,
            tokens,
            other_declarations: other_declarations.clone(),
        })
        .collect()
}
