//! Consolidated declarations for an entity's overload siblings.
//!
//! Siblings are rendered in the order the overload group lists them. A
//! sibling that cannot be rendered is dropped from the block; it never fails
//! the block, and it never changes the display index.

use crate::config::DiagnosticLevel;
use crate::context::RenderContext;
use crate::render::{OtherDeclaration, OtherDeclarations};
use crate::sink::ReferenceSink;
use crate::tokens::render_declaration_tokens;
use symdoc_model::{Overloads, Reference, VariantTrait};
use tracing::{debug, warn};

/// Render the overload block for one trait.
///
/// Returns `None` when the entity has no overload group for the trait.
pub fn render_other_declarations(
    overloads: Option<&Overloads>,
    variant: &VariantTrait,
    context: RenderContext<'_>,
    sink: &mut dyn ReferenceSink,
) -> Option<OtherDeclarations> {
    let overloads = overloads?;

    let mut declarations = Vec::with_capacity(overloads.references.len());
    for reference in &overloads.references {
        let node = match context.entities.entity(reference) {
            Ok(node) => node,
            Err(error) => {
                debug!(%reference, %error, "skipping unresolved overload");
                continue;
            }
        };
        let Some(sibling) = node.as_symbol() else {
            debug!(%reference, "skipping overload that is not a symbol");
            continue;
        };
        let Some(declaration) = sibling.first_declaration(variant) else {
            flag_missing_fragments(context.config.missing_overload_fragments, reference, variant);
            continue;
        };

        let tokens = render_declaration_tokens(&declaration.fragments, context.symbols, sink);
        declarations.push(OtherDeclaration {
            identifier: reference.clone(),
            tokens,
        });
    }

    Some(OtherDeclarations {
        declarations,
        display_index: overloads.display_index,
    })
}

/// An overload group member must carry a declaration for every trait its
/// group is rendered in.
fn flag_missing_fragments(level: DiagnosticLevel, reference: &Reference, variant: &VariantTrait) {
    match level {
        DiagnosticLevel::Ignore => {}
        DiagnosticLevel::Warn => {
            warn!(%reference, %variant, "overloaded symbol has no declaration fragments");
        }
        DiagnosticLevel::Assert => {
            warn!(%reference, %variant, "overloaded symbol has no declaration fragments");
            if cfg!(debug_assertions) {
                panic!("overloaded symbol {reference} has no declaration fragments for {variant}");
            }
        }
    }
}
