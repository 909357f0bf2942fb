//! Declaration fragment → token resolution.

use crate::render::DeclarationToken;
use crate::sink::ReferenceSink;
use symdoc_model::{Fragment, SymbolIndex};
use tracing::trace;

/// Translate fragments into tokens, one token per fragment, in order.
pub fn render_declaration_tokens(
    fragments: &[Fragment],
    symbols: &dyn SymbolIndex,
    sink: &mut dyn ReferenceSink,
) -> Vec<DeclarationToken> {
    fragments
        .iter()
        .map(|fragment| render_declaration_token(fragment, symbols, sink))
        .collect()
}

/// Translate one fragment, linking it when its precise identifier resolves.
///
/// Each resolved link is reported to `sink`. An unresolved identifier keeps
/// the token's text and drops the link.
pub fn render_declaration_token(
    fragment: &Fragment,
    symbols: &dyn SymbolIndex,
    sink: &mut dyn ReferenceSink,
) -> DeclarationToken {
    let identifier = fragment
        .precise_identifier
        .as_deref()
        .and_then(|precise_identifier| {
            let resolved = symbols.resolve_precise_identifier(precise_identifier);
            if resolved.is_none() {
                trace!(precise_identifier, "unresolved declaration fragment");
            }
            resolved
        });

    if let Some(reference) = &identifier {
        sink.report(reference.clone());
    }

    DeclarationToken {
        kind: fragment.kind,
        text: fragment.spelling.clone(),
        identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symdoc_model::{FragmentKind, MemoryStore, Reference};

    fn index() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.register_precise_identifier("s:3Kit3BarV", Reference::new("doc://Kit/Bar"));
        store
    }

    #[test]
    fn resolved_fragment_links_and_reports() {
        let store = index();
        let mut sink: Vec<Reference> = Vec::new();

        let fragment = Fragment::type_identifier("Bar", "s:3Kit3BarV");

        let token = render_declaration_token(&fragment, &store, &mut sink);

        assert_eq!(token.kind, FragmentKind::TypeIdentifier);
        assert_eq!(token.text, "Bar");
        assert_eq!(token.identifier, Some(Reference::new("doc://Kit/Bar")));
        assert_eq!(sink, vec![Reference::new("doc://Kit/Bar")]);
    }

    #[test]
    fn unresolved_fragment_keeps_text() {
        let store = index();
        let mut sink: Vec<Reference> = Vec::new();

        let fragment = Fragment::type_identifier("Qux", "s:unknown");

        let token = render_declaration_token(&fragment, &store, &mut sink);

        assert_eq!(token.text, "Qux");
        assert!(token.identifier.is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn every_occurrence_is_reported() {
        let store = index();
        let mut sink: Vec<Reference> = Vec::new();
        let fragments = vec![
            Fragment::keyword("func"),
            Fragment::text(" swap("),
            Fragment::type_identifier("Bar", "s:3Kit3BarV"),
            Fragment::text(", "),
            Fragment::type_identifier("Bar", "s:3Kit3BarV"),
            Fragment::text(")"),
        ];

        let tokens = render_declaration_tokens(&fragments, &store, &mut sink);

        assert_eq!(tokens.len(), fragments.len());
        for (token, fragment) in tokens.iter().zip(&fragments) {
            assert_eq!(token.text, fragment.spelling);
        }
        assert_eq!(sink.len(), 2);
    }
}
