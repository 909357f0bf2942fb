//! Entity kinds stored in a documentation context.

use crate::reference::Reference;
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// A non-symbol page. Carries no declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub reference: Reference,
    #[serde(default)]
    pub title: String,
}

/// The semantic content resolved for a reference.
///
/// Renderers dispatch on the variant instead of downcasting; a node that is
/// not the kind a caller needs is treated the same as a missing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DocumentationNode {
    Symbol(Symbol),
    Article(Article),
}

impl DocumentationNode {
    pub fn reference(&self) -> &Reference {
        match self {
            Self::Symbol(symbol) => &symbol.reference,
            Self::Article(article) => &article.reference,
        }
    }

    /// The symbol, when this node is declaration-bearing.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            Self::Article(_) => None,
        }
    }
}

impl From<Symbol> for DocumentationNode {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<Article> for DocumentationNode {
    fn from(article: Article) -> Self {
        Self::Article(article)
    }
}
