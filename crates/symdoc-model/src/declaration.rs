//! Declaration fragments: the printed form of a symbol.

use crate::platform::PlatformName;
use serde::{Deserialize, Serialize};

/// Classification of a printed declaration token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentKind {
    Keyword,
    Attribute,
    Number,
    String,
    Identifier,
    TypeIdentifier,
    GenericParameter,
    InternalParam,
    ExternalParam,
    Text,
}

/// One atomic token of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub kind: FragmentKind,
    pub spelling: String,
    /// Precise identifier of the entity this token names, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precise_identifier: Option<String>,
}

impl Fragment {
    pub fn new(kind: FragmentKind, spelling: impl Into<String>) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            precise_identifier: None,
        }
    }

    pub fn keyword(spelling: impl Into<String>) -> Self {
        Self::new(FragmentKind::Keyword, spelling)
    }

    pub fn text(spelling: impl Into<String>) -> Self {
        Self::new(FragmentKind::Text, spelling)
    }

    pub fn identifier(spelling: impl Into<String>) -> Self {
        Self::new(FragmentKind::Identifier, spelling)
    }

    /// A type identifier linked to another declared entity.
    pub fn type_identifier(
        spelling: impl Into<String>,
        precise_identifier: impl Into<String>,
    ) -> Self {
        Self {
            kind: FragmentKind::TypeIdentifier,
            spelling: spelling.into(),
            precise_identifier: Some(precise_identifier.into()),
        }
    }
}

/// The printed form of an entity for one platform set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub fragments: Vec<Fragment>,
}

impl Declaration {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// One platform set and the declaration that applies to it.
///
/// An absent platform (`None`) means the declaration applies to an
/// unspecified platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDeclaration {
    pub platforms: Vec<Option<PlatformName>>,
    pub declaration: Declaration,
}

impl PlatformDeclaration {
    pub fn new(platforms: Vec<Option<PlatformName>>, declaration: Declaration) -> Self {
        Self {
            platforms,
            declaration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_accepts_symbol_graph_shape() {
        let raw = r#"{
            "kind": "typeIdentifier",
            "spelling": "Bar",
            "preciseIdentifier": "s:3Kit3BarV"
        }"#;

        let fragment: Fragment = serde_json::from_str(raw).expect("must parse fragment");
        assert_eq!(fragment, Fragment::type_identifier("Bar", "s:3Kit3BarV"));
    }

    #[test]
    fn fragment_without_identifier_omits_field() {
        let json = serde_json::to_value(Fragment::keyword("func")).expect("serialize");
        assert_eq!(json, serde_json::json!({ "kind": "keyword", "spelling": "func" }));
    }
}
