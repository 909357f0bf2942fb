//! Encodable output of the declarations section.
//!
//! Field names and optionality are the downstream serialization contract:
//! absent identifiers and absent overload blocks are omitted, never `null`.

use serde::{Deserialize, Serialize};
use symdoc_model::{FragmentKind, PlatformName, Reference};

/// A declaration token, optionally linked to the entity it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationToken {
    pub kind: FragmentKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Reference>,
}

/// One overload sibling's rendered declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherDeclaration {
    pub identifier: Reference,
    pub tokens: Vec<DeclarationToken>,
}

/// Consolidated declarations of an entity's overload group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherDeclarations {
    pub declarations: Vec<OtherDeclaration>,
    /// The rendered entity's position in its overload group, copied verbatim.
    pub display_index: usize,
}

/// One declaration entry: a language, a platform set, and its tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRenderSection {
    pub languages: Vec<String>,
    /// Platform names in display order; `null` for an unspecified platform.
    pub platforms: Vec<Option<PlatformName>>,
    pub tokens: Vec<DeclarationToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_declarations: Option<OtherDeclarations>,
}

/// The declarations section of one rendered entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationsRenderSection {
    pub declarations: Vec<DeclarationRenderSection>,
}

impl DeclarationsRenderSection {
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_optionals_are_omitted() {
        let section = DeclarationsRenderSection {
            declarations: vec![DeclarationRenderSection {
                languages: vec!["swift".to_string()],
                platforms: vec![None, Some(PlatformName::ios())],
                tokens: vec![DeclarationToken {
                    kind: FragmentKind::Keyword,
                    text: "func".to_string(),
                    identifier: None,
                }],
                other_declarations: None,
            }],
        };

        let value = serde_json::to_value(&section).expect("serialize");
        assert_eq!(
            value,
            json!({
                "declarations": [{
                    "languages": ["swift"],
                    "platforms": [null, "iOS"],
                    "tokens": [{ "kind": "keyword", "text": "func" }]
                }]
            })
        );
    }

    #[test]
    fn other_declarations_use_camel_case() {
        let block = OtherDeclarations {
            declarations: vec![OtherDeclaration {
                identifier: Reference::new("doc://Kit/foo-1"),
                tokens: Vec::new(),
            }],
            display_index: 2,
        };

        let value = serde_json::to_value(&block).expect("serialize");
        assert_eq!(
            value,
            json!({
                "declarations": [{ "identifier": "doc://Kit/foo-1", "tokens": [] }],
                "displayIndex": 2
            })
        );
    }
}
