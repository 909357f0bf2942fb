//! Source languages and the variant trait axis.
//!
//! One documented entity may be projected into several source languages
//! (a Swift symbol exposed to Objective-C, for example). Each projection is a
//! *trait*: data that differs per language is stored keyed by `VariantTrait`.

use serde::{Deserialize, Serialize};

/// A programming language an entity is declared in or projected into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLanguage {
    /// Stable identifier written into rendered output (`"swift"`, `"occ"`).
    pub id: String,
    /// Human readable name.
    pub name: String,
}

impl SourceLanguage {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn swift() -> Self {
        Self::new("swift", "Swift")
    }

    pub fn objective_c() -> Self {
        Self::new("occ", "Objective-C")
    }

    /// Look up a well-known language by identifier, falling back to a
    /// language named after its identifier.
    pub fn from_id(id: &str) -> Self {
        match id {
            "swift" => Self::swift(),
            "occ" | "objc" | "objective-c" => Self::objective_c(),
            other => Self::new(other, other),
        }
    }
}

impl Default for SourceLanguage {
    fn default() -> Self {
        Self::swift()
    }
}

/// A variant axis distinguishing views of the same documented entity.
///
/// The fallback trait carries no interface language; renderers substitute the
/// entity's own source language for it. Ordering puts the fallback trait
/// first, then interface languages by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct VariantTrait {
    pub interface_language: Option<String>,
}

impl VariantTrait {
    /// The trait with no interface language.
    pub fn fallback() -> Self {
        Self {
            interface_language: None,
        }
    }

    /// The trait for one interface language.
    pub fn language(id: impl Into<String>) -> Self {
        Self {
            interface_language: Some(id.into()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.interface_language.is_none()
    }
}

// Serialized as the bare language id so traits can key JSON objects; the
// fallback trait is the empty string.
impl From<String> for VariantTrait {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Self::fallback()
        } else {
            Self::language(value)
        }
    }
}

impl From<VariantTrait> for String {
    fn from(value: VariantTrait) -> Self {
        value.interface_language.unwrap_or_default()
    }
}

impl std::fmt::Display for VariantTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.interface_language {
            Some(id) => write!(f, "{id}"),
            None => write!(f, "<fallback>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn fallback_trait_orders_first() {
        let mut traits = vec![
            VariantTrait::language("swift"),
            VariantTrait::fallback(),
            VariantTrait::language("occ"),
        ];
        traits.sort();
        assert_eq!(
            traits,
            vec![
                VariantTrait::fallback(),
                VariantTrait::language("occ"),
                VariantTrait::language("swift"),
            ]
        );
    }

    #[test]
    fn trait_keys_json_objects() {
        let mut map = BTreeMap::new();
        map.insert(VariantTrait::fallback(), 1);
        map.insert(VariantTrait::language("occ"), 2);

        let json = serde_json::to_string(&map).expect("serialize");
        assert_eq!(json, r#"{"":1,"occ":2}"#);

        let back: BTreeMap<VariantTrait, i32> = serde_json::from_str(&json).expect("parse");
        assert_eq!(back, map);
    }

    #[test]
    fn known_language_ids() {
        assert_eq!(SourceLanguage::from_id("objc"), SourceLanguage::objective_c());
        assert_eq!(SourceLanguage::from_id("data").name, "data");
    }
}
