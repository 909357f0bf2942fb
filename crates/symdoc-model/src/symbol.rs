//! Symbols: documented declarations with per-trait variants.

use crate::declaration::{Declaration, PlatformDeclaration};
use crate::language::{SourceLanguage, VariantTrait};
use crate::platform::PlatformName;
use crate::reference::Reference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-trait platform-set ↦ declaration pairs, in input order.
pub type DeclarationVariants = BTreeMap<VariantTrait, Vec<PlatformDeclaration>>;

/// An overload group as seen from one of its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overloads {
    /// Sibling entities sharing the base name, in display order.
    pub references: Vec<Reference>,
    /// This entity's own position within the overload group.
    pub display_index: usize,
}

impl Overloads {
    pub fn new(references: Vec<Reference>, display_index: usize) -> Self {
        Self {
            references,
            display_index,
        }
    }
}

/// A documented declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub reference: Reference,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precise_identifier: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Canonical source language; stands in for traits without one.
    #[serde(default)]
    pub source_language: SourceLanguage,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub declaration_variants: DeclarationVariants,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overloads_variants: BTreeMap<VariantTrait, Overloads>,
}

impl Symbol {
    pub fn new(reference: impl Into<Reference>, source_language: SourceLanguage) -> Self {
        Self {
            reference: reference.into(),
            precise_identifier: None,
            title: String::new(),
            source_language,
            declaration_variants: BTreeMap::new(),
            overloads_variants: BTreeMap::new(),
        }
    }

    pub fn with_precise_identifier(mut self, precise_identifier: impl Into<String>) -> Self {
        self.precise_identifier = Some(precise_identifier.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append a platform-set ↦ declaration pair for `variant`.
    pub fn with_declaration(
        mut self,
        variant: VariantTrait,
        platforms: Vec<Option<PlatformName>>,
        declaration: Declaration,
    ) -> Self {
        self.declaration_variants
            .entry(variant)
            .or_default()
            .push(PlatformDeclaration::new(platforms, declaration));
        self
    }

    pub fn with_overloads(mut self, variant: VariantTrait, overloads: Overloads) -> Self {
        self.overloads_variants.insert(variant, overloads);
        self
    }

    /// The platform-set pairs for one trait; empty when the trait is absent.
    pub fn declarations(&self, variant: &VariantTrait) -> &[PlatformDeclaration] {
        self.declaration_variants
            .get(variant)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The declaration of the first platform set for one trait.
    pub fn first_declaration(&self, variant: &VariantTrait) -> Option<&Declaration> {
        self.declarations(variant)
            .first()
            .map(|pair| &pair.declaration)
    }

    pub fn overloads(&self, variant: &VariantTrait) -> Option<&Overloads> {
        self.overloads_variants.get(variant)
    }

    /// Whether any trait carries at least one platform-set pair.
    pub fn has_declarations(&self) -> bool {
        self.declaration_variants
            .values()
            .any(|pairs| !pairs.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::Fragment;

    fn foo() -> Symbol {
        Symbol::new("doc://Kit/foo", SourceLanguage::swift()).with_declaration(
            VariantTrait::fallback(),
            vec![Some(PlatformName::macos())],
            Declaration::new(vec![Fragment::keyword("func")]),
        )
    }

    #[test]
    fn declarations_for_missing_trait_are_empty() {
        let symbol = foo();
        assert!(symbol.declarations(&VariantTrait::language("occ")).is_empty());
        assert!(symbol.first_declaration(&VariantTrait::language("occ")).is_none());
        assert_eq!(symbol.declarations(&VariantTrait::fallback()).len(), 1);
    }

    #[test]
    fn empty_trait_mapping_has_no_declarations() {
        let mut symbol = Symbol::new("doc://Kit/bar", SourceLanguage::swift());
        symbol
            .declaration_variants
            .insert(VariantTrait::fallback(), Vec::new());
        assert!(!symbol.has_declarations());
        assert!(foo().has_declarations());
    }
}
