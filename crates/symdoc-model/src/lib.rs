//! # Symdoc Model
//!
//! The documented-entity model consumed by the declarations renderer.
//!
//! Entities are built upstream (symbol graph ingestion, topic graph
//! construction) and are immutable from the renderer's point of view. This
//! crate only describes their shape and the read-only lookups a renderer may
//! perform against them.
//!
//! ## Architecture
//!
//! ```text
//! VariantTrait            ← Language projection axis of one entity
//!     │
//! PlatformDeclaration     ← Platform set ↦ Declaration (ordered fragments)
//!     │
//! Symbol                  ← Declaration variants + overload groups per trait
//!     │
//! DocumentationNode       ← Tagged union over entity kinds (Symbol | Article)
//!     │
//! SymbolIndex/EntityStore ← Read-only lookups (precise id ↦ Reference ↦ node)
//! ```

pub mod declaration;
pub mod error;
pub mod language;
pub mod node;
pub mod platform;
pub mod reference;
pub mod resolve;
pub mod store;
pub mod symbol;

pub use declaration::{Declaration, Fragment, FragmentKind, PlatformDeclaration};
pub use error::StoreError;
pub use language::{SourceLanguage, VariantTrait};
pub use node::{Article, DocumentationNode};
pub use platform::PlatformName;
pub use reference::Reference;
pub use resolve::{EntityStore, SymbolIndex};
pub use store::MemoryStore;
pub use symbol::{DeclarationVariants, Overloads, Symbol};
