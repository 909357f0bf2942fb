//! # Symdoc Render
//!
//! Translates a documented symbol's declaration variants into the
//! declarations section of its render node: linked tokens per platform set,
//! grouped by trait, with the consolidated declarations of its overloads.
//!
//! ## Architecture
//!
//! ```text
//! DeclarationsSectionTranslator  ← One section per symbol, traits grouped
//!     │
//! build_declaration_set          ← Entries per platform set, sorted names
//!     │                 ╲
//!     │          render_other_declarations  ← Overload siblings, once per trait
//!     │                 ╱
//! render_declaration_tokens      ← Fragment → token, links reported to sink
//! ```
//!
//! Lookups are read-only (`RenderContext`); the only mutable state is the
//! caller's `ReferenceSink`. Unresolvable data is skipped, never fatal.

pub mod config;
pub mod context;
pub mod declarations;
pub mod overloads;
pub mod render;
pub mod section;
pub mod sink;
pub mod telemetry;
pub mod tokens;

pub use config::{ConfigError, DiagnosticLevel, TracingConfig, TranslatorConfig};
pub use context::RenderContext;
pub use declarations::{
    build_declaration_set, platform_precedes, resolve_language, sorted_platform_names,
};
pub use overloads::render_other_declarations;
pub use render::{
    DeclarationRenderSection, DeclarationToken, DeclarationsRenderSection, OtherDeclaration,
    OtherDeclarations,
};
pub use section::{DeclarationsSectionTranslator, TraitSection};
pub use sink::{CollectedReferences, ReferenceSink};
pub use telemetry::init_tracing;
pub use tokens::{render_declaration_token, render_declaration_tokens};
