//! Resolved topic references.

use serde::{Deserialize, Serialize};

/// An absolute, resolvable identifier for a documented entity.
///
/// The string is opaque to the renderer: it is used as a lookup key into the
/// entity store and copied verbatim into rendered output as a link target.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    pub fn new(absolute: impl Into<String>) -> Self {
        Self(absolute.into())
    }

    /// The absolute string form, as written into rendered output.
    pub fn absolute_string(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Reference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
