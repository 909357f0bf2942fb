//! Platform names used to group declaration variants.

use serde::{Deserialize, Serialize};

/// The name of a platform a declaration is available on.
///
/// Compared by raw value only; no platform family or version semantics.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformName(String);

impl PlatformName {
    pub fn new(raw_value: impl Into<String>) -> Self {
        Self(raw_value.into())
    }

    pub fn raw_value(&self) -> &str {
        &self.0
    }

    pub fn ios() -> Self {
        Self::new("iOS")
    }

    pub fn macos() -> Self {
        Self::new("macOS")
    }

    pub fn watchos() -> Self {
        Self::new("watchOS")
    }

    pub fn tvos() -> Self {
        Self::new("tvOS")
    }

    pub fn visionos() -> Self {
        Self::new("visionOS")
    }

    pub fn catalyst() -> Self {
        Self::new("Mac Catalyst")
    }

    pub fn linux() -> Self {
        Self::new("Linux")
    }
}

impl std::fmt::Display for PlatformName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
