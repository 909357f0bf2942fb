//! Translator configuration.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```toml
//! missing_overload_fragments = "warn"
//!
//! [tracing]
//! filter = "symdoc_render=debug"
//! ```

use serde::{Deserialize, Serialize};

/// Default `EnvFilter` directive when neither the environment nor the config
/// supplies one.
pub const DEFAULT_LOG_FILTER: &str = "symdoc_render=info";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid toml config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How an upstream data inconsistency is surfaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    /// Skip silently.
    Ignore,
    /// Skip and log a warning.
    #[default]
    Warn,
    /// Log, then panic when debug assertions are enabled.
    Assert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    /// `EnvFilter` directives used when `SYMDOC_LOG` is unset or invalid.
    pub filter: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Applied when an overload sibling has no declaration for the active trait.
    pub missing_overload_fragments: DiagnosticLevel,
    pub tracing: TracingConfig,
}

impl TranslatorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = TranslatorConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, TranslatorConfig::default());
        assert_eq!(config.missing_overload_fragments, DiagnosticLevel::Warn);
        assert_eq!(config.tracing.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn parses_all_fields() {
        let config = TranslatorConfig::from_toml_str(
            r#"
            missing_overload_fragments = "assert"

            [tracing]
            filter = "symdoc_render=trace"
            "#,
        )
        .expect("full config");
        assert_eq!(config.missing_overload_fragments, DiagnosticLevel::Assert);
        assert_eq!(config.tracing.filter, "symdoc_render=trace");
    }

    #[test]
    fn rejects_unknown_level() {
        let err = TranslatorConfig::from_toml_str(r#"missing_overload_fragments = "loud""#)
            .expect_err("unknown level must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
