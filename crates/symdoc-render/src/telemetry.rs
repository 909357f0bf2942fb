//! Tracing initialization.

use crate::config::{DEFAULT_LOG_FILTER, TracingConfig};
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding `EnvFilter` directives,
/// e.g. `SYMDOC_LOG=symdoc_render::overloads=debug`.
pub const LOG_ENV_VAR: &str = "SYMDOC_LOG";

static INIT: Once = Once::new();

/// Install the global fmt subscriber.
///
/// Directives come from `SYMDOC_LOG`, then the configured filter, then
/// `DEFAULT_LOG_FILTER`. Idempotent; a subscriber installed elsewhere is left
/// in place.
pub fn init_tracing(config: &TracingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
    });
}
