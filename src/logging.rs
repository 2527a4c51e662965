//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ServerError};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "WXMP_LOG";

const DEFAULT_FILTER: &str = "wxmp_console=info,warn";

/// Install the global tracing subscriber, writing to stderr.
///
/// ```bash
/// WXMP_LOG=debug cargo leptos watch
/// ```
pub fn init() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| ServerError::Logging(e.to_string()))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
