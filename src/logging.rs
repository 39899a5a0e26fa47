//! Logging setup.
//!
//! Installs a global `tracing` subscriber according to [`LogConfig`]. The
//! `RUST_LOG` environment variable, when set, takes precedence over the
//! configured level.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{KumuError, KumuResult};

/// Builds the level filter, preferring `RUST_LOG` over the configured level.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize the logging system.
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(config: &LogConfig) -> KumuResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| KumuError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
