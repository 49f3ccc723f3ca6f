//! Logging setup
//!
//! `RUST_LOG` wins over the configured level when it is set.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{PolicyError, Result};
use tracing_subscriber::EnvFilter;

/// Build the level filter for a logging configuration
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()))
}

/// Install the global tracing subscriber
///
/// Fails if a subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false)
        .with_thread_ids(false);

    let result = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().with_current_span(false).try_init(),
    };

    result.map_err(|e| PolicyError::config(format!("Failed to initialize logging: {}", e)))
}
