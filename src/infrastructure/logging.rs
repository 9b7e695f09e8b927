//! Process-wide tracing setup
//!
//! Diagnostics are written to stderr; stdout carries the command's JSON.

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::domain::DomainError;

/// Filter from `RUST_LOG` when set, otherwise from the configured level
pub fn build_filter(level: &str) -> Result<EnvFilter, DomainError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(level)
        .map_err(|e| DomainError::configuration(format!("Invalid log level '{}': {}", level, e)))
}

/// Installs the global subscriber; fails if one is already installed
pub fn init_logging(config: &LoggingConfig) -> Result<(), DomainError> {
    let filter = build_filter(&config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
            .try_init(),
    };

    installed.map_err(|e| DomainError::configuration(format!("Logging already initialized: {}", e)))?;

    tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(())
}
