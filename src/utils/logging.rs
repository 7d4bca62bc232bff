//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the EventFlow client.

use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the appender guard when file logging is enabled; the caller
/// must keep it alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let guard = if let Some(ref dir) = config.file_path {
        let file_appender = tracing_appender::rolling::daily(dir, "eventflow-client.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
            .init();
        Some(guard)
    } else {
        registry.init();
        None
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log API errors with context
pub fn log_api_error(path: &str, status: Option<u16>, error: &str) {
    error!(
        path = path,
        status = status,
        error = error,
        "API error occurred"
    );
}
