//! Process-wide logging setup.
//!
//! # Responsibilities
//! - Initialize the process-wide logger (stderr, level, formatter, hooks)
//! - Hand out entries enriched with request context fields
//!
//! # Design Decisions
//! - The process-wide logger lives in an `ArcSwap`; `setup` replaces it
//!   atomically and the last successful call wins
//! - A failed `setup` leaves the previous logger in place
//! - Before any `setup` the logger is Info level, stderr, text format,
//!   with no hooks

use std::io;
use std::sync::{Arc, LazyLock};
use arc_swap::ArcSwap;
use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use crate::config::LogConfig;
use crate::context::FieldSource;
use crate::log::{Entry, Level, Logger, ParseLevelError, TextFormatter};
use crate::observability::metrics::{install_prometheus, MetricsHook};
use crate::observability::tracing::install_bridge;

static LOGGER: LazyLock<ArcSwap<Logger>> =
    LazyLock::new(|| ArcSwap::from_pointee(Logger::default()));

/// Errors returned by [`setup`].
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("error parsing log level: {0}")]
    InvalidLevel(#[from] ParseLevelError),

    #[error("error installing metrics recorder: {0}")]
    Metrics(#[from] BuildError),
}

/// Configure process-wide logging at `level`: stderr output, text
/// formatter, metrics hook, `tracing` capture.
///
/// Meant to be called once at startup, before other threads log.
pub fn setup(level: &str) -> Result<(), SetupError> {
    setup_with(&LogConfig::with_level(level))
}

/// Configure process-wide logging from a [`LogConfig`].
pub fn setup_with(config: &LogConfig) -> Result<(), SetupError> {
    let level: Level = config.level.parse()?;

    let mut builder = Logger::builder()
        .level(level)
        .formatter(TextFormatter)
        .output(io::stderr());
    if config.metrics {
        install_prometheus()?;
        builder = builder.hook(MetricsHook::new());
    }
    set_logger(Arc::new(builder.build()));

    if config.capture_tracing {
        install_bridge();
    }

    Ok(())
}

/// Snapshot of the process-wide logger.
pub fn logger() -> Arc<Logger> {
    LOGGER.load_full()
}

/// Replace the process-wide logger.
pub fn set_logger(logger: Arc<Logger>) {
    LOGGER.store(logger);
}

/// Entry on the process-wide logger carrying the fields of `source`.
///
/// ```rust,ignore
/// let logger = stderr_logging::with(&ctx);
/// logger.error(format_args!("some error: {}", err));
/// ```
pub fn with(source: &impl FieldSource) -> Entry {
    logger().with(source)
}
