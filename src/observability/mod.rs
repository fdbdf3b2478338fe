//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Callers produce:
//!     → logging.rs (process-wide logger, entries with context fields)
//!     → tracing.rs (tracing events bridged into the same logger)
//!
//! Every emitted record:
//!     → metrics.rs (log_messages_total{level})
//!     → stderr (one text line)
//! ```
//!
//! # Design Decisions
//! - One line format for both direct entries and `tracing` events
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
pub mod tracing;
