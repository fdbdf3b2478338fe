//! Bridge from `tracing` events to the logger.
//!
//! # Responsibilities
//! - Turn `tracing` events into records (message + typed fields)
//! - Apply the logger's threshold, hooks and line format to them
//!
//! # Design Decisions
//! - The bridge looks up the process-wide logger per event, so a later
//!   `setup` takes effect without reinstalling the subscriber
//! - Only one global subscriber can exist; installing is attempted once

use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use crate::log::{Fields, Level, Logger, Record};
use crate::observability::logging;

/// `tracing_subscriber` layer that writes events through a [`Logger`].
#[derive(Debug, Clone, Default)]
pub struct LogBridge {
    logger: Option<Arc<Logger>>,
}

impl LogBridge {
    /// Bridge to whatever logger is process-wide at event time.
    pub fn global() -> Self {
        Self { logger: None }
    }

    /// Bridge to a fixed logger.
    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self { logger: Some(logger) }
    }

    fn target(&self) -> Arc<Logger> {
        match &self.logger {
            Some(logger) => Arc::clone(logger),
            None => logging::logger(),
        }
    }
}

impl<S: Subscriber> Layer<S> for LogBridge {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Level::from(*event.metadata().level());
        let logger = self.target();
        if !logger.is_enabled(level) {
            return;
        }

        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);
        logger.emit(&Record::new(level, visitor.message, visitor.fields));
    }
}

/// Collects the message and fields of one event.
#[derive(Default)]
struct RecordVisitor {
    message: String,
    fields: Fields,
}

impl RecordVisitor {
    fn skip(field: &Field) -> bool {
        // Metadata added by tracing-log for records from the `log` crate.
        field.name().starts_with("log.")
    }
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else if !Self::skip(field) {
            self.fields.insert(field.name(), value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if !Self::skip(field) {
            self.fields.insert(field.name(), value);
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if !Self::skip(field) {
            self.fields.insert(field.name(), value);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if !Self::skip(field) {
            self.fields.insert(field.name(), value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if !Self::skip(field) {
            self.fields.insert(field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else if !Self::skip(field) {
            self.fields.insert(field.name(), format!("{:?}", value));
        }
    }
}

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install [`LogBridge::global`] as the global `tracing` subscriber.
///
/// Returns false when another subscriber already owns that slot.
pub fn install_bridge() -> bool {
    *INSTALLED.get_or_init(|| {
        tracing_subscriber::registry()
            .with(LogBridge::global())
            .try_init()
            .is_ok()
    })
}
