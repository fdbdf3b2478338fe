//! Log entries: a logger plus pre-set fields.

use std::fmt;
use std::sync::Arc;
use crate::log::{Fields, Level, Logger, Value};

/// A logger bound to a set of fields.
///
/// ```rust,ignore
/// let entry = stderr_logging::with(&ctx);
/// entry.error(format_args!("upstream returned {}", status));
/// ```
#[derive(Debug, Clone)]
pub struct Entry {
    logger: Arc<Logger>,
    fields: Fields,
}

impl Entry {
    pub fn new(logger: Arc<Logger>, fields: Fields) -> Self {
        Self { logger, fields }
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key, value);
        self
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn log(&self, level: Level, message: impl fmt::Display) {
        self.logger.log(level, message, self.fields.clone());
    }

    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Level::Trace, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    /// Log at fatal level, then exit the process with status 1.
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.log(Level::Fatal, message);
        std::process::exit(1)
    }

    /// Log at panic level, then panic with the message.
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let message = message.to_string();
        self.log(Level::Panic, &message);
        panic!("{}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::logger::tests::Capture;

    fn capturing(level: Level) -> (Arc<Logger>, Capture) {
        let capture = Capture::default();
        let logger = Logger::builder().level(level).output(capture.clone()).build();
        (Arc::new(logger), capture)
    }

    #[test]
    fn test_entry_appends_fields() {
        let (logger, capture) = capturing(Level::Debug);
        let entry = logger.entry().with_field("route", "/api").with_field("status", 502u32);

        entry.error(format_args!("upstream failed after {} tries", 3));

        let text = capture.text();
        assert!(text.starts_with("ERRO: "));
        assert!(text.ends_with(" upstream failed after 3 tries route=/api status=502\n"));
    }

    #[test]
    fn test_empty_entry_has_no_suffix() {
        let (logger, capture) = capturing(Level::Info);
        let entry = logger.entry();
        assert!(entry.fields().is_empty());

        entry.info("plain");
        assert!(capture.text().ends_with(" plain\n"));
    }

    #[test]
    fn test_leveled_calls_honor_threshold() {
        let (logger, capture) = capturing(Level::Warn);
        let entry = logger.entry();

        entry.trace("t");
        entry.debug("d");
        entry.info("i");
        entry.warn("w");

        let text = capture.text();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("WARN: "));
    }

    #[test]
    #[should_panic(expected = "cannot continue")]
    fn test_panic_logs_then_panics() {
        let (logger, _capture) = capturing(Level::Info);
        logger.entry().panic("cannot continue");
    }

    #[test]
    fn test_panic_line_is_written_before_unwinding() {
        let (logger, capture) = capturing(Level::Info);
        let entry = logger.entry().with_field("k", "v");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| entry.panic("boom")));
        assert!(result.is_err());
        assert!(capture.text().starts_with("PANI: "));
        assert!(capture.text().ends_with(" boom k=v\n"));
    }
}
