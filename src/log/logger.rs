//! The logger: level threshold, formatter, hooks and output stream.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use crate::context::FieldSource;
use crate::log::{Entry, Fields, Formatter, Level, Record, TextFormatter};

/// Callback run for every emitted record.
pub trait Hook: Send + Sync {
    /// Levels this hook wants to see.
    fn levels(&self) -> &[Level] {
        &Level::ALL
    }

    fn fire(&self, record: &Record);
}

/// A configured logger.
///
/// Writes are serialized through an internal mutex, so a logger can be
/// shared between threads behind an `Arc`.
pub struct Logger {
    level: Level,
    formatter: Box<dyn Formatter>,
    hooks: Vec<Box<dyn Hook>>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::builder().build()
    }
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Entry carrying the fields of `source`.
    pub fn with(self: &Arc<Self>, source: &impl FieldSource) -> Entry {
        Entry::new(Arc::clone(self), source.log_fields())
    }

    /// Entry with no fields.
    pub fn entry(self: &Arc<Self>) -> Entry {
        Entry::new(Arc::clone(self), Fields::new())
    }

    /// Emit a record built from its parts, if the level is enabled.
    pub fn log(&self, level: Level, message: impl fmt::Display, fields: Fields) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(&Record::new(level, message.to_string(), fields));
    }

    /// Fire hooks and write a record. The level check is the caller's job.
    pub fn emit(&self, record: &Record) {
        for hook in &self.hooks {
            if hook.levels().contains(&record.level) {
                hook.fire(record);
            }
        }

        let line = match self.formatter.format(record) {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to format log record: {}", e);
                return;
            }
        };

        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = out.write_all(&line).and_then(|_| out.flush()) {
            eprintln!("Failed to write to log: {}", e);
        }
    }
}

/// Builder for [`Logger`]. Defaults: level Info, standard error, text
/// formatter, no hooks.
pub struct LoggerBuilder {
    level: Level,
    formatter: Box<dyn Formatter>,
    hooks: Vec<Box<dyn Hook>>,
    out: Box<dyn Write + Send>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            level: Level::Info,
            formatter: Box::new(TextFormatter),
            hooks: Vec::new(),
            out: Box::new(io::stderr()),
        }
    }
}

impl LoggerBuilder {
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn hook(mut self, hook: impl Hook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn output(mut self, out: impl Write + Send + 'static) -> Self {
        self.out = Box::new(out);
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            level: self.level,
            formatter: self.formatter,
            hooks: self.hooks,
            out: Mutex::new(self.out),
        }
    }
}
