//! A single log record.

use chrono::{Local, NaiveDateTime};
use crate::log::{Fields, Level};

/// One log event, as handed to hooks and the formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    /// Local wall-clock time the record was created.
    pub time: NaiveDateTime,
    pub message: String,
    pub fields: Fields,
}

impl Record {
    /// Create a record stamped with the current local time.
    pub fn new(level: Level, message: impl Into<String>, fields: Fields) -> Self {
        Self {
            level,
            time: Local::now().naive_local(),
            message: message.into(),
            fields,
        }
    }
}
