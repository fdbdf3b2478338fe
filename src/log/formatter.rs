//! Record formatting.
//!
//! # Line Format
//! ```text
//! INFO: 2021/03/04 05:06:07.000123 hello a=1 b=x
//! ```
//! Four-letter level, local timestamp with microseconds, the raw message,
//! then ` key=value` for every field. No colors, one line per record.

use std::fmt::Write;
use thiserror::Error;
use crate::log::Record;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Errors a formatter may report. The text formatter never produces one
/// for a well-formed record.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Turns a record into the bytes written to the output stream.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &Record) -> Result<Vec<u8>, FormatError>;
}

/// Plain single-line text formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, record: &Record) -> Result<Vec<u8>, FormatError> {
        let mut line = String::with_capacity(64 + record.message.len());

        write!(
            line,
            "{}: {} {}",
            record.level.label(),
            record.time.format(TIMESTAMP_FORMAT),
            record.message
        )?;
        for (key, value) in &record.fields {
            write!(line, " {}={}", key, value)?;
        }
        line.push('\n');

        Ok(line.into_bytes())
    }
}
