//! Core logging types.
//!
//! # Data Flow
//! ```text
//! Entry::info / Logger::log / tracing event
//!     → level check (below threshold: dropped)
//!     → Record (level, local time, message, fields)
//!     → hooks (metrics counter, ...)
//!     → Formatter (one line of text)
//!     → output stream (stderr, behind a mutex)
//! ```

pub mod entry;
pub mod fields;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod record;

pub use entry::Entry;
pub use fields::{Fields, Value};
pub use formatter::{FormatError, Formatter, TextFormatter};
pub use level::{Level, ParseLevelError};
pub use logger::{Hook, Logger, LoggerBuilder};
pub use record::Record;
