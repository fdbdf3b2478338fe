//! Process-wide stderr logging with a fixed single-line text format,
//! per-level message counters, and request context fields.

pub mod config;
pub mod context;
pub mod log;
pub mod observability;

pub use config::LogConfig;
pub use context::{FieldSource, RequestContext};
pub use log::{Entry, Fields, Level, Logger, Value};
pub use observability::logging::{logger, set_logger, setup, setup_with, with, SetupError};
