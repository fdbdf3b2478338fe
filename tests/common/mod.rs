//! Shared utilities for integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use stderr_logging::{Level, Logger};

/// Cloneable in-memory writer standing in for stderr.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Install a capturing logger as the process-wide logger.
#[allow(dead_code)]
pub fn capture_global(level: Level) -> Capture {
    let capture = Capture::default();
    let logger = Logger::builder().level(level).output(capture.clone()).build();
    stderr_logging::set_logger(Arc::new(logger));
    capture
}

/// Current value of `log_messages_total{level}` in a Prometheus exposition.
#[allow(dead_code)]
pub fn message_count(rendered: &str, level: &str) -> u64 {
    let prefix = format!("log_messages_total{{level=\"{}\"}} ", level);
    rendered
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .and_then(|n| n.trim().parse().ok())
        .unwrap_or(0)
}
