//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Count emitted log records per level
//! - Install the Prometheus recorder once per process
//! - Expose the text exposition for scraping
//!
//! # Metrics
//! - `log_messages_total` (counter): emitted records, labeled by `level`
//!
//! # Design Decisions
//! - Goes through the `metrics` facade; the hook does not know the exporter
//! - Every level series is registered at zero when the hook is built

use std::sync::Mutex;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use crate::log::{Hook, Level, Record};

/// Counter of emitted log records.
pub const LOG_MESSAGES_TOTAL: &str = "log_messages_total";

static PROMETHEUS: Mutex<Option<PrometheusHandle>> = Mutex::new(None);

/// Install the Prometheus recorder as the global `metrics` recorder.
///
/// Later calls return the handle from the first successful install.
/// Fails if some other recorder was installed first.
pub fn install_prometheus() -> Result<PrometheusHandle, BuildError> {
    let mut slot = PROMETHEUS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(handle) = slot.as_ref() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    *slot = Some(handle.clone());
    Ok(handle)
}

/// Handle of the installed Prometheus recorder, if any.
pub fn prometheus_handle() -> Option<PrometheusHandle> {
    PROMETHEUS
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Hook that increments `log_messages_total{level}` per record.
#[derive(Debug)]
pub struct MetricsHook {
    _private: (),
}

impl MetricsHook {
    pub fn new() -> Self {
        describe_counter!(LOG_MESSAGES_TOTAL, "Total number of log messages.");
        for level in Level::ALL {
            counter!(LOG_MESSAGES_TOTAL, "level" => level.as_str()).increment(0);
        }
        Self { _private: () }
    }
}

impl Default for MetricsHook {
    fn default() -> Self {
        Self::new()
    }
}

impl Hook for MetricsHook {
    fn fire(&self, record: &Record) {
        counter!(LOG_MESSAGES_TOTAL, "level" => record.level.as_str()).increment(1);
    }
}
