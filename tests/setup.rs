//! Process-wide setup: level parsing, threshold, metrics, context entries.

use std::io::Write;
use serial_test::serial;
use stderr_logging::config::{load_config, LogConfig};
use stderr_logging::observability::metrics::prometheus_handle;
use stderr_logging::{Level, RequestContext, SetupError};

mod common;

#[test]
#[serial]
fn test_every_valid_level_sets_threshold() {
    let cases = [
        ("debug", Level::Debug),
        ("Info", Level::Info),
        ("WARN", Level::Warn),
        ("error", Level::Error),
        ("Fatal", Level::Fatal),
        ("panic", Level::Panic),
    ];

    for (name, level) in cases {
        stderr_logging::setup(name).unwrap();
        let logger = stderr_logging::logger();
        assert_eq!(logger.level(), level, "setup({:?})", name);

        for other in Level::ALL {
            assert_eq!(logger.is_enabled(other), other >= level);
        }
    }
}

#[test]
#[serial]
fn test_invalid_level_leaves_logger_unchanged() {
    stderr_logging::setup("warn").unwrap();
    let before = stderr_logging::logger();

    let err = stderr_logging::setup("bogus").unwrap_err();
    assert!(matches!(err, SetupError::InvalidLevel(_)));
    assert!(err.to_string().contains("bogus"));

    let after = stderr_logging::logger();
    assert!(std::sync::Arc::ptr_eq(&before, &after));
    assert_eq!(after.level(), Level::Warn);
}

#[test]
#[serial]
fn test_setup_counts_emitted_records() {
    stderr_logging::setup("warn").unwrap();
    let handle = prometheus_handle().expect("recorder installed by setup");
    let before = handle.render();

    let entry = stderr_logging::with(&RequestContext::new());
    entry.info("suppressed");
    entry.warn("counted");
    entry.error("counted");

    let after = handle.render();
    assert_eq!(
        common::message_count(&after, "info"),
        common::message_count(&before, "info")
    );
    assert_eq!(
        common::message_count(&after, "warning"),
        common::message_count(&before, "warning") + 1
    );
    assert_eq!(
        common::message_count(&after, "error"),
        common::message_count(&before, "error") + 1
    );
}

#[test]
#[serial]
fn test_setup_emits_no_records_of_its_own() {
    stderr_logging::setup("debug").unwrap();
    let handle = prometheus_handle().expect("recorder installed by setup");
    let before = handle.render();

    stderr_logging::setup("debug").unwrap();

    let after = handle.render();
    for level in Level::ALL {
        assert_eq!(
            common::message_count(&after, level.as_str()),
            common::message_count(&before, level.as_str()),
            "level {}",
            level
        );
    }
}

#[test]
#[serial]
fn test_with_context_fields_in_output() {
    let capture = common::capture_global(Level::Info);

    let ctx = RequestContext::new().with_org_id("t1");
    let entry = stderr_logging::with(&ctx);
    assert_eq!(entry.fields().get("orgID").map(|v| v.to_string()), Some("t1".into()));
    entry.error(format_args!("Some error: {}", 42));

    stderr_logging::with(&RequestContext::new()).info("no fields");

    let text = capture.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ERRO: "));
    assert!(lines[0].ends_with(" Some error: 42 orgID=t1"));
    assert!(lines[1].starts_with("INFO: "));
    assert!(lines[1].ends_with(" no fields"));
}

#[test]
#[serial]
fn test_setup_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "level = \"ERROR\"\nmetrics = false\ncapture_tracing = false").unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config,
        LogConfig {
            level: "ERROR".into(),
            metrics: false,
            capture_tracing: false,
        }
    );

    stderr_logging::setup_with(&config).unwrap();
    assert_eq!(stderr_logging::logger().level(), Level::Error);
}
