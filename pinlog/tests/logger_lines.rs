//! Logger-level tests through the public API.
//!
//! Drives `Logger` with a recording sink to check full lines: pin layouts by
//! title length, indentation, tick boxes, failures and the disabled gate.

use std::sync::Arc;

use anyhow::anyhow;
use pinlog::core::thread_marker::{ThreadKey, ThreadMarker};
use pinlog::io::config::LogConfig;
use pinlog::test_support::{CountingValue, RecordingSink, recording_logger};
use pinlog::{Gate, LogRequest, Logger, Value};

fn timed_logger(sink: &RecordingSink) -> Logger {
    recording_logger(LogConfig::default(), sink)
        .with_timer(|| "1234".to_string())
        .with_turner(|| "9".to_string())
}

#[test]
fn title_length_picks_the_layout() {
    let sink = RecordingSink::new();
    let logger = timed_logger(&sink);
    let long = "x".repeat(16);
    let very_long = "y".repeat(64);

    logger.log(&"short body", &"x".repeat(15));
    logger.log(&"long body", &long);
    logger.log(&"very long body", &very_long);

    let lines = sink.lines();
    assert_eq!(
        lines[0],
        format!("-- {} [Time: 1.234] [Turn: 9] short body", "x".repeat(15))
    );
    assert_eq!(
        lines[1],
        format!("---------------- {long} ---------------- [Time: 1.234] [Turn: 9]\nlong body")
    );
    assert_eq!(
        lines[2],
        format!("-->> {very_long}\n[Time: 1.234] [Turn: 9]\nvery long body")
    );
}

#[test]
fn turn_can_be_decoupled_from_time() {
    let sink = RecordingSink::new();
    let logger = timed_logger(&sink);
    logger.emit(&logger.request(&"body").title(&"t").time(false).turn(true));
    logger.emit(&logger.request(&"body").title(&"t").turn(false));
    assert_eq!(
        sink.lines(),
        vec!["-- t [Turn: 9] body", "-- t [Time: 1.234] body"]
    );
}

#[test]
fn failures_render_message_and_causes() {
    let sink = RecordingSink::new();
    let logger = recording_logger(
        LogConfig {
            show_time: false,
            ..LogConfig::default()
        },
        &sink,
    );
    let err = anyhow!("socket closed").context("send failed");
    logger.emit(&logger.request(Value::failure(&err)).title(&"net"));
    let lines = sink.lines();
    assert!(
        lines[0].starts_with("-- net send failed\ncaused by: socket closed"),
        "{}",
        lines[0]
    );
}

#[test]
fn disabled_gate_never_draws_or_writes() {
    let sink = RecordingSink::new();
    let logger = timed_logger(&sink).with_gate(Gate::Off);
    let value = CountingValue::new("never");
    logger.log(&value, &"t");
    logger.log_value(&value);
    logger.log_named("v", &value);
    assert_eq!(value.draws(), 0);
    assert!(sink.lines().is_empty());
}

#[test]
fn injected_marker_is_shared_between_loggers() {
    let sink = RecordingSink::new();
    let marker = Arc::new(ThreadMarker::starting_at(ThreadKey::from_raw(u64::MAX)));
    let quiet = LogConfig {
        show_time: false,
        ..LogConfig::default()
    };
    let first = recording_logger(quiet.clone(), &sink).with_marker(Arc::clone(&marker));
    let second = recording_logger(quiet, &sink).with_marker(marker);

    first.log(&1, &"a");
    second.log(&2, &"b");
    assert_eq!(sink.lines(), vec!["|| a 1", "-- b 2"]);
}

#[test]
fn standalone_request_defaults_match_logger_defaults() {
    let logger = Logger::default();
    let from_logger = logger.request(&1);
    let standalone = LogRequest::new(&1);
    assert_eq!(from_logger.show_time, standalone.show_time);
    assert_eq!(from_logger.show_turn(), standalone.show_turn());
    assert_eq!(from_logger.ruler_mark, standalone.ruler_mark);
    assert_eq!(from_logger.ruler_repeat, standalone.ruler_repeat);
}

#[test]
fn error_wrappers_keep_the_trace() {
    let sink = RecordingSink::new();
    let logger = recording_logger(
        LogConfig {
            show_time: false,
            ..LogConfig::default()
        },
        &sink,
    );
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let parsed: Result<u8, _> = "x".parse::<u8>();
    logger.log_failure(anyhow::Error::new(io_err).context("load failed"));
    let _ = logger.log_err(parsed);

    let lines = sink.lines();
    assert!(
        lines[0].starts_with("load failed\ncaused by: missing"),
        "{}",
        lines[0]
    );
    assert_eq!(lines[1], "invalid digit found in string\n");
}

#[test]
fn blank_turn_keeps_its_box() {
    let sink = RecordingSink::new();
    let logger = recording_logger(LogConfig::default(), &sink)
        .with_timer(String::new)
        .with_turner(|| " ".to_string());
    logger.log(&"body", &"t");
    assert_eq!(sink.lines(), vec!["-- t [Turn:  ] body"]);
}
