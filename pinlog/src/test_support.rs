//! Test-only sinks and values that record what the logger did.

use std::fmt::{self, Display};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::core::thread_marker::ThreadMarker;
use crate::io::config::LogConfig;
use crate::io::sink::Sink;
use crate::logger::Logger;

/// Sink that keeps every written line. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

impl Sink for RecordingSink {
    fn write(&self, text: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(text.to_string());
        }
    }
}

/// Display value that counts how often it was drawn.
#[derive(Debug, Default)]
pub struct CountingValue {
    text: String,
    draws: AtomicUsize,
}

impl CountingValue {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            draws: AtomicUsize::new(0),
        }
    }

    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl Display for CountingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.draws.fetch_add(1, Ordering::SeqCst);
        f.write_str(&self.text)
    }
}

/// Logger writing to `sink`, with its own marker that has seen this thread.
pub fn recording_logger(config: LogConfig, sink: &RecordingSink) -> Logger {
    Logger::new(config)
        .with_sink(sink.clone())
        .with_marker(Arc::new(ThreadMarker::new()))
}
