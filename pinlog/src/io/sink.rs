//! Destinations for rendered log text.
//!
//! A sink is the only place a rendered line leaves the process. Write
//! failures stay inside the sink; logging never fails the caller.

use std::io::Write;

use serde::{Deserialize, Serialize};

pub trait Sink: Send + Sync {
    fn write(&self, text: &str);
}

impl<F> Sink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn write(&self, text: &str) {
        self(text);
    }
}

/// One line per call on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Sink for Stdout {
    fn write(&self, text: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{text}");
    }
}

/// One line per call on standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl Sink for Stderr {
    fn write(&self, text: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{text}");
    }
}

/// Forwards each line as an `info` event to the installed `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write(&self, text: &str) {
        tracing::info!(target: "pinlog", "{text}");
    }
}

/// Sink selection as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Stdout,
    Stderr,
    Tracing,
}

impl SinkKind {
    pub fn build(self) -> Box<dyn Sink> {
        match self {
            SinkKind::Stdout => Box::new(Stdout),
            SinkKind::Stderr => Box::new(Stderr),
            SinkKind::Tracing => Box::new(TracingSink),
        }
    }
}
