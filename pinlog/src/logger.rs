//! The logger handed to call sites.
//!
//! A `Logger` owns the configuration, the sink, the thread marker and the
//! optional time/turn suppliers. Its `log_*` helpers return the logged value
//! so they can wrap an expression in place.

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::trace;

use crate::core::compose::{Supplier, compose};
use crate::core::draw::{Failure, Value};
use crate::core::primitives::{EQUAL_SIGN, variable};
use crate::core::request::LogRequest;
use crate::core::thread_marker::ThreadMarker;
use crate::error::LogError;
use crate::gate::Gate;
use crate::io::config::{LogConfig, load_config};
use crate::io::sink::Sink;
use crate::suppliers::{Stopwatch, TurnCounter};

pub type BoxedSupplier = Box<dyn Fn() -> String + Send + Sync>;
pub type Filter = Box<dyn Fn(&LogRequest<'_>) -> bool + Send + Sync>;

pub struct Logger {
    gate: Gate,
    config: LogConfig,
    sink: Box<dyn Sink>,
    marker: Arc<ThreadMarker>,
    timer: Option<BoxedSupplier>,
    turner: Option<BoxedSupplier>,
    filter: Option<Filter>,
}

impl Logger {
    /// Logger for `config`, sharing the process-wide thread marker.
    pub fn new(config: LogConfig) -> Self {
        Self {
            gate: Gate::from(config.enabled),
            sink: config.sink.build(),
            config,
            marker: ThreadMarker::shared(),
            timer: None,
            turner: None,
            filter: None,
        }
    }

    pub fn from_config_file(path: &Path) -> Result<Self> {
        Ok(Self::new(load_config(path)?))
    }

    /// A logger whose calls do nothing.
    pub fn off() -> Self {
        Self::default().with_gate(Gate::Off)
    }

    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn with_marker(mut self, marker: Arc<ThreadMarker>) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_timer(mut self, timer: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.timer = Some(Box::new(timer));
        self
    }

    pub fn with_turner(mut self, turner: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.turner = Some(Box::new(turner));
        self
    }

    /// Time boxes show milliseconds since this call.
    pub fn with_stopwatch(self) -> Self {
        let watch = Stopwatch::start();
        self.with_timer(move || watch.elapsed_millis())
    }

    /// Turn boxes show a call sequence number.
    pub fn with_turn_counter(self) -> Self {
        let counter = TurnCounter::new();
        self.with_turner(move || counter.next_turn())
    }

    /// Replace the default filter (value or title present).
    pub fn with_filter(
        mut self,
        filter: impl Fn(&LogRequest<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn gate(&self) -> Gate {
        self.gate
    }

    /// A request carrying this logger's per-call defaults.
    pub fn request<'a>(&'a self, value: impl Into<Value<'a>>) -> LogRequest<'a> {
        let request = LogRequest::new(value)
            .time(self.config.show_time)
            .indent(self.config.indent)
            .ruler(self.config.ruler_mark, self.config.ruler_repeat)
            .offset(&self.config.offset);
        match self.config.show_turn {
            Some(show) => request.turn(show),
            None => request,
        }
    }

    /// Compose the text for `request` regardless of the gate.
    pub fn render(&self, request: &LogRequest<'_>) -> String {
        compose(
            request,
            &self.config.style,
            &self.marker,
            supplier(&self.timer),
            supplier(&self.turner),
        )
    }

    /// Filter, then compose and write if the gate is on.
    pub fn emit(&self, request: &LogRequest<'_>) {
        let admitted = match &self.filter {
            Some(filter) => filter(request),
            None => request.has_subject(),
        };
        if !admitted {
            trace!("log call filtered out");
            return;
        }
        self.gate.emit(self.sink.as_ref(), || self.render(request));
    }

    /// Log `value` under `title`.
    pub fn log<'a>(&'a self, value: impl Into<Value<'a>>, title: &'a dyn Display) {
        self.emit(&self.request(value).title(title));
    }

    /// Log `value` and hand it back.
    ///
    /// Values go through `Display` only; errors keep their trace through
    /// [`Logger::log_error`] and [`Logger::log_failure`].
    pub fn log_value<T: Display>(&self, value: T) -> T {
        self.emit(&self.request(&value));
        value
    }

    /// Log `name = value` and hand the value back. An empty name logs the
    /// value alone.
    pub fn log_named<T: Display>(&self, name: &str, value: T) -> T {
        if name.is_empty() {
            return self.log_value(value);
        }
        let named = Named { name, value: &value };
        self.emit(&self.request(&named));
        value
    }

    /// Run `block`, log its result and return it.
    pub fn log_with<T: Display>(&self, block: impl FnOnce() -> T) -> T {
        self.log_value(block())
    }

    /// Log `err` with its `source()` chain and hand it back.
    pub fn log_error<E: StdError>(&self, err: E) -> E {
        self.emit(&self.request(Value::error(&err)));
        err
    }

    /// Log `failure` with its trace and hand it back.
    pub fn log_failure<F: Failure>(&self, failure: F) -> F {
        self.emit(&self.request(Value::failure(&failure)));
        failure
    }

    /// Log the error side of `result`, if any, and return `result` unchanged.
    pub fn log_err<T, E: StdError>(&self, result: Result<T, E>) -> Result<T, E> {
        if let Err(err) = &result {
            self.emit(&self.request(Value::error(err)));
        }
        result
    }

    /// Log the first element of `pair` titled by the second; return the first.
    pub fn log_pair<T: Display, U: Display>(&self, pair: Option<(T, U)>) -> Option<T> {
        let (value, tag) = pair?;
        self.emit(&self.request(&value).title(&tag));
        Some(value)
    }

    /// Log `value` through a custom `draw` hook and hand it back.
    ///
    /// The hook needs a concrete value, so `None` is a caller error.
    pub fn log_drawn<T>(
        &self,
        value: Option<T>,
        draw: impl Fn(&T) -> String,
    ) -> Result<T, LogError> {
        let value = value.ok_or(LogError::InvalidValue { hook: "log_drawn" })?;
        let drawn = Drawn {
            value: &value,
            draw: &draw,
        };
        self.emit(&self.request(&drawn));
        Ok(value)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

fn supplier(slot: &Option<BoxedSupplier>) -> Option<Supplier<'_>> {
    let supply: Supplier<'_> = slot.as_deref()?;
    Some(supply)
}

struct Named<'a, T> {
    name: &'a str,
    value: &'a T,
}

impl<T: Display> Display for Named<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&variable(self.name, self.value, 1, EQUAL_SIGN))
    }
}

struct Drawn<'a, T, F> {
    value: &'a T,
    draw: &'a F,
}

impl<T, F: Fn(&T) -> String> Display for Drawn<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&(self.draw)(self.value))
    }
}
