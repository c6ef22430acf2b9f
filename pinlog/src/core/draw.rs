//! Turning a logged value into text.
//!
//! Values that describe a failure render their message followed by a trace on
//! the next line; everything else uses `Display`.

use std::error::Error as StdError;
use std::fmt::{self, Display};

use crate::core::primitives::NULL_TEXT;

/// A value that can explain how it failed.
pub trait Failure {
    fn message(&self) -> String;
    fn trace(&self) -> String;
}

impl Failure for anyhow::Error {
    fn message(&self) -> String {
        self.to_string()
    }

    fn trace(&self) -> String {
        let causes: Vec<String> = self.chain().skip(1).map(|cause| cause.to_string()).collect();
        let backtrace = self.backtrace().to_string();
        let mut lines: Vec<String> = causes
            .into_iter()
            .map(|cause| format!("caused by: {cause}"))
            .collect();
        if !backtrace.is_empty() && backtrace != "disabled backtrace" {
            lines.push(backtrace);
        }
        lines.join("\n")
    }
}

/// Borrowed view of a logged value.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Null,
    Text(&'a dyn Display),
    Error(&'a (dyn StdError + 'a)),
    Failure(&'a dyn Failure),
}

impl<'a> Value<'a> {
    pub fn error(err: &'a (dyn StdError + 'a)) -> Self {
        Value::Error(err)
    }

    pub fn failure(failure: &'a dyn Failure) -> Self {
        Value::Failure(failure)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl<'a, T: Display> From<&'a T> for Value<'a> {
    fn from(value: &'a T) -> Self {
        Value::Text(value)
    }
}

impl<'a, T: Display> From<Option<&'a T>> for Value<'a> {
    fn from(value: Option<&'a T>) -> Self {
        value.map_or(Value::Null, |value| Value::Text(value))
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Text(_) => f.write_str("Text(..)"),
            Value::Error(_) => f.write_str("Error(..)"),
            Value::Failure(_) => f.write_str("Failure(..)"),
        }
    }
}

/// Render `value` as log text.
///
/// Extra params are accepted for renderers that interpolate extra arguments; the
/// default renderer ignores them.
pub fn draw(value: Value<'_>, _params: &[&dyn Display]) -> String {
    match value {
        Value::Null => NULL_TEXT.to_string(),
        Value::Text(text) => text.to_string(),
        Value::Error(err) => format!("{err}\n{}", error_trace(err)),
        Value::Failure(failure) => format!("{}\n{}", failure.message(), failure.trace()),
    }
}

fn error_trace(err: &dyn StdError) -> String {
    let mut lines = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(format!("caused by: {cause}"));
        source = cause.source();
    }
    lines.join("\n")
}
