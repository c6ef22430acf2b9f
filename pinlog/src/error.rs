//! Errors surfaced to logging call sites.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogError {
    /// A draw hook needs a concrete value but the call site passed none.
    #[error("invalid value: {hook} needs a value to draw, got none")]
    InvalidValue {
        /// What was asked to draw the value.
        hook: &'static str,
    },

    /// Settings that contradict each other.
    #[error("invalid config:\n- {}", .0.join("\n- "))]
    Config(Vec<String>),
}
