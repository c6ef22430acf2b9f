//! Deterministic string building for log lines.
//!
//! Core modules never write anywhere. They turn a value and its layout knobs
//! into text; the only state they touch is the [`thread_marker::ThreadMarker`]
//! handed to them.

pub mod compose;
pub mod draw;
pub mod indent;
pub mod pin;
pub mod primitives;
pub mod request;
pub mod style;
pub mod thread_marker;
pub mod time_format;
pub mod title;
