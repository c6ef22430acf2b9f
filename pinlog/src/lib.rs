//! Human-readable diagnostic log lines.
//!
//! A log call takes a value, an optional title and some layout knobs and
//! produces one (possibly multi-line) string:
//!
//! ```text
//! -- fetch [Time: 1:05.0] [Turn: 3] 200 OK
//! ```
//!
//! - **[`core`]**: Pure string building (pins, indentation, time display,
//!   thread glyphs). No I/O.
//! - **[`io`]**: Sinks that receive the rendered text and the TOML config.
//!
//! [`logger::Logger`] ties them together behind a [`gate::Gate`] and offers
//! call-site helpers that log a value and return it unchanged.

pub mod core;
pub mod error;
pub mod gate;
pub mod io;
pub mod logger;
pub mod logging;
pub mod suppliers;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::draw::{Failure, Value};
pub use crate::core::request::LogRequest;
pub use crate::error::LogError;
pub use crate::gate::Gate;
pub use crate::logger::Logger;
