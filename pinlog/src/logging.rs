//! `tracing` setup for the `pinlog` binary.
//!
//! Two kinds of events reach the subscriber:
//!
//! - pinlog's own diagnostics: `debug` events from `io::config` (config file
//!   missing or loaded) and `main` (`init` skipping an existing file), plus a
//!   `trace` event from `Logger::emit` whenever the filter drops a call.
//! - rendered lines, as `info` events with target `pinlog`, but only when the
//!   config selects `sink = "tracing"`. The stdout and stderr sinks bypass the
//!   subscriber entirely.
//!
//! The default filter lets the rendered lines through and hides diagnostics.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVES: &str = "warn,pinlog=info";

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// ```bash
/// RUST_LOG=pinlog=debug pinlog render 42 --config pinlog.toml
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}
