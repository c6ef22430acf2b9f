//! Side-effecting edges: where text goes and where settings come from.

pub mod config;
pub mod sink;
