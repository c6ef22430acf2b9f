//! Logger configuration stored as TOML (default `pinlog.toml`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::style::{DEFAULT_RULER_MARK, DEFAULT_RULER_REPEAT, Style};
use crate::error::LogError;
use crate::io::sink::SinkKind;

pub const DEFAULT_CONFIG_FILE: &str = "pinlog.toml";

/// Logger configuration (TOML).
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// `false` turns every log call into a no-op.
    pub enabled: bool,

    pub sink: SinkKind,

    /// Default for `[Time: ...]` boxes.
    pub show_time: bool,

    /// Default for `[Turn: ...]` boxes. Follows `show_time` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_turn: Option<bool>,

    pub indent: u8,
    pub ruler_mark: char,
    pub offset: String,
    pub ruler_repeat: u32,

    pub style: Style,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sink: SinkKind::Stdout,
            show_time: true,
            show_turn: None,
            indent: 0,
            ruler_mark: DEFAULT_RULER_MARK,
            offset: String::new(),
            ruler_repeat: DEFAULT_RULER_REPEAT,
            style: Style::default(),
        }
    }
}

impl LogConfig {
    pub fn validate(&self) -> Result<(), LogError> {
        let mut errors = self.style.violations();
        if self.ruler_repeat == 0 {
            errors.push("ruler_repeat must be > 0".to_string());
        }
        if self.ruler_mark.is_control() {
            errors.push("ruler_mark must be a printable character".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(LogError::Config(errors))
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LogConfig::default()`.
pub fn load_config(path: &Path) -> Result<LogConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        return Ok(LogConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LogConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), enabled = cfg.enabled, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &LogConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
