//! Layout constants shared by the pin and indent renderers.
//!
//! `Style` is the per-logger half of the configuration surface: thresholds,
//! glyphs, bracket characters and tick visibility. Per-call knobs live on `LogRequest`.

use serde::{Deserialize, Serialize};

use crate::core::primitives::Visibility;
use crate::core::time_format::format_time;

pub const TIME_TAG: &str = "Time";
pub const TURN_TAG: &str = "Turn";
pub const DEFAULT_RULER_MARK: char = '|';
pub const DEFAULT_RULER_REPEAT: u32 = 4;
pub const LONG_TITLE_THRESHOLD: usize = 16;
pub const VERY_LONG_TITLE_THRESHOLD: usize = 64;
pub const IMPLICIT_INDENT_THRESHOLD: u8 = 8;
pub const SAME_THREAD_MARK: &str = "--";
pub const CHANGED_THREAD_MARK: &str = "||";
pub const LONG_PIN_MARK: &str = "----------------";
pub const VERY_LONG_PIN_MARK: &str = "-->>";
pub const WRAP_MARKS: [char; 2] = ['[', ']'];
pub const SEPARATOR_MARK: char = ':';

/// How raw timer output is displayed inside the `[Time: ...]` box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeStyle {
    /// Millisecond counts become `H:M:S.mmm` (see [`format_time`]).
    #[default]
    Clock,
    /// Timer output is shown verbatim.
    Raw,
}

impl TimeStyle {
    pub fn apply(self, time: &str) -> String {
        match self {
            TimeStyle::Clock => format_time(time),
            TimeStyle::Raw => time.to_string(),
        }
    }
}

/// Glyphs and thresholds driving pin and body layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Style {
    /// Titles at least this long get a wrapped pin on its own line.
    pub long_title_threshold: usize,

    /// Titles at least this long get a standalone pin block.
    pub very_long_title_threshold: usize,

    /// Indent levels below this are rendered as flat spaces, no ruler.
    pub implicit_indent_threshold: u8,

    /// Short-pin glyph when the caller thread matches the previous one.
    pub same_thread_mark: String,

    /// Short-pin glyph when the caller thread differs from the previous one.
    pub changed_thread_mark: String,

    /// Run of characters wrapped around long titles.
    pub long_pin_mark: String,

    /// Lead-in for very long titles.
    pub very_long_pin_mark: String,

    /// Opening and closing characters of `[Tag: text]` boxes.
    pub wrap_marks: [char; 2],

    pub separator: char,
    pub time_tag: String,
    pub turn_tag: String,
    pub time_style: TimeStyle,

    /// Which time and turn values still get a box in the tick.
    pub tick_visibility: Visibility,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            long_title_threshold: LONG_TITLE_THRESHOLD,
            very_long_title_threshold: VERY_LONG_TITLE_THRESHOLD,
            implicit_indent_threshold: IMPLICIT_INDENT_THRESHOLD,
            same_thread_mark: SAME_THREAD_MARK.to_string(),
            changed_thread_mark: CHANGED_THREAD_MARK.to_string(),
            long_pin_mark: LONG_PIN_MARK.to_string(),
            very_long_pin_mark: VERY_LONG_PIN_MARK.to_string(),
            wrap_marks: WRAP_MARKS,
            separator: SEPARATOR_MARK,
            time_tag: TIME_TAG.to_string(),
            turn_tag: TURN_TAG.to_string(),
            time_style: TimeStyle::Clock,
            tick_visibility: Visibility::default(),
        }
    }
}

impl Style {
    /// Return stable error messages for inconsistent settings (empty on success).
    pub fn violations(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.very_long_title_threshold < self.long_title_threshold {
            errors.push(format!(
                "very_long_title_threshold {} is below long_title_threshold {}",
                self.very_long_title_threshold, self.long_title_threshold
            ));
        }
        if self.same_thread_mark == self.changed_thread_mark {
            errors.push(format!(
                "same_thread_mark and changed_thread_mark must differ (both '{}')",
                self.same_thread_mark
            ));
        }
        errors
    }
}
