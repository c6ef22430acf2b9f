//! Per-call layout knobs.

use std::fmt::Display;

use crate::core::draw::Value;
use crate::core::style::{DEFAULT_RULER_MARK, DEFAULT_RULER_REPEAT};

/// One log call: the value, its title and how the line is laid out.
///
/// `show_turn` follows `show_time` until [`LogRequest::turn`] decouples them.
#[derive(Clone, Copy)]
pub struct LogRequest<'a> {
    pub value: Value<'a>,
    /// `None` renders no pin at all; `Some("")` still renders time and turn.
    pub title: Option<&'a dyn Display>,
    pub show_time: bool,
    show_turn: Option<bool>,
    pub indent: u8,
    pub ruler_mark: char,
    pub offset: &'a str,
    pub ruler_repeat: u32,
    pub params: &'a [&'a dyn Display],
}

impl<'a> LogRequest<'a> {
    pub fn new(value: impl Into<Value<'a>>) -> Self {
        Self {
            value: value.into(),
            title: Some(&""),
            show_time: true,
            show_turn: None,
            indent: 0,
            ruler_mark: DEFAULT_RULER_MARK,
            offset: "",
            ruler_repeat: DEFAULT_RULER_REPEAT,
            params: &[],
        }
    }

    pub fn title(mut self, title: &'a dyn Display) -> Self {
        self.title = Some(title);
        self
    }

    pub fn untitled(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    pub fn turn(mut self, show: bool) -> Self {
        self.show_turn = Some(show);
        self
    }

    pub fn indent(mut self, level: u8) -> Self {
        self.indent = level;
        self
    }

    pub fn ruler(mut self, mark: char, repeat: u32) -> Self {
        self.ruler_mark = mark;
        self.ruler_repeat = repeat;
        self
    }

    pub fn offset(mut self, offset: &'a str) -> Self {
        self.offset = offset;
        self
    }

    pub fn params(mut self, params: &'a [&'a dyn Display]) -> Self {
        self.params = params;
        self
    }

    pub fn show_turn(&self) -> bool {
        self.show_turn.unwrap_or(self.show_time)
    }

    /// True unless both the value and the title are absent.
    pub fn has_subject(&self) -> bool {
        !self.value.is_null() || self.title.is_some()
    }
}
