//! Small string builders used by every renderer.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub const EQUAL_SIGN: &str = "=";
pub const COLON_SIGN: &str = ":";
pub const QUESTION_SIGN: &str = "?";
pub const ONE_SPACE: &str = " ";

/// `mark` when `happens`, otherwise `skip`.
pub fn pick<'a>(happens: bool, mark: &'a str, skip: &'a str) -> &'a str {
    if happens { mark } else { skip }
}

/// A single space when `happens`, otherwise nothing.
pub fn gap(happens: bool) -> &'static str {
    pick(happens, ONE_SPACE, "")
}

/// `n` spaces.
pub fn spaces(n: usize) -> String {
    repeat("", ONE_SPACE, n)
}

/// `init` followed by `unit` repeated `n` times.
pub fn repeat(init: &str, unit: &str, n: usize) -> String {
    let mut out = String::with_capacity(init.len() + unit.len() * n);
    out.push_str(init);
    for _ in 0..n {
        out.push_str(unit);
    }
    out
}

/// `word` plus a trailing space, unless `word` is empty.
pub fn space_after(word: &str) -> String {
    format!("{word}{}", gap(!word.is_empty()))
}

/// `mark title mark`, padded with `pad` when the mark is non-empty.
pub fn wrap(title: &str, mark: &str, pad: &str) -> String {
    let pad = pick(!mark.is_empty(), pad, "");
    format!("{mark}{pad}{title}{pad}{mark}")
}

/// `[title: text]`, using the given brackets and separator.
///
/// A whitespace separator is not followed by an extra space.
pub fn boxed(title: &str, text: &str, brackets: [char; 2], separator: char) -> String {
    let after_separator = gap(!separator.is_whitespace());
    format!(
        "{open}{title}{separator}{after_separator}{text}{close}",
        open = brackets[0],
        close = brackets[1],
    )
}

/// Which missing or hollow field values still produce a box.
///
/// The default drops `None` and empty values but keeps whitespace-only ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub show_null: bool,
    pub show_empty: bool,
    pub show_blank: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            show_null: false,
            show_empty: false,
            show_blank: true,
        }
    }
}

impl Visibility {
    pub fn admits(self, text: Option<&str>) -> bool {
        match text {
            None => self.show_null,
            Some("") => self.show_empty,
            Some(text) if text.trim().is_empty() => self.show_blank,
            Some(_) => true,
        }
    }
}

/// A `[title: text]` box, or nothing when `visibility` hides the value.
pub fn put(
    title: &str,
    text: Option<&str>,
    visibility: Visibility,
    brackets: [char; 2],
    separator: char,
) -> String {
    if !visibility.admits(text) {
        return String::new();
    }
    boxed(title, text.unwrap_or(NULL_TEXT), brackets, separator)
}

/// Text drawn for an absent value.
pub const NULL_TEXT: &str = "null";

/// `name = value`, or `name: value` when the sign reads as a label.
pub fn variable(name: &str, value: impl Display, pad: usize, sign: &str) -> String {
    let left_align = sign == COLON_SIGN || sign == QUESTION_SIGN || sign == ONE_SPACE;
    let before = if left_align { String::new() } else { spaces(pad) };
    format!("{name}{before}{sign}{}{value}", spaces(pad))
}
