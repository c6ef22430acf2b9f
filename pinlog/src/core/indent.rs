//! Body indentation: flat spaces, a periodic ruler, or continuation-only.

use crate::core::primitives::spaces;
use crate::core::style::Style;

/// Leading prefix for a body at `level`.
///
/// Levels below the implicit threshold are plain spaces. Deeper levels get
/// `offset` plus a ruler with `mark` on every `repeat`-th column.
pub fn indent(level: u8, mark: char, offset: &str, repeat: u32, style: &Style) -> String {
    if level < style.implicit_indent_threshold {
        return spaces(usize::from(level));
    }
    format!("{offset}{}", ruler_tab(level, mark, repeat))
}

/// Columns `1..=level`: `mark` where the column is a multiple of `repeat`,
/// a space elsewhere. A zero `repeat` draws no marks.
pub fn ruler_tab(level: u8, mark: char, repeat: u32) -> String {
    (1..=u32::from(level))
        .map(|column| {
            if repeat != 0 && column % repeat == 0 {
                mark
            } else {
                ' '
            }
        })
        .collect()
}

/// Re-align continuation lines under a detached (long or very long) pin.
pub fn reindent(body: &str, level: u8) -> String {
    if level == 0 {
        return body.to_string();
    }
    body.replace('\n', &format!("\n{}", spaces(usize::from(level))))
}
