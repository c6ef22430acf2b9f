//! The leading annotation of a log line: title plus time and turn boxes.

use crate::core::primitives::{ONE_SPACE, put, space_after, wrap};
use crate::core::style::Style;
use crate::core::thread_marker::{Continuity, ThreadMarker};
use crate::core::title::{TitleClass, classify};

/// What one tick box has to show for the current call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading<'a> {
    /// The box was not asked for.
    Off,
    /// The box was asked for but the logger has no supplier for it.
    Missing,
    /// Raw supplier output.
    Text(&'a str),
}

/// Render the pin for `title`.
///
/// - very long titles: `-->> title`, then the tick on its own line
/// - long titles: `---- title ---- tick`, then a line break
/// - short titles: `glyph title tick` on the body's line, where the glyph
///   tells whether the calling thread changed since the previous pin
///
/// A short pin with nothing to show is empty and leaves `marker` untouched.
pub fn pin(
    title: &str,
    time: Reading<'_>,
    turn: Reading<'_>,
    style: &Style,
    marker: &ThreadMarker,
) -> String {
    let tick = tick(time, turn, style);
    match classify(title, style) {
        TitleClass::VeryLong => format!(
            "{}{title}\n{tick}\n",
            space_after(&style.very_long_pin_mark)
        ),
        TitleClass::Long => format!(
            "{}{ONE_SPACE}{tick}\n",
            wrap(title, &style.long_pin_mark, ONE_SPACE)
        ),
        TitleClass::Short => {
            if title.is_empty() && tick.is_empty() {
                return String::new();
            }
            let glyph = thread_glyph(marker.observe_current(), style);
            join_present(&[glyph, title, tick.as_str()])
        }
    }
}

/// `[Time: t] [Turn: n]`.
///
/// `Off` readings never produce a box; the others go through
/// `style.tick_visibility`, which by default drops missing and empty values.
pub fn tick(time: Reading<'_>, turn: Reading<'_>, style: &Style) -> String {
    let formatted;
    let time = match time {
        Reading::Text(raw) => {
            formatted = style.time_style.apply(raw);
            Reading::Text(&formatted)
        }
        other => other,
    };
    let time_box = segment(&style.time_tag, time, style);
    let turn_box = segment(&style.turn_tag, turn, style);
    join_present(&[time_box.as_str(), turn_box.as_str()])
}

pub fn thread_glyph(continuity: Continuity, style: &Style) -> &str {
    match continuity {
        Continuity::Same => &style.same_thread_mark,
        Continuity::Changed => &style.changed_thread_mark,
    }
}

fn segment(tag: &str, reading: Reading<'_>, style: &Style) -> String {
    let text = match reading {
        Reading::Off => return String::new(),
        Reading::Missing => None,
        Reading::Text(text) => Some(text),
    };
    put(tag, text, style.tick_visibility, style.wrap_marks, style.separator)
}

fn join_present(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(ONE_SPACE)
}
