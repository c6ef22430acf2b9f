//! Pin plus indented body: the full text of one log line.

use crate::core::draw::draw;
use crate::core::indent::{indent, reindent};
use crate::core::pin::{Reading, pin};
use crate::core::primitives::ONE_SPACE;
use crate::core::request::LogRequest;
use crate::core::style::Style;
use crate::core::thread_marker::ThreadMarker;
use crate::core::title::{TitleClass, classify};

/// Lazily produces the raw text of a `[Time: ...]` or `[Turn: ...]` box.
pub type Supplier<'s> = &'s dyn Fn() -> String;

/// Build the text for `request`. Pure apart from the thread marker.
///
/// Suppliers run only when their flag is set. A flag with no supplier reads
/// as `Reading::Missing`, which the default style leaves out.
pub fn compose(
    request: &LogRequest<'_>,
    style: &Style,
    marker: &ThreadMarker,
    timer: Option<Supplier<'_>>,
    turner: Option<Supplier<'_>>,
) -> String {
    let text = draw(request.value, request.params);

    let (head, class) = match request.title {
        Some(title) => {
            let title = title.to_string();
            let time = resolve(request.show_time, timer);
            let turn = resolve(request.show_turn(), turner);
            (
                pin(&title, reading(&time), reading(&turn), style, marker),
                classify(&title, style),
            )
        }
        None => (String::new(), TitleClass::Short),
    };

    let body = if class.is_detached() {
        reindent(&text, request.indent)
    } else {
        let prefix = indent(
            request.indent,
            request.ruler_mark,
            request.offset,
            request.ruler_repeat,
            style,
        );
        format!("{prefix}{text}")
    };

    if head.is_empty() || head.ends_with('\n') {
        format!("{head}{body}")
    } else {
        format!("{head}{ONE_SPACE}{body}")
    }
}

/// `None` when the box is off, `Some(None)` when it has no supplier.
fn resolve(show: bool, supplier: Option<Supplier<'_>>) -> Option<Option<String>> {
    show.then(|| supplier.map(|supply| supply()))
}

fn reading(slot: &Option<Option<String>>) -> Reading<'_> {
    match slot {
        None => Reading::Off,
        Some(None) => Reading::Missing,
        Some(Some(text)) => Reading::Text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::primitives::Visibility;
    use crate::core::thread_marker::ThreadKey;
    use std::cell::Cell;

    fn marker_here() -> ThreadMarker {
        ThreadMarker::starting_at(ThreadKey::current())
    }

    #[test]
    fn empty_title_without_flags_is_just_the_body() {
        let style = Style::default();
        let marker = marker_here();
        for level in [0u8, 3, 8, 12] {
            let request = LogRequest::new(&"body").time(false).indent(level).offset("> ");
            let expected = format!("{}body", indent(level, '|', "> ", 4, &style));
            assert_eq!(compose(&request, &style, &marker, None, None), expected);
        }
    }

    #[test]
    fn short_title_shares_the_line() {
        let style = Style::default();
        let marker = marker_here();
        let timer = || "1500".to_string();
        let turner = || "4".to_string();
        let request = LogRequest::new(&"ready").title(&"boot");
        assert_eq!(
            compose(&request, &style, &marker, Some(&timer), Some(&turner)),
            "-- boot [Time: 1.500] [Turn: 4] ready"
        );
    }

    #[test]
    fn suppliers_run_only_when_flagged() {
        let style = Style::default();
        let marker = marker_here();
        let calls = Cell::new(0);
        let timer = || {
            calls.set(calls.get() + 1);
            "1500".to_string()
        };
        let request = LogRequest::new(&"x").title(&"t").time(false).turn(true);
        let text = compose(&request, &style, &marker, Some(&timer), None);
        assert_eq!(calls.get(), 0);
        assert_eq!(text, "-- t x");
    }

    #[test]
    fn long_title_reindents_continuation_lines() {
        let style = Style::default();
        let marker = marker_here();
        let request = LogRequest::new(&"first\nsecond")
            .title(&"a rather long title")
            .time(false)
            .indent(2);
        assert_eq!(
            compose(&request, &style, &marker, None, None),
            "---------------- a rather long title ---------------- \nfirst\n  second"
        );
    }

    #[test]
    fn ruler_follows_short_pin() {
        let style = Style::default();
        let marker = marker_here();
        let request = LogRequest::new(&42).title(&"n").time(false).indent(8);
        assert_eq!(
            compose(&request, &style, &marker, None, None),
            "-- n    |   |42"
        );
    }

    #[test]
    fn missing_title_skips_the_pin() {
        let style = Style::default();
        let marker = marker_here();
        let timer = || "1500".to_string();
        let request = LogRequest::new(&"solo").untitled().indent(2);
        assert_eq!(
            compose(&request, &style, &marker, Some(&timer), None),
            "  solo"
        );
    }

    #[test]
    fn missing_supplier_follows_tick_visibility() {
        let marker = marker_here();
        let request = LogRequest::new(&"x").title(&"t");
        let hidden = Style::default();
        assert_eq!(compose(&request, &hidden, &marker, None, None), "-- t x");

        let shown = Style {
            tick_visibility: Visibility {
                show_null: true,
                ..Visibility::default()
            },
            ..Style::default()
        };
        assert_eq!(
            compose(&request, &shown, &marker, None, None),
            "-- t [Time: null] [Turn: null] x"
        );
        let untimed = request.time(false);
        assert_eq!(compose(&untimed, &shown, &marker, None, None), "-- t x");
    }
}
