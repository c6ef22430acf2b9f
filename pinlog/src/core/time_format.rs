//! Elapsed-time display for the `[Time: ...]` box.
//!
//! The input is either a raw millisecond count or a value some upstream hook
//! already formatted. Which one it is gets guessed from the length and the
//! fifth-from-last character; the guess is kept exactly as is, including the
//! inputs it gets wrong.

const MILLIS_IN_SECOND: u64 = 1_000;
const MILLIS_IN_MINUTE: u64 = 60_000;
const MILLIS_IN_HOUR: u64 = 3_600_000;

/// Format a millisecond string as `[H:]M:SS.mmm`.
///
/// - fewer than 4 chars: unchanged
/// - 4 chars, or fifth-from-last char `<= '5'`: a dot is inserted before the
///   last three chars (`"1234"` -> `"1.234"`)
/// - 5-6 chars, or digits only: decomposed into hours, minutes, seconds and
///   millis (`"65000"` -> `"1:05.0"`)
/// - anything else is passed through
pub fn format_time(time: &str) -> String {
    let chars: Vec<char> = time.chars().collect();
    let len = chars.len();
    if len < 4 {
        return time.to_string();
    }
    if len < 5 || chars[len - 5] <= '5' {
        return split_millis(&chars);
    }
    // Fifth-from-last is past '5' from here on.
    if len < 7 || is_digits_only(time) {
        return clock(time).unwrap_or_else(|| time.to_string());
    }
    time.to_string()
}

fn split_millis(chars: &[char]) -> String {
    let cut = chars.len() - 3;
    let whole: String = chars[..cut].iter().collect();
    let millis: String = chars[cut..].iter().collect();
    format!("{whole}.{millis}")
}

fn clock(time: &str) -> Option<String> {
    let mut rest: u64 = time.parse().ok()?;
    let hours = if rest >= MILLIS_IN_HOUR {
        rest / MILLIS_IN_HOUR
    } else {
        0
    };
    rest -= hours * MILLIS_IN_HOUR;
    let minutes = rest / MILLIS_IN_MINUTE;
    rest -= minutes * MILLIS_IN_MINUTE;
    let seconds = rest / MILLIS_IN_SECOND;
    rest -= seconds * MILLIS_IN_SECOND;

    let mut out = String::new();
    if hours != 0 {
        out.push_str(&format!("{hours}:"));
    }
    out.push_str(&format!("{minutes}:"));
    if seconds < 10 {
        out.push('0');
    }
    out.push_str(&format!("{seconds}.{rest}"));
    Some(out)
}

fn is_digits_only(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}
