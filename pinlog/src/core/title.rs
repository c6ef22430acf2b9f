//! Title length classes.

use crate::core::style::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleClass {
    /// Pin and body share one line.
    Short,
    /// Wrapped pin on its own line.
    Long,
    /// Standalone pin block with the tick on a second line.
    VeryLong,
}

impl TitleClass {
    /// Long and very long titles already separate the pin from the body.
    pub fn is_detached(self) -> bool {
        !matches!(self, TitleClass::Short)
    }
}

pub fn is_long(title: &str, style: &Style) -> bool {
    title.chars().count() >= style.long_title_threshold
}

pub fn is_very_long(title: &str, style: &Style) -> bool {
    title.chars().count() >= style.very_long_title_threshold
}

/// Classify `title` against the style thresholds, longest class first.
pub fn classify(title: &str, style: &Style) -> TitleClass {
    if is_very_long(title, style) {
        TitleClass::VeryLong
    } else if is_long(title, style) {
        TitleClass::Long
    } else {
        TitleClass::Short
    }
}
