//! Ready-made timer and turner suppliers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Milliseconds elapsed since the stopwatch started, as plain digits.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed_millis(&self) -> String {
        self.started.elapsed().as_millis().to_string()
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

/// Call sequence numbers starting at 1. Every read advances the count.
#[derive(Debug)]
pub struct TurnCounter {
    next: AtomicU64,
}

impl TurnCounter {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn next_turn(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

impl Default for TurnCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwatch_reports_digits() {
        let watch = Stopwatch::start();
        let elapsed = watch.elapsed_millis();
        assert!(!elapsed.is_empty());
        assert!(elapsed.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn turns_count_up_from_one() {
        let counter = TurnCounter::new();
        assert_eq!(counter.next_turn(), "1");
        assert_eq!(counter.next_turn(), "2");
        assert_eq!(counter.next_turn(), "3");
    }
}
