//! Best-effort "did the calling thread change?" indicator.
//!
//! The marker keeps only the identity of the last thread it saw. Reads and
//! writes are plain relaxed atomics with no compare-and-swap: two threads
//! racing through `observe` can both report `Changed` or both `Same`. That
//! costs one wrong glyph, never a blocked log call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

static NEXT_THREAD_KEY: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_KEY: u64 = NEXT_THREAD_KEY.fetch_add(1, Ordering::Relaxed);
}

static SHARED: LazyLock<Arc<ThreadMarker>> = LazyLock::new(|| Arc::new(ThreadMarker::new()));

/// Process-unique identity of a calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreadKey(u64);

impl ThreadKey {
    pub fn current() -> Self {
        ThreadKey(THREAD_KEY.with(|key| *key))
    }

    /// A synthetic identity, e.g. for driving the marker from tests.
    pub fn from_raw(raw: u64) -> Self {
        ThreadKey(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuity {
    Same,
    Changed,
}

#[derive(Debug)]
pub struct ThreadMarker {
    last_seen: AtomicU64,
}

impl ThreadMarker {
    /// A marker that has already seen the creating thread.
    pub fn new() -> Self {
        Self::starting_at(ThreadKey::current())
    }

    pub fn starting_at(key: ThreadKey) -> Self {
        Self {
            last_seen: AtomicU64::new(key.0),
        }
    }

    /// The marker every logger shares unless given its own.
    pub fn shared() -> Arc<ThreadMarker> {
        Arc::clone(&*SHARED)
    }

    /// Compare `key` with the last seen thread and remember it.
    pub fn observe(&self, key: ThreadKey) -> Continuity {
        if self.last_seen.load(Ordering::Relaxed) == key.0 {
            return Continuity::Same;
        }
        self.last_seen.store(key.0, Ordering::Relaxed);
        Continuity::Changed
    }

    pub fn observe_current(&self) -> Continuity {
        self.observe(ThreadKey::current())
    }
}

impl Default for ThreadMarker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn alternates_on_thread_change() {
        let first = ThreadKey::from_raw(100);
        let second = ThreadKey::from_raw(200);
        let marker = ThreadMarker::starting_at(first);

        assert_eq!(marker.observe(first), Continuity::Same);
        assert_eq!(marker.observe(first), Continuity::Same);
        assert_eq!(marker.observe(second), Continuity::Changed);
        assert_eq!(marker.observe(second), Continuity::Same);
        assert_eq!(marker.observe(first), Continuity::Changed);
    }

    #[test]
    fn creating_thread_is_already_seen() {
        let marker = ThreadMarker::new();
        assert_eq!(marker.observe_current(), Continuity::Same);
    }

    #[test]
    fn other_threads_have_distinct_keys() {
        let here = ThreadKey::current();
        let there = thread::spawn(ThreadKey::current).join().expect("join");
        assert_ne!(here, there);
        assert_eq!(here, ThreadKey::current());
    }

    #[test]
    fn spawned_thread_reads_as_changed() {
        let marker = Arc::new(ThreadMarker::new());
        let remote = Arc::clone(&marker);
        let seen = thread::spawn(move || remote.observe_current())
            .join()
            .expect("join");
        assert_eq!(seen, Continuity::Changed);
        assert_eq!(marker.observe_current(), Continuity::Changed);
    }
}
