//! Thread context (C4)
//!
//! An open operation owns a small value carrying the probe key, the
//! per-level retry counters, and a scratchpad for the level currently being
//! linked. Its lifetime is the operation: it lives on the caller's stack and
//! is never shared across operations or threads.

use crate::keys::KeyAdapter;

/// Per-operation search state
pub(crate) struct ThreadContext<K: KeyAdapter> {
    key: K,
    retries: u32,
    level_cursor: u32,
}

impl<K: KeyAdapter> ThreadContext<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            retries: 0,
            level_cursor: 0,
        }
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn level_cursor(&self) -> u32 {
        self.level_cursor
    }

    pub(crate) fn set_level_cursor(&mut self, level: u32) {
        self.level_cursor = level;
    }

    /// Records one CAS retry at the current level cursor, returning whether
    /// the budget for this level is still available.
    pub(crate) fn record_retry(&mut self, budget: u32) -> bool {
        self.retries += 1;
        self.retries <= budget
    }

    /// Resets the retry counter when moving on to a new level
    pub(crate) fn reset_retries(&mut self) {
        self.retries = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Generic;

    #[test]
    fn retry_budget_is_exhausted_after_budget_attempts() {
        let mut ctx = ThreadContext::new(Generic::<8>::new(b"k"));
        for _ in 0..3 {
            assert!(ctx.record_retry(3));
        }
        assert!(!ctx.record_retry(3));
    }

    #[test]
    fn level_cursor_round_trips() {
        let mut ctx = ThreadContext::new(Generic::<8>::new(b"k"));
        ctx.set_level_cursor(4);
        assert_eq!(ctx.level_cursor(), 4);
    }
}
