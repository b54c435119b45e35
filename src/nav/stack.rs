//! The navigation history stack.
//!
//! An ordered sequence of [`Screen`] descriptors, most-recent-first: push
//! adds to the front, pop removes from the front. The stack's top (if any)
//! always corresponds to the currently visible non-root surface; an empty
//! stack means the root search surface is visible.

use std::collections::VecDeque;

use crate::domain::screen::Screen;

/// Back stack of visited screens, most-recent-first.
///
/// No size limit is enforced; history is bounded only by memory and the
/// persisted payload size. Popping an empty stack returns `None` and is not
/// an error; callers are expected to check emptiness, not handle failures.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    entries: VecDeque<Screen>,
}

impl HistoryStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an entry, making it the new top.
    pub fn push(&mut self, screen: Screen) {
        self.entries.push_front(screen);
    }

    /// Removes and returns the top entry, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<Screen> {
        self.entries.pop_front()
    }

    /// Returns the top entry without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Screen> {
        self.entries.front()
    }

    /// Empties the stack. Used on reset-to-root.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replaces the entire stack with `entries`, preserving their order
    /// exactly: the first element becomes the current top.
    ///
    /// Used only when restoring persisted state.
    pub fn replace_all(&mut self, entries: Vec<Screen>) {
        self.entries = entries.into();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries from top (most recent) to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Screen> {
        self.entries.iter()
    }
}
