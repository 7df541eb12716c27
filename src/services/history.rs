//! Search history service
//!
//! Tracks the usernames that have been looked up, most-recent first, as an
//! ordered, de-duplicated, size-bounded list. The list is an explicit
//! owned instance held by whoever issues lookups; it lives in memory only
//! and is gone when the process ends.

use crate::types::Username;

/// Bounded most-recently-used list of searched usernames
///
/// Invariants: length never exceeds the capacity, no username appears
/// twice, and the most recently recorded username sits at index 0.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: Vec<Username>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchHistory {
    /// Number of usernames kept by [`SearchHistory::new`]
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Create an empty history with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty history bounded to `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record a lookup for `username`.
    ///
    /// An existing occurrence moves to the front instead of duplicating;
    /// past the capacity the oldest entry is evicted. Any string is
    /// accepted, including empty or previously removed values.
    pub fn record(&mut self, username: Username) {
        if let Some(position) = self.entries.iter().position(|entry| entry == &username) {
            self.entries.remove(position);
        }

        self.entries.insert(0, username);
        self.entries.truncate(self.capacity);
    }

    /// Remove `username` from the history.
    ///
    /// Removing a username that is not present leaves the history
    /// unchanged; it never errors.
    pub fn forget(&mut self, username: &Username) {
        if let Some(position) = self.entries.iter().position(|entry| entry == username) {
            self.entries.remove(position);
        }
    }

    /// The recorded usernames, most-recent first
    pub fn entries(&self) -> &[Username] {
        &self.entries
    }

    pub fn contains(&self, username: &Username) -> bool {
        self.entries.iter().any(|entry| entry == username)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
