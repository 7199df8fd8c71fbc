//! Session-scoped deletion state
//!
//! The one piece of simulator state with cross-request lifetime: the set of
//! user ids that have been deleted during the current test case. Membership
//! means every subsequent GET/PATCH/DELETE for that id answers 404 until the
//! harness resets the session.

use std::collections::HashSet;

/// Deleted-id tracking for one simulated session.
///
/// Ids are kept in their raw string form as extracted from the path, so
/// hostile non-numeric ids can be tracked uniformly. The active → deleted
/// transition is one-way; there is no un-delete short of [`reset`].
///
/// [`reset`]: SessionState::reset
#[derive(Debug, Default)]
pub struct SessionState {
    deleted: HashSet<String>,
}

impl SessionState {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an id as deleted. Idempotent; marking twice is a no-op.
    pub fn mark_deleted(&mut self, id: &str) {
        self.deleted.insert(id.to_string());
    }

    /// Check whether an id has been deleted this session.
    pub fn is_deleted(&self, id: &str) -> bool {
        self.deleted.contains(id)
    }

    /// Clear all deletion state.
    ///
    /// Invoked by the test harness before every case, never by request
    /// handlers.
    pub fn reset(&mut self) {
        self.deleted.clear();
    }
}
