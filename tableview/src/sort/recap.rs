//! One-shot re-entrancy token for re-applying a sort after data changes.
//!
//! Re-applying the active sort permutes the rows, which itself raises the
//! "data changed" notification that triggered the recap. The guard is armed
//! after that permutation and swallows exactly one notification.

/// Pending-recap token.
#[derive(Debug, Default)]
pub struct RecapGuard {
    armed: bool,
}

impl RecapGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect one re-entrant notification.
    pub fn arm(&mut self) {
        debug_assert!(!self.armed, "recap guard armed twice");
        self.armed = true;
    }

    /// Consume the token if armed. Returns `true` when the current
    /// notification is the re-entrant one and must be ignored.
    pub fn swallow(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
