use std::fmt;

/// Outcome of a line-range deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSummary {
    /// Number of lines removed
    pub removed: usize,

    /// Line count before the edit
    pub original: usize,

    /// Line count after the edit
    pub remaining: usize,
}

impl EditSummary {
    pub fn new(original: usize, remaining: usize) -> Self {
        Self { removed: original.saturating_sub(remaining), original, remaining }
    }
}

impl fmt::Display for EditSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Removed {} lines => {} -> {} lines",
            self.removed, self.original, self.remaining
        )
    }
}
