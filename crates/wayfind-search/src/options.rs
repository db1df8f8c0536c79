use std::fmt;

use crate::cost::Cost;

/// Which minimal-cost paths a search returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// Stop at the first target popped and return exactly one path.
    #[default]
    Single,
    /// Return every path tied at the minimal target cost.
    AllPaths,
}

impl SearchMode {
    /// Whether re-reaching a node at its recorded best cost admits another
    /// expansion. Only all-paths mode needs tied expansions.
    #[inline]
    pub fn admits_ties(self) -> bool {
        matches!(self, Self::AllPaths)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::AllPaths => f.write_str("all-paths"),
        }
    }
}

/// Per-query search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions<C> {
    /// Accumulated cost assigned to the start node.
    pub start_cost: C,
    pub mode: SearchMode,
}

impl<C: Cost> SearchOptions<C> {
    /// Single-path mode starting at cost zero.
    pub fn new() -> Self {
        Self {
            start_cost: C::ZERO,
            mode: SearchMode::Single,
        }
    }

    /// All-paths mode starting at cost zero.
    pub fn all_paths() -> Self {
        Self::new().with_mode(SearchMode::AllPaths)
    }

    pub fn with_start_cost(mut self, start_cost: C) -> Self {
        self.start_cost = start_cost;
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }
}

impl<C: Cost> Default for SearchOptions<C> {
    fn default() -> Self {
        Self::new()
    }
}
