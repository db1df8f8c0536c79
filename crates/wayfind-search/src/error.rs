//! Typed search errors.

use std::fmt;

/// Failure of a single search query.
///
/// No partial result accompanies an error: either a complete
/// [`SearchResult`](crate::SearchResult) is returned or one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier emptied before any node satisfying the target predicate
    /// was popped.
    NoPath {
        /// Frontier entries popped before exhaustion.
        pops: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPath { pops } => {
                write!(f, "no path to target: frontier exhausted after {pops} pops")
            }
        }
    }
}

impl std::error::Error for SearchError {}
