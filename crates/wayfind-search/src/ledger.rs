//! Best-cost ledger: lowest accumulated cost at which each node was admitted
//! for expansion.

use std::collections::HashMap;
use std::hash::Hash;

use crate::options::SearchMode;

/// Per-query map from node to its best admitted cost.
///
/// Recorded values never increase. One ledger belongs to one search; the
/// [`Searcher`](crate::Searcher) clears it before every query.
#[derive(Debug, Clone)]
pub struct Ledger<N, C> {
    best: HashMap<N, C>,
}

impl<N: Eq + Hash + Clone, C: Copy + Ord> Ledger<N, C> {
    pub fn new() -> Self {
        Self {
            best: HashMap::new(),
        }
    }

    /// Admit `node` at `cost` if it improves on the recorded value.
    ///
    /// Unseen nodes are always admitted. A seen node is admitted when `cost`
    /// is strictly lower, or, in all-paths mode, equal to the recorded value.
    /// Returns whether the node was admitted.
    pub fn record_if_better(&mut self, node: &N, cost: C, mode: SearchMode) -> bool {
        match self.best.get_mut(node) {
            Some(best) => {
                let admit = cost < *best || (mode.admits_ties() && cost == *best);
                if admit {
                    *best = cost;
                }
                admit
            }
            None => {
                self.best.insert(node.clone(), cost);
                true
            }
        }
    }

    /// Best recorded cost for `node`, `None` if unseen.
    #[inline]
    pub fn get(&self, node: &N) -> Option<C> {
        self.best.get(node).copied()
    }

    /// Number of nodes recorded.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Forget every node, keeping the allocation.
    pub fn clear(&mut self) {
        self.best.clear();
    }
}

impl<N: Eq + Hash + Clone, C: Copy + Ord> Default for Ledger<N, C> {
    fn default() -> Self {
        Self::new()
    }
}
