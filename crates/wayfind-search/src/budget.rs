//! Expansion cap imposed from outside the engine.

use std::cell::Cell;

use crate::traits::SearchSpace;

/// Wraps a [`SearchSpace`] and stops producing neighbours after a fixed
/// number of expansions.
///
/// A capped query fails with [`SearchError::NoPath`](crate::SearchError::NoPath)
/// once the frontier drains; check [`exhausted`](Self::exhausted) to tell a
/// hit cap apart from a genuinely unreachable target.
pub struct Budget<S> {
    inner: S,
    limit: usize,
    used: Cell<usize>,
    exhausted: Cell<bool>,
}

impl<S: SearchSpace> Budget<S> {
    pub fn new(inner: S, limit: usize) -> Self {
        Self {
            inner,
            limit,
            used: Cell::new(0),
            exhausted: Cell::new(false),
        }
    }

    /// Whether any expansion was refused.
    pub fn exhausted(&self) -> bool {
        self.exhausted.get()
    }

    /// Expansions granted so far.
    pub fn used(&self) -> usize {
        self.used.get()
    }

    /// Grant a fresh allowance for the next query.
    pub fn reset(&self) {
        self.used.set(0);
        self.exhausted.set(false);
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: SearchSpace> SearchSpace for Budget<S> {
    type Node = S::Node;
    type Cost = S::Cost;

    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>) {
        if self.used.get() >= self.limit {
            self.exhausted.set(true);
            return;
        }
        self.used.set(self.used.get() + 1);
        self.inner.neighbors(node, buf);
    }

    fn cost(&self, from: &Self::Node, to: &Self::Node) -> Self::Cost {
        self.inner.cost(from, to)
    }
}
