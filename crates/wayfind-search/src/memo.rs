//! Caller-owned memoization for expensive neighbour rules.
//!
//! Nothing here is global: a [`Memo`] lives exactly as long as the caller
//! keeps it, and must be cleared explicitly before it is reused for an
//! unrelated state space.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::SearchSpace;

/// A plain key/value cache with hit accounting.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    map: HashMap<K, V>,
    hits: usize,
    misses: usize,
}

impl<K: Eq + Hash, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Store `value`, returning the previous value for `key` if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    /// Return the cached value for `key`, computing and storing it first on
    /// a miss.
    pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        use std::collections::hash_map::Entry;
        match self.map.entry(key) {
            Entry::Occupied(e) => {
                self.hits += 1;
                e.into_mut()
            }
            Entry::Vacant(e) => {
                self.misses += 1;
                let value = compute(e.key());
                e.insert(value)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that had to compute.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.map.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl<K: Eq + Hash, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a [`SearchSpace`] and caches its neighbour lists.
///
/// Useful when the same state is expanded many times, as in all-paths mode
/// or across several queries over one space. Edge costs are not cached.
pub struct Memoized<S: SearchSpace> {
    inner: S,
    memo: RefCell<Memo<S::Node, Vec<S::Node>>>,
}

impl<S: SearchSpace> Memoized<S> {
    pub fn new(inner: S) -> Self {
        Self::with_memo(inner, Memo::new())
    }

    /// Wrap `inner` around an existing cache, e.g. one handed back by
    /// [`into_parts`](Self::into_parts).
    pub fn with_memo(inner: S, memo: Memo<S::Node, Vec<S::Node>>) -> Self {
        Self {
            inner,
            memo: RefCell::new(memo),
        }
    }

    /// Number of cached neighbour lists.
    pub fn cached(&self) -> usize {
        self.memo.borrow().len()
    }

    /// `(hits, misses)` since the last clear.
    pub fn hit_stats(&self) -> (usize, usize) {
        let memo = self.memo.borrow();
        (memo.hits(), memo.misses())
    }

    /// Forget every cached neighbour list.
    pub fn clear(&self) {
        self.memo.borrow_mut().clear();
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_parts(self) -> (S, Memo<S::Node, Vec<S::Node>>) {
        (self.inner, self.memo.into_inner())
    }
}

impl<S: SearchSpace> SearchSpace for Memoized<S> {
    type Node = S::Node;
    type Cost = S::Cost;

    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>) {
        let mut memo = self.memo.borrow_mut();
        let cached = memo.get_or_insert_with(node.clone(), |n| {
            let mut out = Vec::new();
            self.inner.neighbors(n, &mut out);
            out
        });
        buf.extend(cached.iter().cloned());
    }

    fn cost(&self, from: &Self::Node, to: &Self::Node) -> Self::Cost {
        self.inner.cost(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::from_fn;
    use std::cell::Cell;

    #[test]
    fn get_or_insert_counts_hits_and_misses() {
        let mut memo: Memo<u32, u32> = Memo::new();
        assert_eq!(*memo.get_or_insert_with(3, |k| k * 2), 6);
        assert_eq!(*memo.get_or_insert_with(3, |_| unreachable!()), 6);
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 1);
        assert_eq!(memo.insert(3, 7), Some(6));
        assert_eq!(memo.get(&3), Some(&7));

        memo.clear();
        assert!(memo.is_empty());
        assert_eq!(memo.hits(), 0);
    }

    #[test]
    fn memoized_space_calls_inner_once_per_node() {
        let calls = Cell::new(0usize);
        let space = Memoized::new(from_fn(|n: &u32| {
            calls.set(calls.get() + 1);
            vec![n + 1, n * 2]
        }));

        let mut buf = Vec::new();
        space.neighbors(&5, &mut buf);
        buf.clear();
        space.neighbors(&5, &mut buf);
        assert_eq!(buf, vec![6, 10]);
        assert_eq!(calls.get(), 1);
        assert_eq!(space.hit_stats(), (1, 1));

        space.clear();
        assert_eq!(space.cached(), 0);
        buf.clear();
        space.neighbors(&5, &mut buf);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn memoized_grid_gives_same_tied_paths() {
        use crate::grid::GridSpace;
        use crate::search::all_shortest_paths;
        use std::collections::HashSet;
        use wayfind_core::{Point, Range};

        let wall = Point::new(2, 1);
        let grid = GridSpace::new(Range::sized(4, 4), move |p| p != wall);
        let goal = Point::new(3, 3);
        let plain = all_shortest_paths(&grid, Point::ZERO, |p| *p == goal).unwrap();

        let cached = Memoized::new(grid);
        let wrapped = all_shortest_paths(&cached, Point::ZERO, |p| *p == goal).unwrap();
        assert_eq!(wrapped.total_cost, plain.total_cost);
        let a: HashSet<_> = plain.paths.into_iter().collect();
        let b: HashSet<_> = wrapped.paths.into_iter().collect();
        assert_eq!(a, b);

        // Tied entries reach the same node more than once.
        let (hits, misses) = cached.hit_stats();
        assert!(hits > 0);
        assert_eq!(misses, cached.cached());
    }

    #[test]
    fn memo_survives_into_parts() {
        let space = Memoized::new(from_fn(|n: &u8| vec![n.wrapping_add(1)]));
        let mut buf = Vec::new();
        space.neighbors(&1, &mut buf);
        let (inner, memo) = space.into_parts();
        assert_eq!(memo.len(), 1);
        let again = Memoized::with_memo(inner, memo);
        assert_eq!(again.cached(), 1);
    }
}
