//! Min-priority frontier keyed by accumulated cost.
//!
//! Entries are popped in non-decreasing cost order. Ties are broken by
//! insertion order (FIFO), which only decides which of several equal-cost
//! paths is discovered first.

use std::collections::BinaryHeap;

/// An entry in the frontier heap.
#[derive(Debug)]
struct Entry<T, C> {
    item: T,
    cost: C,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T, C: Ord> PartialEq for Entry<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<T, C: Ord> Eq for Entry<T, C> {}

impl<T, C: Ord> PartialOrd for Entry<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, C: Ord> Ord for Entry<T, C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost, then oldest.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority structure handing out items cheapest-first.
///
/// The search driver stores arena indices in it, but any item type works.
#[derive(Debug)]
pub struct Frontier<T, C> {
    heap: BinaryHeap<Entry<T, C>>,
    seq: u64,
    high_water: usize,
}

impl<T, C: Ord> Frontier<T, C> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
            high_water: 0,
        }
    }

    /// Insert `item` at `cost`. O(log n).
    pub fn push(&mut self, item: T, cost: C) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { item, cost, seq });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return the cheapest item with its cost, or `None` if empty.
    pub fn pop_min(&mut self) -> Option<(T, C)> {
        self.heap.pop().map(|e| (e.item, e.cost))
    }

    /// Cost of the cheapest item without removing it.
    pub fn peek_cost(&self) -> Option<&C> {
        self.heap.peek().map(|e| &e.cost)
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size reached since creation or the last [`clear`](Self::clear).
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Drop all items, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
        self.high_water = 0;
    }
}

impl<T, C: Ord> Default for Frontier<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
