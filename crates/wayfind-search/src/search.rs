//! Search driver: the pop / test / expand loop in both modes.

use std::hash::Hash;

use log::{debug, trace};

use crate::cost::Cost;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::ledger::Ledger;
use crate::options::{SearchMode, SearchOptions};
use crate::result::{self, NO_PARENT, Record, SearchResult, SearchStats};
use crate::traits::SearchSpace;

/// Reusable search engine.
///
/// `Searcher` owns the entry arena, frontier, best-cost ledger and neighbour
/// buffer, and clears all of them at the start of every query. Repeated
/// queries reuse allocations but never observe each other's state.
pub struct Searcher<N, C> {
    records: Vec<Record<N, C>>,
    frontier: Frontier<usize, C>,
    ledger: Ledger<N, C>,
    nbuf: Vec<N>,
    last_stats: SearchStats,
}

impl<N, C> Searcher<N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
{
    /// Create a searcher with empty caches.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            frontier: Frontier::new(),
            ledger: Ledger::new(),
            nbuf: Vec::new(),
            last_stats: SearchStats::default(),
        }
    }

    /// Find minimal-cost path(s) from `start` to any node satisfying
    /// `is_target`.
    ///
    /// In [`SearchMode::Single`] the first target popped is returned with
    /// one path. In [`SearchMode::AllPaths`] every path tied at the minimal
    /// target cost is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoPath`] if the frontier empties before any
    /// target is popped.
    pub fn search<S, F>(
        &mut self,
        space: &S,
        start: N,
        mut is_target: F,
        options: SearchOptions<C>,
    ) -> Result<SearchResult<N, C>, SearchError>
    where
        S: SearchSpace<Node = N, Cost = C> + ?Sized,
        F: FnMut(&N) -> bool,
    {
        self.reset();
        debug!(
            "search start: mode={} start_cost={:?}",
            options.mode, options.start_cost
        );

        let mut stats = SearchStats::default();
        self.push(start, options.start_cost, NO_PARENT, &mut stats);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let hits = match options.mode {
            SearchMode::Single => self.run_single(space, &mut is_target, &mut nbuf, &mut stats),
            SearchMode::AllPaths => self.run_all(space, &mut is_target, &mut nbuf, &mut stats),
        };
        self.nbuf = nbuf;
        stats.frontier_high_water = self.frontier.high_water();
        self.last_stats = stats;

        match result::assemble(&self.records, &hits, stats) {
            Some(res) => {
                debug!(
                    "search found: cost={:?} paths={} pops={} expansions={}",
                    res.total_cost,
                    res.paths.len(),
                    stats.pops,
                    stats.expansions
                );
                Ok(res)
            }
            None => {
                debug!(
                    "search exhausted: pops={} expansions={}",
                    stats.pops, stats.expansions
                );
                Err(SearchError::NoPath { pops: stats.pops })
            }
        }
    }

    /// Work counters of the most recent query, successful or not.
    pub fn stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Best admitted cost per node from the most recent query.
    pub fn ledger(&self) -> &Ledger<N, C> {
        &self.ledger
    }

    fn reset(&mut self) {
        self.records.clear();
        self.frontier.clear();
        self.ledger.clear();
    }

    fn push(&mut self, node: N, cost: C, parent: usize, stats: &mut SearchStats) {
        let idx = self.records.len();
        self.records.push(Record { node, cost, parent });
        self.frontier.push(idx, cost);
        stats.pushes += 1;
    }

    /// Single-path loop. Returns the index of the first target entry popped.
    fn run_single<S, F>(
        &mut self,
        space: &S,
        is_target: &mut F,
        nbuf: &mut Vec<N>,
        stats: &mut SearchStats,
    ) -> Vec<usize>
    where
        S: SearchSpace<Node = N, Cost = C> + ?Sized,
        F: FnMut(&N) -> bool,
    {
        while let Some((ci, cost)) = self.frontier.pop_min() {
            stats.pops += 1;
            trace!("pop cost={:?} frontier={}", cost, self.frontier.len());

            let node = &self.records[ci].node;
            if is_target(node) {
                return vec![ci];
            }
            // Already admitted at a cost no worse than this one.
            if !self.ledger.record_if_better(node, cost, SearchMode::Single) {
                continue;
            }
            self.expand(space, ci, cost, SearchMode::Single, nbuf, stats);
        }
        Vec::new()
    }

    /// All-paths loop. Returns every target entry popped at the minimal
    /// target cost, in pop order.
    fn run_all<S, F>(
        &mut self,
        space: &S,
        is_target: &mut F,
        nbuf: &mut Vec<N>,
        stats: &mut SearchStats,
    ) -> Vec<usize>
    where
        S: SearchSpace<Node = N, Cost = C> + ?Sized,
        F: FnMut(&N) -> bool,
    {
        let mut best: Option<C> = None;
        let mut hits = Vec::new();

        while let Some((ci, cost)) = self.frontier.pop_min() {
            stats.pops += 1;
            trace!("pop cost={:?} frontier={}", cost, self.frontier.len());

            // Pops are non-decreasing: nothing from here on can tie the best
            // target cost.
            if best.is_some_and(|b| cost > b) {
                break;
            }

            let node = &self.records[ci].node;
            if is_target(node) {
                best = Some(cost);
                hits.push(ci);
                continue;
            }
            if !self.ledger.record_if_better(node, cost, SearchMode::AllPaths) {
                continue;
            }
            self.expand(space, ci, cost, SearchMode::AllPaths, nbuf, stats);
        }
        hits
    }

    fn expand<S>(
        &mut self,
        space: &S,
        ci: usize,
        cost: C,
        mode: SearchMode,
        nbuf: &mut Vec<N>,
        stats: &mut SearchStats,
    ) where
        S: SearchSpace<Node = N, Cost = C> + ?Sized,
    {
        stats.expansions += 1;
        nbuf.clear();
        space.neighbors(&self.records[ci].node, nbuf);

        for next in nbuf.drain(..) {
            let edge = space.cost(&self.records[ci].node, &next);
            let tentative = cost + edge;

            if let Some(best) = self.ledger.get(&next) {
                let dominated = if mode.admits_ties() {
                    best < tentative
                } else {
                    best <= tentative
                };
                if dominated {
                    continue;
                }
            }
            // A zero-cost edge back onto this entry's own path would let
            // all-paths mode enumerate cycles forever.
            if mode.admits_ties() && edge == C::ZERO && self.on_path(ci, &next) {
                continue;
            }
            self.push(next, tentative, ci, stats);
        }
    }

    fn on_path(&self, mut ci: usize, node: &N) -> bool {
        while ci != NO_PARENT {
            if self.records[ci].node == *node {
                return true;
            }
            ci = self.records[ci].parent;
        }
        false
    }
}

impl<N, C> Default for Searcher<N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Run one query with a fresh [`Searcher`].
///
/// # Errors
///
/// Returns [`SearchError::NoPath`] if no target is reachable.
pub fn search<S, F>(
    space: &S,
    start: S::Node,
    is_target: F,
    options: SearchOptions<S::Cost>,
) -> Result<SearchResult<S::Node, S::Cost>, SearchError>
where
    S: SearchSpace + ?Sized,
    F: FnMut(&S::Node) -> bool,
{
    Searcher::new().search(space, start, is_target, options)
}

/// Single-path search from cost zero.
///
/// # Errors
///
/// Returns [`SearchError::NoPath`] if no target is reachable.
pub fn shortest_path<S, F>(
    space: &S,
    start: S::Node,
    is_target: F,
) -> Result<SearchResult<S::Node, S::Cost>, SearchError>
where
    S: SearchSpace + ?Sized,
    F: FnMut(&S::Node) -> bool,
{
    search(space, start, is_target, SearchOptions::new())
}

/// All-paths search from cost zero.
///
/// # Errors
///
/// Returns [`SearchError::NoPath`] if no target is reachable.
pub fn all_shortest_paths<S, F>(
    space: &S,
    start: S::Node,
    is_target: F,
) -> Result<SearchResult<S::Node, S::Cost>, SearchError>
where
    S: SearchSpace + ?Sized,
    F: FnMut(&S::Node) -> bool,
{
    search(space, start, is_target, SearchOptions::all_paths())
}
