//! Search results and their assembly from the entry arena.

/// Sentinel parent index for the start entry.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// One pushed frontier entry. Immutable once created; paths are recovered
/// by following `parent` links back to the start.
#[derive(Debug, Clone)]
pub(crate) struct Record<N, C> {
    pub(crate) node: N,
    pub(crate) cost: C,
    pub(crate) parent: usize,
}

/// Counters describing how much work one query did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Entries removed from the frontier.
    pub pops: usize,
    /// Entries whose neighbours were generated.
    pub expansions: usize,
    /// Entries pushed, including the start entry.
    pub pushes: usize,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
}

/// Outcome of a successful search.
///
/// Every path runs from `start` to a node satisfying the target predicate,
/// inclusive of both ends, and costs exactly `total_cost`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<N, C> {
    pub start: N,
    /// Endpoint of the first path found. In all-paths mode with a predicate
    /// matching several nodes, other paths may end elsewhere.
    pub target: N,
    /// One path in single-path mode; every tied path in all-paths mode, in
    /// discovery order.
    pub paths: Vec<Vec<N>>,
    pub total_cost: C,
    pub stats: SearchStats,
}

impl<N, C> SearchResult<N, C> {
    /// The first path found.
    pub fn path(&self) -> &[N] {
        self.paths.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of edges on the first path.
    pub fn steps(&self) -> usize {
        self.path().len().saturating_sub(1)
    }

    pub fn into_paths(self) -> Vec<Vec<N>> {
        self.paths
    }
}

/// Rebuild the path ending at entry `idx`.
pub(crate) fn trace_path<N: Clone, C>(records: &[Record<N, C>], idx: usize) -> Vec<N> {
    let mut path = Vec::new();
    let mut ci = idx;
    while ci != NO_PARENT {
        path.push(records[ci].node.clone());
        ci = records[ci].parent;
    }
    path.reverse();
    path
}

/// Assemble the final result from the target entries the driver collected.
///
/// Returns `None` when `hits` is empty.
pub(crate) fn assemble<N: Clone, C: Copy>(
    records: &[Record<N, C>],
    hits: &[usize],
    stats: SearchStats,
) -> Option<SearchResult<N, C>> {
    let &first = hits.first()?;
    let start = records.first()?.node.clone();
    Some(SearchResult {
        start,
        target: records[first].node.clone(),
        paths: hits.iter().map(|&i| trace_path(records, i)).collect(),
        total_cost: records[first].cost,
        stats,
    })
}
