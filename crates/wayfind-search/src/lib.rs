//! Generic weighted shortest-path search.
//!
//! One Dijkstra-style engine serves any state space: grid positions, a
//! position plus heading and run length, whole multi-agent configurations.
//! The caller supplies a start node, a target predicate and a
//! [`SearchSpace`] (neighbour and edge-cost functions). The engine returns
//! one minimal-cost path, or every path tied at the minimal cost.
//!
//! - [`search`], [`shortest_path`], [`all_shortest_paths`]: one-off queries
//! - [`Searcher`]: reusable engine that keeps its allocations between queries
//! - [`from_fn`]: build a space from closures
//! - [`GridSpace`]: 4-/8-connected grid over [`wayfind_core::Point`]
//! - [`Memoized`], [`Budget`]: caller-owned neighbour cache and expansion cap
//!
//! # Example
//!
//! ```
//! use wayfind_search::{from_fn, shortest_path};
//!
//! // Reach 10 from 1 using +1 and *2 steps.
//! let space = from_fn(|n: &u32| vec![n + 1, n * 2]);
//! let res = shortest_path(&space, 1, |n| *n == 10).unwrap();
//! assert_eq!(res.total_cost, 4);
//! assert_eq!(res.path(), &[1, 2, 4, 5, 10]);
//! ```

mod bfs;
mod budget;
mod cost;
mod distance;
mod error;
mod frontier;
mod grid;
mod ledger;
mod memo;
mod options;
mod result;
mod search;
mod traits;

pub use bfs::bfs_distance;
pub use budget::Budget;
pub use cost::Cost;
pub use distance::{chebyshev, manhattan};
pub use error::SearchError;
pub use frontier::Frontier;
pub use grid::{GridSpace, parse_grid};
pub use ledger::Ledger;
pub use memo::{Memo, Memoized};
pub use options::{SearchMode, SearchOptions};
pub use result::{SearchResult, SearchStats};
pub use search::{Searcher, all_shortest_paths, search, shortest_path};
pub use traits::{FnSpace, SearchSpace, from_fn};
