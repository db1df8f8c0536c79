//! Unweighted breadth-first search.

use std::collections::{HashSet, VecDeque};

use crate::traits::SearchSpace;

/// Breadth-first hop count from `start` to the nearest node satisfying
/// `is_target`, ignoring edge costs.
///
/// Returns `None` if no target is reachable. On unit-cost spaces this equals
/// the total cost of a single-path search.
pub fn bfs_distance<S, F>(space: &S, start: S::Node, mut is_target: F) -> Option<usize>
where
    S: SearchSpace + ?Sized,
    F: FnMut(&S::Node) -> bool,
{
    let mut seen: HashSet<S::Node> = HashSet::new();
    let mut queue: VecDeque<(S::Node, usize)> = VecDeque::new();
    let mut nbuf = Vec::new();

    seen.insert(start.clone());
    queue.push_back((start, 0));

    while let Some((node, dist)) = queue.pop_front() {
        if is_target(&node) {
            return Some(dist);
        }
        nbuf.clear();
        space.neighbors(&node, &mut nbuf);
        for next in nbuf.drain(..) {
            if seen.insert(next.clone()) {
                queue.push_back((next, dist + 1));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::from_fn;

    #[test]
    fn counts_hops_not_costs() {
        let space = from_fn(|n: &u32| if *n < 10 { vec![n + 1, n + 3] } else { vec![] })
            .with_cost(|_: &u32, _: &u32| 100u64);
        assert_eq!(bfs_distance(&space, 0, |n| *n == 9), Some(3));
        assert_eq!(bfs_distance(&space, 0, |n| *n == 0), Some(0));
        assert_eq!(bfs_distance(&space, 0, |n| *n == 99), None);
    }
}
