//! The [`SearchSpace`] trait and the closure-backed [`FnSpace`].

use std::hash::Hash;
use std::marker::PhantomData;

use crate::cost::Cost;

/// A state space the search engine can explore.
///
/// Implementations must be deterministic, and every value returned by
/// [`cost`](Self::cost) must be non-negative.
pub trait SearchSpace {
    /// Search state. Used as a ledger key, so equality and hashing must agree.
    type Node: Clone + Eq + Hash;
    type Cost: Cost;

    /// Append the successors of `node` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>);

    /// Cost of the edge from `from` to its successor `to`. Defaults to one
    /// step.
    fn cost(&self, from: &Self::Node, to: &Self::Node) -> Self::Cost {
        let _ = (from, to);
        Self::Cost::ONE
    }
}

impl<S: SearchSpace + ?Sized> SearchSpace for &S {
    type Node = S::Node;
    type Cost = S::Cost;

    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>) {
        (**self).neighbors(node, buf);
    }

    fn cost(&self, from: &Self::Node, to: &Self::Node) -> Self::Cost {
        (**self).cost(from, to)
    }
}

/// A [`SearchSpace`] built from closures, see [`from_fn`].
pub struct FnSpace<N, C, F, G> {
    neighbors: F,
    cost: G,
    _marker: PhantomData<fn(&N) -> C>,
}

fn unit_step<N>(_: &N, _: &N) -> u32 {
    1
}

/// Build a unit-cost search space from a neighbour closure.
///
/// The closure may return anything iterable over nodes: a `Vec`, an
/// array, an `Option` or a lazy iterator. Every edge costs one `u32`
/// step until [`FnSpace::with_cost`] supplies a cost function.
pub fn from_fn<N, F, I>(neighbors: F) -> FnSpace<N, u32, F, fn(&N, &N) -> u32>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    FnSpace {
        neighbors,
        cost: unit_step::<N>,
        _marker: PhantomData,
    }
}

impl<N, C, F, G> FnSpace<N, C, F, G> {
    /// Replace the edge cost function. The cost type follows the closure.
    pub fn with_cost<C2, G2>(self, cost: G2) -> FnSpace<N, C2, F, G2>
    where
        G2: Fn(&N, &N) -> C2,
    {
        FnSpace {
            neighbors: self.neighbors,
            cost,
            _marker: PhantomData,
        }
    }
}

impl<N, C, F, G, I> SearchSpace for FnSpace<N, C, F, G>
where
    N: Clone + Eq + Hash,
    C: Cost,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    G: Fn(&N, &N) -> C,
{
    type Node = N;
    type Cost = C;

    fn neighbors(&self, node: &N, buf: &mut Vec<N>) {
        buf.extend((self.neighbors)(node));
    }

    fn cost(&self, from: &N, to: &N) -> C {
        (self.cost)(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_space_defaults_to_unit_cost() {
        let space = from_fn(|n: &u8| vec![n + 1, n + 2]);
        let mut buf = Vec::new();
        space.neighbors(&3, &mut buf);
        assert_eq!(buf, vec![4, 5]);
        assert_eq!(space.cost(&3, &5), 1u32);
    }

    #[test]
    fn neighbour_closure_may_return_any_iterable() {
        let array = from_fn(|n: &u32| [n + 1, n * 2]);
        let option = from_fn(|n: &u32| n.checked_sub(1));
        let lazy = from_fn(|n: &u32| {
            let n = *n;
            (1..=3).map(move |k| n * k).filter(|m| m % 2 == 0)
        });

        let mut buf = Vec::new();
        array.neighbors(&3, &mut buf);
        assert_eq!(buf, vec![4, 6]);
        buf.clear();
        option.neighbors(&0, &mut buf);
        assert!(buf.is_empty());
        option.neighbors(&5, &mut buf);
        assert_eq!(buf, vec![4]);
        buf.clear();
        lazy.neighbors(&3, &mut buf);
        assert_eq!(buf, vec![6]);

        let res = crate::shortest_path(&array, 1, |n| *n == 10).unwrap();
        assert_eq!(res.path(), &[1, 2, 4, 5, 10]);
    }

    #[test]
    fn with_cost_changes_cost_type() {
        let space = from_fn(|n: &i32| vec![n - 1])
            .with_cost(|a: &i32, b: &i32| u64::from(a.abs_diff(*b)) * 10);
        assert_eq!(space.cost(&4, &3), 10u64);
    }

    #[test]
    fn reference_forwards() {
        struct Line;
        impl SearchSpace for Line {
            type Node = i64;
            type Cost = u8;
            fn neighbors(&self, node: &i64, buf: &mut Vec<i64>) {
                buf.push(node + 1);
            }
        }
        let by_ref = &Line;
        let mut buf = Vec::new();
        by_ref.neighbors(&0, &mut buf);
        assert_eq!(buf, vec![1]);
        assert_eq!(SearchSpace::cost(&by_ref, &0, &1), 1u8);
    }
}
