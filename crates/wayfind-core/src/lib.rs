//! **wayfind-core**: grid geometry shared by wayfind search adapters.
//!
//! [`Point`] is a hashable, totally ordered 2D integer coordinate that can be
//! used directly as a search node, or embedded in a richer state type
//! (position plus heading, position plus step counter, ...). [`Range`]
//! bounds a grid and iterates its cells in row-major order.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
