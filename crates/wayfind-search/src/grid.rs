//! Unit-cost grid adapter over [`Point`] nodes.

use wayfind_core::{Point, Range};

use crate::traits::SearchSpace;

/// A rectangular grid with a passability predicate.
///
/// Moves go to the 4 cardinal neighbours, or all 8 when diagonals are
/// enabled, staying inside `bounds` and onto passable cells. Every move
/// costs one step.
pub struct GridSpace<F> {
    bounds: Range,
    passable: F,
    diagonals: bool,
}

impl<F: Fn(Point) -> bool> GridSpace<F> {
    /// 4-connected grid.
    pub fn new(bounds: Range, passable: F) -> Self {
        Self {
            bounds,
            passable,
            diagonals: false,
        }
    }

    /// Switch between 4- and 8-connectivity.
    pub fn with_diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `p` is inside the grid and passable.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.bounds.contains(p) && (self.passable)(p)
    }
}

impl<F: Fn(Point) -> bool> SearchSpace for GridSpace<F> {
    type Node = Point;
    type Cost = u32;

    fn neighbors(&self, node: &Point, buf: &mut Vec<Point>) {
        if self.diagonals {
            buf.extend(node.neighbors_8().into_iter().filter(|&n| self.is_open(n)));
        } else {
            buf.extend(node.neighbors_4().into_iter().filter(|&n| self.is_open(n)));
        }
    }
}

/// Parse a character grid, one row per line. Returns the bounds and the
/// row-major cells; rows shorter than the first are padded with `fill`.
///
/// Returns `None` when the grid has more than `i32::MAX` rows or columns.
pub fn parse_grid(text: &str, fill: char) -> Option<(Range, Vec<char>)> {
    let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let bounds = grid_bounds(width, rows.len())?;
    let mut cells = Vec::with_capacity(width * rows.len());
    for row in &rows {
        let mut n = 0;
        for ch in row.chars().take(width) {
            cells.push(ch);
            n += 1;
        }
        cells.extend(std::iter::repeat_n(fill, width - n));
    }
    Some((bounds, cells))
}

fn grid_bounds(width: usize, height: usize) -> Option<Range> {
    Some(Range::sized(i32::try_from(width).ok()?, i32::try_from(height).ok()?))
}
