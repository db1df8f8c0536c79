//! Grid positions and rectangles for search adapters.

use std::cmp::Ordering;
use std::ops::{Add, Sub};

/// Integer grid position, x to the right and y down the rows of a text grid.
///
/// Doubles as a unit heading: [`Point::UP`], [`Point::RIGHT`], etc.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);
    pub const UP: Self = Self::new(0, -1);
    pub const RIGHT: Self = Self::new(1, 0);
    pub const DOWN: Self = Self::new(0, 1);
    pub const LEFT: Self = Self::new(-1, 0);

    /// Headings in clockwise order starting at [`Point::UP`].
    pub const CARDINALS: [Self; 4] = [Self::UP, Self::RIGHT, Self::DOWN, Self::LEFT];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Orthogonally adjacent cells, clockwise from the one above.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Orthogonal and diagonal cells, clockwise from the one above.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [(0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1)]
            .map(|(dx, dy)| Self::new(self.x + dx, self.y + dy))
    }

    /// Heading after a clockwise quarter turn (y grows downward).
    #[inline]
    pub const fn turn_right(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Heading after a counter-clockwise quarter turn.
    #[inline]
    pub const fn turn_left(self) -> Self {
        Self::new(self.y, -self.x)
    }
}

/// Row-major: by `y`, then by `x`.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Half-open rectangle: `min` is inside, `max` is one past the last cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// `width` columns by `height` rows starting at the origin.
    #[inline]
    pub const fn sized(width: i32, height: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(width, height),
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Offset of `p` in a row-major cell buffer covering this range.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let d = p - self.min;
        let width = (self.max.x - self.min.x) as usize;
        Some(d.y as usize * width + d.x as usize)
    }

    /// Every cell, row by row.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let Range { min, max } = self.range;
        if min.x >= max.x || self.cur.y >= max.y {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x == max.x {
            self.cur = Point::new(min.x, self.cur.y + 1);
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn quarter_turns_walk_the_cardinals() {
        let mut d = Point::UP;
        for expected in [Point::RIGHT, Point::DOWN, Point::LEFT, Point::UP] {
            d = d.turn_right();
            assert_eq!(d, expected);
        }
        assert_eq!(Point::UP.turn_left(), Point::LEFT);
        assert_eq!(Point::new(2, 3) - Point::new(1, 1) + Point::DOWN, Point::new(1, 3));
    }

    #[test]
    fn sorting_is_row_major() {
        let mut pts = vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(1, 0), Point::new(2, 0), Point::new(0, 1)]);
    }

    #[test]
    fn neighbour_sets() {
        let p = Point::new(5, 5);
        assert_eq!(p.neighbors_4()[0], Point::new(5, 4));
        assert!(p.neighbors_4().iter().all(|n| (n.x - p.x).abs() + (n.y - p.y).abs() == 1));
        let ring: HashSet<Point> = p.neighbors_8().into_iter().collect();
        assert_eq!(ring.len(), 8);
        assert!(!ring.contains(&p));
    }

    #[test]
    fn range_is_half_open() {
        let r = Range::sized(3, 2);
        assert!(r.contains(Point::ZERO));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn index_of_is_relative_to_min() {
        let r = Range {
            min: Point::new(1, 1),
            max: Point::new(4, 3),
        };
        assert_eq!(r.index_of(Point::new(1, 1)), Some(0));
        assert_eq!(r.index_of(Point::new(3, 2)), Some(5));
        assert_eq!(r.index_of(Point::ZERO), None);
    }

    #[test]
    fn iter_visits_rows_in_order() {
        let pts: Vec<_> = Range::sized(3, 2).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::ZERO);
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(pts[5], Point::new(2, 1));
        assert_eq!(Range::sized(0, 4).iter().count(), 0);
    }
}
