//! Conversions between flat board indices and grid coordinates, plus the few vector
//! helpers used by rotation.

use core::fmt;
use core::ops;

/// Position on the board grid. Rows grow downward, columns grow to the right. Either
/// component may be negative or past the board edge; use the bound predicates before
/// converting back into an index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate of `index` on a board `width` columns wide.
    pub fn of_index(index: usize, width: usize) -> Self {
        Self {
            row: (index / width) as i32,
            col: (index % width) as i32,
        }
    }

    pub fn in_cols(self, width: usize) -> bool {
        self.col >= 0 && (self.col as usize) < width
    }

    pub fn in_rows(self, height: usize) -> bool {
        self.row >= 0 && (self.row as usize) < height
    }

    pub fn in_bounds(self, width: usize, height: usize) -> bool {
        self.in_cols(width) && self.in_rows(height)
    }

    /// Flat index on a `width` x `height` board, or `None` if the coordinate is off the
    /// board.
    pub fn to_index(self, width: usize, height: usize) -> Option<usize> {
        if self.in_bounds(width, height) {
            Some(self.row as usize * width + self.col as usize)
        } else {
            None
        }
    }

    /// As an `[x, y]` vector.
    pub fn to_vec(self) -> [i32; 2] {
        [self.col, self.row]
    }

    pub fn from_vec([x, y]: [i32; 2]) -> Self {
        Self { row: y, col: x }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&(self.row, self.col), f)
    }
}

impl ops::Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        translate(self, rhs)
    }
}

impl ops::Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

pub fn translate(c: Coord, by: Coord) -> Coord {
    Coord::new(c.row + by.row, c.col + by.col)
}

/// Dot product. Panics if the vectors differ in length.
pub fn dot(a: &[i32], b: &[i32]) -> i32 {
    assert_eq!(a.len(), b.len(), "dot product of mismatched vectors");
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Applies a 2x2 matrix to an `[x, y]` vector.
pub fn transform(m: &[[i32; 2]; 2], v: [i32; 2]) -> [i32; 2] {
    [dot(&m[0], &v), dot(&m[1], &v)]
}

pub fn row_start(index: usize, width: usize) -> usize {
    index / width * width
}

pub fn same_row(a: usize, b: usize, width: usize) -> bool {
    a / width == b / width
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_coord_index() {
        assert_eq!(Coord::of_index(0, 10), Coord::new(0, 0));
        assert_eq!(Coord::of_index(19, 10), Coord::new(1, 9));
        assert_eq!(Coord::of_index(199, 10), Coord::new(19, 9));
        for i in 0..200 {
            assert_eq!(Coord::of_index(i, 10).to_index(10, 20), Some(i));
        }
        assert_eq!(Coord::new(-1, 0).to_index(10, 20), None);
        assert_eq!(Coord::new(0, -1).to_index(10, 20), None);
        assert_eq!(Coord::new(0, 10).to_index(10, 20), None);
        assert_eq!(Coord::new(20, 0).to_index(10, 20), None);
    }

    #[test]
    fn test_same_row_partitions() {
        let (w, h) = (10, 20);
        for a in 0..w * h {
            assert!(same_row(a, a, w));
            for b in 0..w * h {
                assert_eq!(same_row(a, b, w), same_row(b, a, w));
            }
        }
        let mut starts = (0..w * h).map(|i| row_start(i, w)).collect::<Vec<_>>();
        starts.dedup();
        assert_eq!(starts.len(), h);
        for s in starts {
            assert_eq!((0..w * h).filter(|&i| same_row(i, s, w)).count(), w);
        }
    }

    #[test]
    fn test_dot_and_transform() {
        assert_eq!(dot(&[1, 2, 3], &[4, 5, 6]), 32);
        assert_eq!(dot(&[], &[]), 0);
        let cw = [[0, -1], [1, 0]];
        let ccw = [[0, 1], [-1, 0]];
        // right -> down on screen
        assert_eq!(transform(&cw, [1, 0]), [0, 1]);
        assert_eq!(transform(&ccw, transform(&cw, [2, -3])), [2, -3]);
    }

    #[test]
    #[should_panic(expected = "mismatched")]
    fn test_dot_mismatch() {
        dot(&[1, 2], &[1]);
    }

    #[test]
    fn test_translate() {
        let c = Coord::new(3, 4) + Coord::new(-1, 2);
        assert_eq!(c, Coord::new(2, 6));
        assert_eq!(c - Coord::new(2, 6), Coord::default());
    }
}
