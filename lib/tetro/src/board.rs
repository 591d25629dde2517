//! The play field: a flat array of cells, each tracking its fill state and whether its
//! last drawn image is still current.

use alloc::vec::Vec;
use core::fmt;

use crate::geom::{self, Coord};

/// Pixel layout of a cell on the drawing surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Metrics {
    /// Distance between the origins of two neighbouring cells.
    pub cell: u32,
    /// Gap left on every side of the drawn square.
    pub padding: u32,
}

impl Metrics {
    pub const fn new(cell: u32, padding: u32) -> Self {
        Self { cell, padding }
    }

    /// Side length of the drawn square.
    pub const fn size(&self) -> u32 {
        self.cell - 2 * self.padding
    }

    /// True if the padding leaves a drawn square of at least one pixel.
    pub fn is_drawable(&self) -> bool {
        self.padding.checked_mul(2).map_or(false, |p| p < self.cell)
    }

    /// Pixel offset of the drawn square in row or column `n`, or `None` if it does not fit
    /// in a `u32`.
    pub fn offset(&self, n: usize) -> Option<u32> {
        u32::try_from(n)
            .ok()?
            .checked_mul(self.cell)?
            .checked_add(self.padding)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(40, 4)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    x: u32,
    y: u32,
    fill: bool,
    cached: bool,
}

impl Cell {
    /// Pixel origin of the drawn square.
    pub fn origin(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    pub fn is_filled(&self) -> bool {
        self.fill
    }

    /// False if the cell changed since it was last drawn.
    pub fn is_cached(&self) -> bool {
        self.cached
    }
}

#[derive(Clone)]
pub struct Board {
    width: usize,
    height: usize,
    metrics: Metrics,
    cells: Vec<Cell>,
}

impl Board {
    pub const WIDTH: usize = 10;
    pub const HEIGHT: usize = 20;

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_metrics(width, height, Metrics::default())
    }

    pub fn with_metrics(width: usize, height: usize, metrics: Metrics) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        assert!(width.checked_mul(height).is_some(), "board has too many cells");
        assert!(metrics.is_drawable(), "padding leaves no room in the cell");
        assert!(
            metrics.offset(width.max(height) - 1).is_some(),
            "board does not fit in pixel coordinates"
        );
        let cells = (0..width * height)
            .map(|i| {
                let Coord { row, col } = Coord::of_index(i, width);
                Cell {
                    x: col as u32 * metrics.cell + metrics.padding,
                    y: row as u32 * metrics.cell + metrics.padding,
                    fill: false,
                    cached: false,
                }
            })
            .collect();
        Self {
            width,
            height,
            metrics,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Cells of one row, top row being `0`. `None` for rows outside the board.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        let start = row.checked_mul(self.width)?;
        self.cells.get(start..start.checked_add(self.width)?)
    }

    /// Returns false for indices outside the board.
    pub fn is_filled(&self, index: usize) -> bool {
        self.cells.get(index).map_or(false, |c| c.fill)
    }

    /// Updates the fill state of a cell and marks it for redraw. Does nothing if the index
    /// is outside the board or the value is unchanged.
    pub fn set_fill(&mut self, index: usize, fill: bool) {
        if let Some(cell) = self.cells.get_mut(index) {
            if cell.fill != fill {
                cell.fill = fill;
                cell.cached = false;
            }
        }
    }

    pub(crate) fn mark_cached(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.cached = true;
        }
    }

    /// Forces every cell to be redrawn on the next render pass.
    pub fn invalidate(&mut self) {
        self.cells.iter_mut().for_each(|c| c.cached = false);
    }

    pub fn row_start_index(&self, index: usize) -> usize {
        geom::row_start(index, self.width)
    }

    pub fn is_same_row(&self, a: usize, b: usize) -> bool {
        geom::same_row(a, b, self.width)
    }

    pub fn coord(&self, index: usize) -> Coord {
        Coord::of_index(index, self.width)
    }

    pub fn index_of(&self, c: Coord) -> Option<usize> {
        c.to_index(self.width, self.height)
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.in_bounds(self.width, self.height)
    }

    /// Fill state of every cell, in index order.
    pub fn snapshot(&self) -> Vec<bool> {
        self.cells.iter().map(|c| c.fill).collect()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.fill).count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a>(&'a [Cell]);
        impl fmt::Debug for Row<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"")?;
                for c in self.0 {
                    f.write_str(if c.fill { "#" } else { "." })?;
                }
                f.write_str("\"")
            }
        }

        f.debug_list()
            .entries(self.cells.chunks(self.width).map(Row))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::format;

    #[test]
    fn test_new_board() {
        let board = Board::new(10, 20);
        assert_eq!(board.len(), 200);
        assert_eq!(board.filled_count(), 0);
        assert!(board.cells().iter().all(|c| !c.is_cached()));
        assert_eq!(board.cells()[0].origin(), (4, 4));
        assert_eq!(board.cells()[11].origin(), (44, 44));
        assert_eq!(board.cells()[199].origin(), (364, 764));
        assert_eq!(board.metrics().size(), 32);
    }

    #[test]
    fn test_set_fill() {
        let mut board = Board::new(10, 20);
        board.mark_cached(5);
        board.set_fill(5, false);
        assert!(board.cells()[5].is_cached());
        board.set_fill(5, true);
        assert!(board.is_filled(5));
        assert!(!board.cells()[5].is_cached());
        board.mark_cached(5);
        board.set_fill(5, true);
        assert!(board.cells()[5].is_cached());
        // out of range is ignored
        board.set_fill(200, true);
        assert!(!board.is_filled(200));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_rows() {
        let board = Board::new(10, 20);
        assert_eq!(board.row_start_index(0), 0);
        assert_eq!(board.row_start_index(9), 0);
        assert_eq!(board.row_start_index(10), 10);
        assert_eq!(board.row_start_index(199), 190);
        assert!(board.is_same_row(10, 19));
        assert!(!board.is_same_row(9, 10));
        assert_eq!(board.row(19).map(<[Cell]>::len), Some(10));
        assert!(board.row(20).is_none());
        assert!(board.row(usize::MAX).is_none());
        assert_eq!(board.coord(57), Coord::new(5, 7));
        assert_eq!(board.index_of(Coord::new(5, 7)), Some(57));
        assert_eq!(board.index_of(Coord::new(5, 10)), None);
    }

    #[test]
    fn test_snapshot_and_debug() {
        let mut board = Board::new(4, 2);
        board.set_fill(1, true);
        board.set_fill(4, true);
        assert_eq!(
            board.snapshot(),
            [false, true, false, false, true, false, false, false]
        );
        assert_eq!(format!("{board:?}"), "[\".#..\", \"#...\"]");
    }

    #[test]
    fn test_metrics_bounds() {
        let m = Metrics::default();
        assert!(m.is_drawable());
        assert_eq!(m.offset(9), Some(364));
        assert!(!Metrics::new(8, 4).is_drawable());
        assert!(!Metrics::new(8, u32::MAX).is_drawable());
        assert_eq!(Metrics::new(4_000_000_000, 4).offset(1), None);
        assert_eq!(Metrics::new(u32::MAX, 0).offset(1), Some(u32::MAX));
    }

    #[test]
    #[should_panic(expected = "board does not fit in pixel coordinates")]
    fn test_oversized_cell_panics() {
        Board::with_metrics(10, 20, Metrics::new(4_000_000_000, 4));
    }

    #[test]
    #[should_panic(expected = "padding leaves no room in the cell")]
    fn test_oversized_padding_panics() {
        Board::with_metrics(10, 20, Metrics::new(40, 20));
    }
}
