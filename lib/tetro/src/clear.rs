//! Detection and removal of completed rows.

use crate::board::Board;

/// The most rows a single placement can complete, and so the most rows removed by one
/// call to [`clear_full_rows`].
pub const MAX_CLEARED_ROWS: usize = 4;

/// Returns true if every cell in the row containing `anchor` is filled. False for
/// indices outside the board.
pub fn is_row_complete(board: &Board, anchor: usize) -> bool {
    if anchor >= board.len() {
        return false;
    }
    let start = board.row_start_index(anchor);
    (start..start + board.width()).all(|i| board.is_filled(i))
}

/// Removes the row containing `anchor` by shifting every row above it down by one. The
/// top row comes out empty.
pub fn shift_down(board: &mut Board, anchor: usize) {
    if anchor >= board.len() {
        return;
    }
    let width = board.width();
    let end = board.row_start_index(anchor) + width;
    for i in (0..end).rev() {
        let above = i.checked_sub(width).map_or(false, |j| board.is_filled(j));
        board.set_fill(i, above);
    }
}

/// Scans from the bottom row upward, removing complete rows. A row is checked again after
/// being shifted into, so stacked complete rows are all found. Stops after
/// [`MAX_CLEARED_ROWS`] removals. Returns the number of rows removed.
pub fn clear_full_rows(board: &mut Board) -> usize {
    let width = board.width();
    let mut cleared = 0;
    let mut row = board.height();
    while row > 0 && cleared < MAX_CLEARED_ROWS {
        let anchor = (row - 1) * width;
        if is_row_complete(board, anchor) {
            shift_down(board, anchor);
            cleared += 1;
        } else {
            row -= 1;
        }
    }
    cleared
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec::Vec;

    fn fill_row(board: &mut Board, row: usize, except: &[usize]) {
        for col in 0..board.width() {
            if !except.contains(&col) {
                board.set_fill(row * board.width() + col, true);
            }
        }
    }

    fn row_bits(board: &Board, row: usize) -> Vec<bool> {
        board.row(row).unwrap().iter().map(|c| c.is_filled()).collect()
    }

    #[test]
    fn test_is_row_complete() {
        let mut board = Board::new(10, 20);
        fill_row(&mut board, 19, &[3]);
        assert!(!is_row_complete(&board, 190));
        board.set_fill(193, true);
        assert!(is_row_complete(&board, 190));
        assert!(is_row_complete(&board, 197));
        assert!(!is_row_complete(&board, 180));
        assert!(!is_row_complete(&board, 200));
    }

    #[test]
    fn test_clear_single_row() {
        let mut board = Board::new(10, 20);
        fill_row(&mut board, 19, &[0, 1]);
        fill_row(&mut board, 18, &[]);
        fill_row(&mut board, 17, &[5, 6, 7, 8, 9]);
        board.set_fill(164, true);
        let row19 = row_bits(&board, 19);
        let row17 = row_bits(&board, 17);
        let row16 = row_bits(&board, 16);

        assert_eq!(clear_full_rows(&mut board), 1);
        assert_eq!(row_bits(&board, 19), row19);
        assert_eq!(row_bits(&board, 18), row17);
        assert_eq!(row_bits(&board, 17), row16);
        assert!(row_bits(&board, 16).iter().all(|&b| !b));
        assert!(row_bits(&board, 0).iter().all(|&b| !b));
    }

    #[test]
    fn test_clear_split_rows() {
        let mut board = Board::new(10, 20);
        fill_row(&mut board, 19, &[]);
        fill_row(&mut board, 18, &[2]);
        fill_row(&mut board, 17, &[]);
        board.set_fill(160, true);
        let row18 = row_bits(&board, 18);

        assert_eq!(clear_full_rows(&mut board), 2);
        assert_eq!(row_bits(&board, 19), row18);
        assert!(board.is_filled(180));
        assert_eq!(board.filled_count(), 10);
    }

    #[test]
    fn test_clear_caps_at_four() {
        let mut board = Board::new(10, 20);
        for row in 15..20 {
            fill_row(&mut board, row, &[]);
        }
        assert_eq!(clear_full_rows(&mut board), MAX_CLEARED_ROWS);
        assert!(is_row_complete(&board, 190));
        assert_eq!(board.filled_count(), 10);
        assert_eq!(clear_full_rows(&mut board), 1);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_shift_top_row() {
        let mut board = Board::new(4, 3);
        fill_row(&mut board, 0, &[]);
        shift_down(&mut board, 0);
        assert_eq!(board.filled_count(), 0);
    }
}
