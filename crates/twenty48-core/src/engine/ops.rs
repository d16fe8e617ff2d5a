use super::state::{Board, Move, Tile};

/// Return `board` slid/merged in `dir` (no spawn).
///
/// Up, Down and Right are expressed as rotations around the single
/// leftward-slide primitive.
pub fn shifted(board: &Board, dir: Move) -> Board {
    match dir {
        Move::Left => slid_left(board),
        Move::Right => slid_left(&board.rotated(false).rotated(false))
            .rotated(true)
            .rotated(true),
        Move::Up => slid_left(&board.rotated(true)).rotated(false),
        Move::Down => slid_left(&board.rotated(false)).rotated(true),
    }
}

/// Return `board` with every row slid toward column 0, merging equal
/// neighbors at most once per tile per slide.
pub fn slid_left(board: &Board) -> Board {
    let n = board.size();
    let mut out = board.clone();
    for row in out.cells_mut().chunks_exact_mut(n) {
        slide_row_left(row);
    }
    out
}

/// Return `board` rotated 90°: counter-clockwise maps `(i, j)` from
/// `(j, n-1-i)`, clockwise from `(n-1-j, i)`. Opposite rotations cancel.
pub fn rotated(board: &Board, counter_clockwise: bool) -> Board {
    let n = board.size();
    let mut out = Board::new(n);
    for i in 0..n {
        for j in 0..n {
            let v = if counter_clockwise {
                board.get(j, n - 1 - i)
            } else {
                board.get(n - 1 - j, i)
            };
            out.set(i, j, v);
        }
    }
    out
}

/// Slide one row toward index 0.
///
/// `stop` is the merge barrier: after two tiles merge into column
/// `stop - 1`, later tiles may slide down to column `stop` but never merge
/// across it, so a freshly merged tile cannot merge twice in one slide.
pub(crate) fn slide_row_left(row: &mut [Tile]) {
    let mut stop = 0;
    for j in 1..row.len() {
        if row[j] == 0 {
            continue;
        }
        let mut k = j;
        while k > stop {
            if row[k - 1] == 0 {
                row[k - 1] = row[k];
                row[k] = 0;
                k -= 1;
            } else if row[k - 1] == row[k] {
                row[k - 1] *= 2;
                row[k] = 0;
                stop = k;
                break;
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slid(mut row: [Tile; 4]) -> [Tile; 4] {
        slide_row_left(&mut row);
        row
    }

    #[test]
    fn it_slides_rows_left() {
        assert_eq!(slid([0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(slid([0, 0, 0, 2]), [2, 0, 0, 0]);
        assert_eq!(slid([2, 0, 0, 2]), [4, 0, 0, 0]);
        assert_eq!(slid([0, 2, 0, 2]), [4, 0, 0, 0]);
        assert_eq!(slid([2, 4, 2, 4]), [2, 4, 2, 4]);
        assert_eq!(slid([4, 2, 2, 0]), [4, 4, 0, 0]);
    }

    #[test]
    fn merge_barrier_holds_within_one_slide() {
        // three equal tiles merge once, not twice
        assert_eq!(slid([2, 2, 2, 0]), [4, 2, 0, 0]);
        assert_eq!(slid([2, 2, 2, 2]), [4, 4, 0, 0]);
        assert_eq!(slid([4, 4, 8, 0]), [8, 8, 0, 0]);
    }

    #[test]
    fn slide_is_idempotent_per_row() {
        for row in [[2, 2, 2, 0], [0, 2, 0, 2], [2, 4, 2, 4], [4, 4, 4, 4]] {
            let once = slid(row);
            assert_eq!(slid(once), once);
        }
    }

    #[test]
    fn rotate_counter_clockwise_2x2() {
        let board = Board::from_rows(&[[1, 2], [3, 4]]);
        assert_eq!(board.rotated(true), Board::from_rows(&[[2, 4], [1, 3]]));
    }

    #[test]
    fn rotate_clockwise_2x2() {
        let board = Board::from_rows(&[[1, 2], [3, 4]]);
        assert_eq!(board.rotated(false), Board::from_rows(&[[3, 1], [4, 2]]));
    }

    #[test]
    fn opposite_rotations_cancel() {
        let board = Board::from_rows(&[[2, 4, 8, 16], [0, 2, 0, 2], [32, 0, 0, 32], [0; 4]]);
        assert_eq!(board.rotated(true).rotated(false), board);
        assert_eq!(board.rotated(false).rotated(true), board);
    }

    #[test]
    fn test_move_left() {
        let board = Board::from_rows(&[
            [2, 4, 8, 16],
            [2, 8, 8, 4],
            [4, 0, 0, 4],
            [2, 0, 0, 4],
        ]);
        let expected = Board::from_rows(&[
            [2, 4, 8, 16],
            [2, 16, 4, 0],
            [8, 0, 0, 0],
            [2, 4, 0, 0],
        ]);
        assert_eq!(shifted(&board, Move::Left), expected);
    }

    #[test]
    fn test_move_right() {
        let board = Board::from_rows(&[
            [2, 4, 8, 16],
            [2, 8, 8, 4],
            [4, 0, 0, 4],
            [2, 0, 0, 4],
        ]);
        let expected = Board::from_rows(&[
            [2, 4, 8, 16],
            [0, 2, 16, 4],
            [0, 0, 0, 8],
            [0, 0, 2, 4],
        ]);
        assert_eq!(shifted(&board, Move::Right), expected);
    }

    #[test]
    fn test_move_up() {
        let board = Board::from_rows(&[
            [2, 2, 4, 2],
            [4, 8, 0, 0],
            [8, 8, 0, 0],
            [16, 4, 4, 4],
        ]);
        let expected = Board::from_rows(&[
            [2, 2, 8, 2],
            [4, 16, 0, 4],
            [8, 4, 0, 0],
            [16, 0, 0, 0],
        ]);
        assert_eq!(shifted(&board, Move::Up), expected);
    }

    #[test]
    fn test_move_down() {
        let board = Board::from_rows(&[
            [2, 2, 4, 2],
            [4, 8, 0, 0],
            [8, 8, 0, 0],
            [16, 4, 4, 4],
        ]);
        let expected = Board::from_rows(&[
            [2, 0, 0, 0],
            [4, 2, 0, 0],
            [8, 16, 0, 2],
            [16, 4, 8, 4],
        ]);
        assert_eq!(shifted(&board, Move::Down), expected);
    }

    #[test]
    fn shift_on_compacted_board_is_noop() {
        let board = Board::from_rows(&[
            [2, 4, 8, 16],
            [4, 8, 16, 2],
            [8, 16, 2, 4],
            [16, 2, 4, 8],
        ]);
        for dir in Move::ALL {
            assert_eq!(shifted(&board, dir), board);
        }
    }
}
