//! Win detection.
//!
//! A line is one of the N rows, the N columns, or one of the two main
//! diagonals. Shorter diagonals never count, whatever N is.

use crate::position::Position;
use crate::types::{Board, Mark};

/// Checks if `mark` fills any complete line.
///
/// Always false for [`Mark::Empty`] and for a zero-sized board.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let n = board.size();
    if mark == Mark::Empty || n == 0 {
        return false;
    }
    let owned = |row: usize, col: usize| board.mark_at(row, col) == mark;

    (0..n).any(|row| (0..n).all(|col| owned(row, col)))
        || (0..n).any(|col| (0..n).all(|row| owned(row, col)))
        || (0..n).all(|i| owned(i, i))
        || (0..n).all(|i| owned(i, n - 1 - i))
}

/// Returns the first complete line held by `mark`, as positions.
///
/// Rows are checked first, then columns, then the main diagonal and the
/// anti-diagonal.
pub fn winning_line(board: &Board, mark: Mark) -> Option<Vec<Position>> {
    if mark == Mark::Empty {
        return None;
    }
    lines(board.size()).find(|line| line.iter().all(|&pos| board.get(pos) == Some(mark)))
}

/// Every line on a board of side `n`.
pub fn lines(n: usize) -> impl Iterator<Item = Vec<Position>> {
    let rows = (0..n).map(move |row| (0..n).map(|col| Position::new(row, col)).collect::<Vec<_>>());
    let cols = (0..n).map(move |col| (0..n).map(|row| Position::new(row, col)).collect::<Vec<_>>());
    let diagonal = std::iter::once((0..n).map(|i| Position::new(i, i)).collect::<Vec<_>>());
    let anti = std::iter::once((0..n).map(|i| Position::new(i, n - 1 - i)).collect::<Vec<_>>());
    rows.chain(cols).chain(diagonal).chain(anti)
}
