//! Draw detection.

use crate::types::{Board, Mark};

/// Checks if every cell is occupied.
///
/// A full board with no line is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&mark| mark != Mark::Empty)
}
