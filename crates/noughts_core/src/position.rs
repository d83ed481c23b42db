//! Grid coordinates.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A zero-based `(row, col)` coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Position {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Position {
    /// Row-major index on a board of side `size`, or `None` if off the board.
    pub fn to_index(self, size: usize) -> Option<usize> {
        (self.row < size && self.col < size).then_some(self.row * size + self.col)
    }

    /// Inverse of [`Position::to_index`].
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Parses a 1-based cell number as shown by [`crate::Board::display`].
    pub fn from_cell_number(number: usize, size: usize) -> Option<Self> {
        (1..=size * size)
            .contains(&number)
            .then(|| Self::from_index(number - 1, size))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversion() {
        assert_eq!(Position::new(0, 0).to_index(3), Some(0));
        assert_eq!(Position::new(1, 1).to_index(3), Some(4));
        assert_eq!(Position::new(2, 2).to_index(3), Some(8));
        assert_eq!(Position::new(3, 0).to_index(3), None);
        assert_eq!(Position::from_index(5, 3), Position::new(1, 2));
        assert_eq!(Position::from_index(5, 4), Position::new(1, 1));
    }

    #[test]
    fn test_cell_number() {
        assert_eq!(Position::from_cell_number(1, 3), Some(Position::new(0, 0)));
        assert_eq!(Position::from_cell_number(9, 3), Some(Position::new(2, 2)));
        assert_eq!(Position::from_cell_number(0, 3), None);
        assert_eq!(Position::from_cell_number(10, 3), None);
    }
}
