//! Core domain types for the game grid.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Contents of a cell, and the marker for whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// The human player (moves first unless configured otherwise).
    Human,
    /// The computer player driven by the search.
    Computer,
}

impl Mark {
    /// Returns the opposing player, or `None` for [`Mark::Empty`].
    pub fn opponent(self) -> Option<Self> {
        match self {
            Mark::Human => Some(Mark::Computer),
            Mark::Computer => Some(Mark::Human),
            Mark::Empty => None,
        }
    }

    /// True for the two player marks.
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }

    /// Display symbol: `X` for the human, `O` for the computer.
    pub fn symbol(self) -> char {
        match self {
            Mark::Human => 'X',
            Mark::Computer => 'O',
            Mark::Empty => ' ',
        }
    }

    /// Parses a display symbol back into a mark.
    ///
    /// Accepts `X`/`O` in either case and `.`, `-`, `_` for empty cells.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Mark::Human),
            'O' | 'o' => Some(Mark::Computer),
            '.' | '-' | '_' => Some(Mark::Empty),
            _ => None,
        }
    }
}

/// Square N×N grid, stored row-major.
///
/// The side length is fixed at construction. Mutation is crate-private:
/// callers go through [`crate::GameState::place`], and the search works on
/// its own scratch copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Creates an empty board with side length `size`.
    ///
    /// A board always has at least one cell; `size` 0 is treated as 1.
    #[instrument]
    pub fn new(size: usize) -> Self {
        if size == 0 {
            warn!("Board size 0 requested, using 1");
        }
        let size = size.max(1);
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    /// Builds a board from row-major marks.
    ///
    /// Returns `None` unless `cells.len()` is a non-zero perfect square.
    pub fn from_cells(cells: Vec<Mark>) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        let size = (0..=cells.len()).find(|n| n * n >= cells.len())?;
        if size * size != cells.len() {
            return None;
        }
        Some(Self { size, cells })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (N²).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the mark at `position`, or `None` if it is off the board.
    pub fn get(&self, position: Position) -> Option<Mark> {
        position
            .to_index(self.size)
            .and_then(|idx| self.cells.get(idx).copied())
    }

    /// Mark at a row-major index. Panics if out of range.
    pub(crate) fn at(&self, idx: usize) -> Mark {
        self.cells[idx]
    }

    /// Mark at `(row, col)`. Panics if out of range.
    pub(crate) fn mark_at(&self, row: usize, col: usize) -> Mark {
        self.cells[row * self.size + col]
    }

    /// Unchecked assignment used by placement and by the search's place/undo.
    pub(crate) fn put(&mut self, idx: usize, mark: Mark) {
        self.cells[idx] = mark;
    }

    /// Checks if a position is on the board and empty.
    pub fn is_empty(&self, position: Position) -> bool {
        matches!(self.get(position), Some(Mark::Empty))
    }

    /// All marks in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(idx, _)| Position::from_index(idx, self.size))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based cell number so the text doubles as
    /// an input legend.
    pub fn display(&self) -> String {
        let width = self.cell_count().to_string().len();
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let idx = row * self.size + col;
                let symbol = match self.cells[idx] {
                    Mark::Empty => (idx + 1).to_string(),
                    mark => mark.symbol().to_string(),
                };
                result.push_str(&format!("{symbol:^width$}"));
                if col + 1 < self.size {
                    result.push('|');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
                let rule = vec!["-".repeat(width); self.size].join("+");
                result.push_str(&rule);
                result.push('\n');
            }
        }
        result
    }

    /// Compact one-line form: `X`, `O` and `.` in row-major order, rows split by `/`.
    pub fn compact(&self) -> String {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| {
                row.iter()
                    .map(|mark| match mark {
                        Mark::Empty => '.',
                        other => other.symbol(),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SIZE)
    }
}
