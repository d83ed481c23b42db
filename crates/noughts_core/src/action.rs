//! Move and error types.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.mark, self.position)
    }
}

/// A rejected placement. The state is untouched whenever this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The coordinates are outside the board.
    #[display("Position {position} is off the {size}x{size} board")]
    OutOfBounds {
        /// Requested position.
        position: Position,
        /// Side length of the board.
        size: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Position),

    /// The game has reached a terminal status.
    #[display("Game is already over")]
    GameOver,

    /// The mark is not the one whose turn it is.
    #[display("It's not {mark:?}'s turn ({expected:?} to move)")]
    NotYourTurn {
        /// Mark that tried to move.
        mark: Mark,
        /// Mark whose turn it is.
        expected: Mark,
    },
}

impl std::error::Error for InvalidMove {}

/// A board that cannot arise from legal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidBoard {
    /// The opening player must be Human or Computer.
    #[display("First turn must belong to a player, not {:?}", _0)]
    NoFirstPlayer(Mark),

    /// Mark counts do not alternate from the opening player.
    #[display("{human} human and {computer} computer marks cannot alternate from {first:?}")]
    CountMismatch {
        /// Human marks on the board.
        human: usize,
        /// Computer marks on the board.
        computer: usize,
        /// Opening player.
        first: Mark,
    },

    /// Both players hold a complete line.
    #[display("Both players have a winning line")]
    DoubleWin,

    /// The winner is not the player who moved last.
    #[display("{:?} has a line but did not move last", _0)]
    WinnerNotLast(Mark),
}

impl std::error::Error for InvalidBoard {}
