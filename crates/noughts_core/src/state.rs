//! Game state and its transitions.

use super::action::{InvalidBoard, InvalidMove, Move};
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use super::rules::{has_line, is_full};
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a line for this mark.
    Won(Mark),
    /// Board filled with no line.
    Drawn,
}

impl GameStatus {
    /// True for `Won` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Complete game state: board, whose turn it is, and status.
///
/// Created fresh at game start, mutated only through [`GameState::place`],
/// and replaced wholesale on restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_turn: Mark,
    first_turn: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game on an empty `size`×`size` board with the human to move.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self::with_first_turn(size, Mark::Human)
    }

    /// Creates a new game where `first` opens.
    ///
    /// `Mark::Empty` falls back to the human opening.
    #[instrument]
    pub fn with_first_turn(size: usize, first: Mark) -> Self {
        let first = if first.is_player() { first } else { Mark::Human };
        info!(size, first = ?first, "New game");
        Self {
            board: Board::new(size),
            current_turn: first,
            first_turn: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Reconstructs a state from a board position.
    ///
    /// Whose turn it is and the status are derived from the marks. The move
    /// order is unknown, so the history starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoard`] if the position cannot arise from legal play
    /// starting with `first`.
    #[instrument(skip(board), fields(board = %board.compact()))]
    pub fn from_board(board: Board, first: Mark) -> Result<Self, InvalidBoard> {
        let second = first.opponent().ok_or(InvalidBoard::NoFirstPlayer(first))?;
        let first_count = board.count(first);
        let second_count = board.count(second);

        if first_count != second_count && first_count != second_count + 1 {
            let (human, computer) = if first == Mark::Human {
                (first_count, second_count)
            } else {
                (second_count, first_count)
            };
            return Err(InvalidBoard::CountMismatch {
                human,
                computer,
                first,
            });
        }

        let (last_mover, current_turn) = if first_count == second_count {
            (second, first)
        } else {
            (first, second)
        };

        let first_wins = has_line(&board, first);
        let second_wins = has_line(&board, second);
        let status = match (first_wins, second_wins) {
            (true, true) => return Err(InvalidBoard::DoubleWin),
            (true, false) | (false, true) => {
                let winner = if first_wins { first } else { second };
                if winner != last_mover {
                    return Err(InvalidBoard::WinnerNotLast(winner));
                }
                GameStatus::Won(winner)
            }
            (false, false) if is_full(&board) => GameStatus::Drawn,
            (false, false) => GameStatus::InProgress,
        };

        Ok(Self {
            board,
            current_turn,
            first_turn: first,
            status,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the player to move.
    ///
    /// After the game ends this is the player who made the final move.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Returns the player who opened the game.
    pub fn first_turn(&self) -> Mark {
        self.first_turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Moves applied since the state was created, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Mark at `position`, or `None` if it is off the board.
    pub fn mark_at(&self, position: Position) -> Option<Mark> {
        self.board.get(position)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Checks if `mark` fills a row, column or main diagonal.
    pub fn winner(&self, mark: Mark) -> bool {
        has_line(&self.board, mark)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        is_full(&self.board)
    }

    /// Places `mark` at `(row, col)` and returns the resulting status.
    ///
    /// If the game continues the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over, the mark is not the one
    /// to move, the coordinates are off the board, or the cell is occupied.
    /// Nothing is modified in that case.
    #[instrument(skip(self), fields(turn = ?self.current_turn))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<GameStatus, InvalidMove> {
        let position = Position::new(row, col);
        let idx = self.validate(position, mark)?;

        self.board.put(idx, mark);
        self.history.push(Move::new(mark, position));
        self.status = self.evaluate_status(mark);

        if self.status == GameStatus::InProgress {
            self.current_turn = mark.opponent().unwrap_or(Mark::Human);
        } else {
            info!(status = ?self.status, moves = self.history.len(), "Game over");
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "invariants violated after {mark:?} at {position}"
        );
        debug!(%position, status = ?self.status, "Mark placed");
        Ok(self.status)
    }

    /// Value-returning form of [`GameState::place`]; `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`GameState::place`].
    pub fn with_move(&self, row: usize, col: usize, mark: Mark) -> Result<GameState, InvalidMove> {
        let mut next = self.clone();
        next.place(row, col, mark)?;
        Ok(next)
    }

    /// Runs every placement check, returning the cell index.
    fn validate(&self, position: Position, mark: Mark) -> Result<usize, InvalidMove> {
        if self.status.is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        if mark != self.current_turn {
            return Err(InvalidMove::NotYourTurn {
                mark,
                expected: self.current_turn,
            });
        }
        let idx = position
            .to_index(self.board.size())
            .ok_or(InvalidMove::OutOfBounds {
                position,
                size: self.board.size(),
            })?;
        if self.board.at(idx) != Mark::Empty {
            return Err(InvalidMove::Occupied(position));
        }
        Ok(idx)
    }

    /// Status after `last_mover` has placed a mark.
    fn evaluate_status(&self, last_mover: Mark) -> GameStatus {
        if self.winner(last_mover) {
            GameStatus::Won(last_mover)
        } else if self.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }
}

#[cfg(test)]
impl GameState {
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SIZE)
    }
}
