//! Tic-tac-toe game state and a minimax opponent.
//!
//! The crate has two parts:
//!
//! - [`GameState`]: the board, whose turn it is, and whether the game is
//!   won or drawn. It changes only through [`GameState::place`].
//! - [`MoveSelector`]: picks the computer's move by searching the full game
//!   tree from the current position.
//!
//! Everything is synchronous and in-memory. Front ends own presentation,
//! input and any delay before the computer moves.
//!
//! # Example
//!
//! ```
//! use noughts_core::{best_move, new_game, place, status, GameStatus, Mark};
//!
//! let state = new_game(3);
//! let state = place(&state, 0, 0, Mark::Human)?;
//! let reply = best_move(&state).expect("computer to move");
//! let state = place(&state, reply.row, reply.col, Mark::Computer)?;
//! assert_eq!(status(&state), GameStatus::InProgress);
//! # Ok::<(), noughts_core::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod position;
pub mod rules;
mod search;
mod state;
mod types;

pub use action::{InvalidBoard, InvalidMove, Move};
pub use position::Position;
pub use search::{win_score, MoveSelector, ScoredMove, SearchStrategy};
pub use state::{GameState, GameStatus};
pub use types::{Board, Mark};

/// Side length of the standard board.
pub const DEFAULT_SIZE: usize = 3;

/// Starts a fresh game with the human to move.
pub fn new_game(size: usize) -> GameState {
    GameState::new(size)
}

/// Returns `state` with `mark` placed at `(row, col)`, leaving `state` untouched.
///
/// # Errors
///
/// Returns [`InvalidMove`] if the placement is not legal.
pub fn place(state: &GameState, row: usize, col: usize, mark: Mark) -> Result<GameState, InvalidMove> {
    state.with_move(row, col, mark)
}

/// The computer's best move using the exhaustive search.
pub fn best_move(state: &GameState) -> Option<Position> {
    MoveSelector::default().best_move(state)
}

/// Current status of `state`.
pub fn status(state: &GameState) -> GameStatus {
    state.status()
}
