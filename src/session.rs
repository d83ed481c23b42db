//! One human-versus-computer game with restart.
//!
//! Turns follow a two-phase protocol: the front end applies the human's
//! move, then (after whatever pause it likes) asks for the computer's move.
//! The session itself never waits.

use crate::config::AppConfig;
use noughts_core::rules::winning_line;
use noughts_core::{GameState, GameStatus, InvalidMove, Mark, MoveSelector, Position};
use tracing::{info, instrument, warn};

/// A running game plus what is needed to start the next one.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    selector: MoveSelector,
    size: usize,
    first_turn: Mark,
    games_started: u32,
}

impl GameSession {
    /// Creates a session and starts its first game.
    #[instrument(skip(config), fields(size = config.board_size(), strategy = %config.strategy()))]
    pub fn new(config: &AppConfig) -> Self {
        let size = *config.board_size();
        let first_turn = config.first_turn();
        info!("Starting session");
        Self {
            state: GameState::with_first_turn(size, first_turn),
            selector: MoveSelector::new(*config.strategy()),
            size,
            first_turn,
            games_started: 1,
        }
    }

    /// The current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Games started in this session, including the current one.
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// True when the game is running and the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        self.state.status() == GameStatus::InProgress && self.state.current_turn() == Mark::Computer
    }

    /// Applies the human's move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the cell is taken or off the board, the game
    /// is over, or it is the computer's turn. The game is unchanged.
    #[instrument(skip(self), fields(game = self.games_started))]
    pub fn human_move(&mut self, position: Position) -> Result<GameStatus, InvalidMove> {
        self.state
            .place(position.row, position.col, Mark::Human)
            .inspect_err(|err| warn!(%err, "Rejected human move"))
    }

    /// Picks and applies the computer's move.
    ///
    /// Returns `Ok(None)` when it is not the computer's turn.
    #[instrument(skip(self), fields(game = self.games_started))]
    pub fn computer_move(&mut self) -> Result<Option<Position>, InvalidMove> {
        if !self.is_computer_turn() {
            return Ok(None);
        }
        let Some(position) = self.selector.best_move(&self.state) else {
            return Ok(None);
        };
        self.state.place(position.row, position.col, Mark::Computer)?;
        info!(%position, "Computer moved");
        Ok(Some(position))
    }

    /// Throws the current game away and starts a fresh one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = GameState::with_first_turn(self.size, self.first_turn);
        self.games_started += 1;
        info!(game = self.games_started, "Game restarted");
    }

    /// Cells of the line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Vec<Position>> {
        match self.state.status() {
            GameStatus::Won(mark) => winning_line(self.state.board(), mark),
            _ => None,
        }
    }

    /// Status line for the current game.
    pub fn status_message(&self) -> &'static str {
        match self.state.status() {
            GameStatus::InProgress if self.state.current_turn() == Mark::Human => "Your turn",
            GameStatus::InProgress => "Computer's turn",
            GameStatus::Won(Mark::Human) => "You win!",
            GameStatus::Won(_) => "Computer wins!",
            GameStatus::Drawn => "It's a draw!",
        }
    }
}
