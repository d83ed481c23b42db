//! noughts - tic-tac-toe against a computer that searches the whole game tree.
//!
//! The game rules and the minimax search live in [`noughts_core`]. This crate
//! is the terminal front end around them.
//!
//! # Architecture
//!
//! - **Config**: defaults, TOML file and CLI overrides ([`AppConfig`])
//! - **Session**: one game at a time with restart and status messages ([`GameSession`])
//! - **Terminal**: renders the board and reads moves over any reader/writer ([`Terminal`])
//! - **Board input**: text formats for boards and moves
//!
//! # Example
//!
//! ```
//! use noughts::{AppConfig, ConfigOverrides, GameSession, Terminal};
//! use std::time::Duration;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::default().with_overrides(ConfigOverrides {
//!     think_delay_ms: Some(0),
//!     ..Default::default()
//! })?;
//! let mut session = GameSession::new(&config);
//! let input = std::io::Cursor::new("5\nq\n");
//! let mut terminal = Terminal::new(input, Vec::new(), Duration::ZERO);
//! terminal.run(&mut session)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_input;
pub mod cli;
mod config;
mod session;
mod terminal;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, ConfigOverrides, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

// Crate-level exports - Text formats
pub use board_input::{BoardParseError, Input, cell_number, parse_board, parse_input, parse_state};

// Crate-level exports - Game flow
pub use session::GameSession;
pub use terminal::Terminal;

// Crate-level exports - Core game types
pub use noughts_core::{
    Board, GameState, GameStatus, InvalidMove, Mark, MoveSelector, Position, ScoredMove,
    SearchStrategy,
};
