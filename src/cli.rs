//! Command-line interface for noughts.

use clap::{Args, Parser, Subcommand};
use noughts_core::SearchStrategy;

/// Play tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play(PlayArgs),

    /// Print the computer's best move for a board
    BestMove(BoardArgs),

    /// Print the minimax score of every computer move for a board
    Analyze(BoardArgs),
}

/// Options for `play`.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Board side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Milliseconds to pause before the computer moves
    #[arg(long)]
    pub think_ms: Option<u64>,

    /// Search strategy (exhaustive or alpha-beta)
    #[arg(long)]
    pub strategy: Option<SearchStrategy>,

    /// Let the computer open (`--computer-first false` overrides the config file)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub computer_first: Option<bool>,
}

/// Options for commands that take a board.
#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Board cells in row-major order: X (you), O (computer), . (empty), e.g. "XX./.O./..."
    #[arg(long)]
    pub board: String,

    /// The computer opened the game this board came from
    #[arg(long)]
    pub computer_first: bool,

    /// Search strategy (exhaustive or alpha-beta)
    #[arg(long, default_value_t = SearchStrategy::Exhaustive)]
    pub strategy: SearchStrategy,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
