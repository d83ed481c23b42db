//! noughts - terminal tic-tac-toe against a minimax opponent.

use anyhow::{Result, bail};
use clap::Parser;
use noughts::cli::{BoardArgs, Cli, Command, PlayArgs};
use noughts::{
    AppConfig, ConfigOverrides, GameSession, Mark, MoveSelector, Terminal, cell_number, parse_state,
};
use serde_json::json;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Command::Play(args)) => run_play(args),
        Some(Command::BestMove(args)) => run_best_move(args),
        Some(Command::Analyze(args)) => run_analyze(args),
        None => run_play(PlayArgs {
            config: "noughts.toml".into(),
            ..Default::default()
        }),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,noughts=info,noughts_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %args.config.display()))]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = AppConfig::load_or_default(&args.config)?.with_overrides(ConfigOverrides {
        board_size: args.size,
        think_delay_ms: args.think_ms,
        strategy: args.strategy,
        computer_first: args.computer_first,
    })?;
    info!(?config, "Starting game");

    let mut session = GameSession::new(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock(), config.think_delay());
    terminal.run(&mut session)?;

    info!(games = session.games_started(), "Session finished");
    Ok(())
}

/// Print the computer's move for a board
#[instrument(skip_all, fields(board = %args.board))]
fn run_best_move(args: BoardArgs) -> Result<()> {
    let state = parse_state(&args.board, first_turn(&args))?;
    let Some(position) = MoveSelector::new(args.strategy).best_move(&state) else {
        bail!(
            "The computer has no move: status {:?}, {:?} to move",
            state.status(),
            state.current_turn()
        );
    };

    if args.json {
        let cell = cell_number(position, state.size());
        println!("{}", json!({ "row": position.row, "col": position.col, "cell": cell }));
    } else {
        println!("{} {}", position.row, position.col);
    }
    Ok(())
}

/// Print every computer move with its score
#[instrument(skip_all, fields(board = %args.board))]
fn run_analyze(args: BoardArgs) -> Result<()> {
    let state = parse_state(&args.board, first_turn(&args))?;
    let scores = MoveSelector::new(args.strategy).score_moves(&state);
    if scores.is_empty() {
        bail!(
            "The computer has no move: status {:?}, {:?} to move",
            state.status(),
            state.current_turn()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        println!("{}\n", state.board().display());
        for scored in &scores {
            let cell = cell_number(scored.position, state.size());
            println!("cell {cell:>2} {}  score {:>3}", scored.position, scored.score);
        }
    }
    Ok(())
}

fn first_turn(args: &BoardArgs) -> Mark {
    if args.computer_first {
        Mark::Computer
    } else {
        Mark::Human
    }
}
