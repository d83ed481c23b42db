//! Text formats for boards and player input.

use noughts_core::{Board, GameState, InvalidBoard, Mark, Position};
use tracing::instrument;

/// Why a board string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum BoardParseError {
    /// A character that is not a mark, an empty marker, `/` or whitespace.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidSymbol(char),

    /// The number of cells is not a non-zero perfect square.
    #[display("A board needs N*N cells, got {}", _0)]
    NotSquare(usize),

    /// The marks could not have come from legal play.
    #[display("Unreachable position: {}", _0)]
    #[from]
    Unreachable(InvalidBoard),
}

impl std::error::Error for BoardParseError {}

/// Parses a board written as `X`, `O` and `.` cells in row-major order.
///
/// `-` and `_` also mark empty cells; whitespace and `/` are ignored so
/// `"XO./.X./..."` and `"XO. .X. ..."` are the same board.
pub fn parse_board(text: &str) -> Result<Board, BoardParseError> {
    let cells = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '/')
        .map(|c| Mark::from_symbol(c).ok_or(BoardParseError::InvalidSymbol(c)))
        .collect::<Result<Vec<_>, _>>()?;
    let count = cells.len();
    Board::from_cells(cells).ok_or(BoardParseError::NotSquare(count))
}

/// Parses a board and reconstructs the game state it represents.
#[instrument]
pub fn parse_state(text: &str, first: Mark) -> Result<GameState, BoardParseError> {
    let board = parse_board(text)?;
    Ok(GameState::from_board(board, first)?)
}

/// A line typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the human's mark.
    Place(Position),
    /// Start a new game.
    Restart,
    /// Leave.
    Quit,
}

/// Interprets one line of player input.
///
/// Accepts `row col` (zero-based), a 1-based cell number as shown on the
/// board, `r`/`restart`, and `q`/`quit`/`exit`. Coordinates are not range
/// checked here; the game reports those as invalid moves.
pub fn parse_input(line: &str, size: usize) -> Option<Input> {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "q" | "quit" | "exit" => return Some(Input::Quit),
        "r" | "restart" => return Some(Input::Restart),
        _ => {}
    }

    let numbers = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    match numbers.as_slice() {
        [cell] => Position::from_cell_number(*cell, size).map(Input::Place),
        [row, col] => Some(Input::Place(Position::new(*row, *col))),
        _ => None,
    }
}

/// 1-based cell number of `position`, matching the board rendering.
pub fn cell_number(position: Position, size: usize) -> usize {
    position.row * size + position.col + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_separators() {
        let a = parse_board("XO./.X./...").unwrap();
        let b = parse_board("XO. .X. ...").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.size(), 3);
    }

    #[test]
    fn test_parse_board_errors() {
        assert_eq!(parse_board("XO?"), Err(BoardParseError::InvalidSymbol('?')));
        assert_eq!(parse_board("XO..").map(|b| b.size()), Ok(2));
        assert_eq!(parse_board("XO..."), Err(BoardParseError::NotSquare(5)));
        assert_eq!(parse_board(""), Err(BoardParseError::NotSquare(0)));
    }

    #[test]
    fn test_parse_state_unreachable() {
        assert!(matches!(
            parse_state("OO. ... ...", Mark::Human),
            Err(BoardParseError::Unreachable(_))
        ));
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("q\n", 3), Some(Input::Quit));
        assert_eq!(parse_input(" Restart ", 3), Some(Input::Restart));
        assert_eq!(parse_input("5", 3), Some(Input::Place(Position::new(1, 1))));
        assert_eq!(parse_input("0 2", 3), Some(Input::Place(Position::new(0, 2))));
        assert_eq!(parse_input("2,1", 3), Some(Input::Place(Position::new(2, 1))));
        assert_eq!(parse_input("7 7", 3), Some(Input::Place(Position::new(7, 7))));
        assert_eq!(parse_input("10", 3), None);
        assert_eq!(parse_input("banana", 3), None);
        assert_eq!(parse_input("", 3), None);
    }

    #[test]
    fn test_cell_number() {
        assert_eq!(cell_number(Position::new(0, 0), 3), 1);
        assert_eq!(cell_number(Position::new(2, 1), 3), 8);
    }
}
