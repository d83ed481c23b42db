//! At most one player holds a line.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: the human and the computer never both have a complete line.
///
/// Play stops at the first line, so a second one can never be drawn.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        !(state.winner(Mark::Human) && state.winner(Mark::Computer))
    }

    fn description() -> &'static str {
        "At most one player has a winning line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        assert!(SingleWinnerInvariant::holds(&GameState::new(3)));
    }

    #[test]
    fn test_holds_after_win() {
        let mut state = GameState::new(3);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            let mark = state.current_turn();
            state.place(row, col, mark).unwrap();
        }
        assert!(SingleWinnerInvariant::holds(&state));
    }
}
