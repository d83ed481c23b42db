//! Players alternate, starting with the opener.

use super::Invariant;
use crate::{GameState, GameStatus};

/// Invariant: mark counts and the turn marker agree with strict alternation.
///
/// The opener has either as many marks as the second player or exactly one
/// more. While the game is running the turn marker names the player with
/// fewer moves (the opener on ties); once it ends it names the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let first = state.first_turn();
        let Some(second) = first.opponent() else {
            return false;
        };
        let first_count = state.board().count(first);
        let second_count = state.board().count(second);
        if first_count != second_count && first_count != second_count + 1 {
            return false;
        }

        let next = if first_count == second_count { first } else { second };
        match state.status() {
            GameStatus::InProgress => state.current_turn() == next,
            _ => next.opponent() == Some(state.current_turn()),
        }
    }

    fn description() -> &'static str {
        "Turns alternate strictly from the opening player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_holds_through_a_game() {
        let mut state = GameState::with_first_turn(3, Mark::Computer);
        assert!(AlternatingTurnInvariant::holds(&state));
        for (row, col) in [(1, 1), (0, 0), (2, 2), (0, 2)] {
            let mark = state.current_turn();
            state.place(row, col, mark).unwrap();
            assert!(AlternatingTurnInvariant::holds(&state));
        }
    }
}
