//! Status agrees with the board.

use super::Invariant;
use crate::{GameState, GameStatus};

/// Invariant: the stored status is exactly what the board implies.
///
/// `Won(m)` requires a line for `m` and none for the opponent, `Drawn`
/// requires a full board without lines, and `InProgress` requires an open
/// board without lines.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        match state.status() {
            GameStatus::Won(mark) => {
                state.winner(mark) && !mark.opponent().is_some_and(|other| state.winner(other))
            }
            GameStatus::Drawn => state.is_full() && !any_line(state),
            GameStatus::InProgress => !state.is_full() && !any_line(state),
        }
    }

    fn description() -> &'static str {
        "Status matches the lines and fill of the board"
    }
}

fn any_line(state: &GameState) -> bool {
    state.winner(crate::Mark::Human) || state.winner(crate::Mark::Computer)
}
