//! Minimax move selection for the computer player.
//!
//! The search explores the whole remaining game tree. Terminal positions
//! score `W - depth` for a computer line, `depth - W` for a human line and
//! zero for a draw, so faster wins and slower losses are preferred. Nothing
//! else is ever evaluated: there is no depth cutoff and no heuristic.

use super::position::Position;
use super::rules::{has_line, is_full};
use super::state::{GameState, GameStatus};
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Base magnitude of a win on boards up to 3×3.
const BASE_WIN_SCORE: i32 = 10;

/// How the game tree is walked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchStrategy {
    /// Plain minimax over every node.
    #[default]
    Exhaustive,
    /// Fail-soft alpha-beta. Same move, fewer nodes.
    AlphaBeta,
}

/// A candidate computer move with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ScoredMove {
    /// The cell.
    pub position: Position,
    /// Score from the computer's point of view.
    pub score: i32,
}

/// Picks the computer's move by exhaustive minimax search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveSelector {
    strategy: SearchStrategy,
}

impl MoveSelector {
    /// Creates a selector using `strategy`.
    pub fn new(strategy: SearchStrategy) -> Self {
        Self { strategy }
    }

    /// The configured strategy.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Returns the best cell for the computer, or `None` if the computer
    /// cannot move (the game is over or it is the human's turn).
    ///
    /// Cells are tried in row-major order and only a strictly higher score
    /// replaces the current best, so ties go to the first cell. The state is
    /// only read; the search places and undoes marks on its own copy.
    #[instrument(skip(self, state), fields(strategy = %self.strategy, board = %state.board().compact()))]
    pub fn best_move(&self, state: &GameState) -> Option<Position> {
        if !can_move(state) {
            return None;
        }

        let mut search = Search::new(state.board(), self.strategy);
        let mut best: Option<ScoredMove> = None;

        for idx in 0..search.board.cell_count() {
            if search.board.at(idx) != Mark::Empty {
                continue;
            }
            let alpha = match (self.strategy, best) {
                (SearchStrategy::AlphaBeta, Some(current)) => current.score,
                _ => i32::MIN,
            };

            search.board.put(idx, Mark::Computer);
            let score = search.minimax(0, false, alpha, i32::MAX);
            search.board.put(idx, Mark::Empty);

            if best.is_none_or(|current| score > current.score) {
                best = Some(ScoredMove::new(Position::from_index(idx, state.size()), score));
            }
        }

        debug!(nodes = search.nodes, best = ?best, "Search finished");
        best.map(|scored| scored.position)
    }

    /// Exact score of every computer move, in row-major order.
    ///
    /// Each move is searched with a full window, so the scores are exact
    /// under either strategy. Empty when the computer cannot move.
    #[instrument(skip(self, state), fields(strategy = %self.strategy))]
    pub fn score_moves(&self, state: &GameState) -> Vec<ScoredMove> {
        if !can_move(state) {
            return Vec::new();
        }

        let mut search = Search::new(state.board(), self.strategy);
        let mut scored = Vec::new();
        for idx in 0..search.board.cell_count() {
            if search.board.at(idx) != Mark::Empty {
                continue;
            }
            search.board.put(idx, Mark::Computer);
            let score = search.minimax(0, false, i32::MIN, i32::MAX);
            search.board.put(idx, Mark::Empty);
            scored.push(ScoredMove::new(Position::from_index(idx, state.size()), score));
        }

        debug!(nodes = search.nodes, moves = scored.len(), "Scoring finished");
        scored
    }
}

/// Precondition for both search entry points.
fn can_move(state: &GameState) -> bool {
    if state.status() != GameStatus::InProgress {
        warn!(status = ?state.status(), "Move requested for a finished game");
        return false;
    }
    if state.current_turn() != Mark::Computer {
        warn!(turn = ?state.current_turn(), "Move requested out of turn");
        return false;
    }
    true
}

/// Win magnitude for a board with `cells` cells.
///
/// Stays above the deepest possible depth so a slow win never scores at or
/// below a draw. Exactly [`BASE_WIN_SCORE`] up to 3×3.
pub fn win_score(cells: usize) -> i32 {
    let cells = i32::try_from(cells).unwrap_or(i32::MAX - 1);
    BASE_WIN_SCORE.max(cells + 1)
}

/// Scratch board plus bookkeeping for one search.
struct Search {
    board: Board,
    strategy: SearchStrategy,
    win_score: i32,
    nodes: u64,
}

impl Search {
    fn new(board: &Board, strategy: SearchStrategy) -> Self {
        Self {
            board: board.clone(),
            strategy,
            win_score: win_score(board.cell_count()),
            nodes: 0,
        }
    }

    /// Score of a finished position, checked human line, computer line, full board.
    fn terminal_score(&self, depth: i32) -> Option<i32> {
        if has_line(&self.board, Mark::Human) {
            Some(-self.win_score + depth)
        } else if has_line(&self.board, Mark::Computer) {
            Some(self.win_score - depth)
        } else if is_full(&self.board) {
            Some(0)
        } else {
            None
        }
    }

    /// Minimax value of the scratch board with the given side to move.
    ///
    /// `alpha`/`beta` only cut the loop under [`SearchStrategy::AlphaBeta`];
    /// the exhaustive walk tracks them but visits every child.
    fn minimax(&mut self, depth: i32, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(depth) {
            return score;
        }

        let mark = if maximizing { Mark::Computer } else { Mark::Human };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for idx in 0..self.board.cell_count() {
            if self.board.at(idx) != Mark::Empty {
                continue;
            }

            self.board.put(idx, mark);
            let score = self.minimax(depth + 1, !maximizing, alpha, beta);
            self.board.put(idx, Mark::Empty);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if self.strategy == SearchStrategy::AlphaBeta && beta <= alpha {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(rows: &str) -> GameState {
        let cells = rows.chars().filter_map(Mark::from_symbol).collect();
        GameState::from_board(Board::from_cells(cells).unwrap(), Mark::Human).unwrap()
    }

    #[test]
    fn test_win_score() {
        assert_eq!(win_score(1), 10);
        assert_eq!(win_score(9), 10);
        assert_eq!(win_score(16), 17);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O can finish the middle row; X threatens the top row.
        let state = state("XX. OO. X..");
        let selector = MoveSelector::default();
        assert_eq!(selector.best_move(&state), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let state = state("XX. .O. ...");
        assert_eq!(MoveSelector::default().best_move(&state), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_scores_prefer_faster_win() {
        let state = state("XX. OO. X..");
        let scores = MoveSelector::default().score_moves(&state);
        let winning = scores.iter().find(|s| s.position == Position::new(1, 2)).unwrap();
        assert_eq!(winning.score, 10);
        assert!(scores.iter().all(|s| s.score <= 10));
    }

    #[test]
    fn test_scores_prefer_slower_loss() {
        // X threatens the diagonal; blocking it still loses to a fork two plies later.
        let state = state("XO. .X. ...");
        let scores = MoveSelector::default().score_moves(&state);
        assert!(scores.iter().all(|s| s.score < 0), "{scores:?}");

        let block = scores.iter().find(|s| s.position == Position::new(2, 2)).unwrap();
        assert_eq!(block.score, -7);
        assert!(
            scores
                .iter()
                .filter(|s| s.position != block.position)
                .all(|s| s.score == -9)
        );
        assert_eq!(MoveSelector::default().best_move(&state), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_scores_are_row_major() {
        let state = state("X.. ... ...");
        let scores = MoveSelector::default().score_moves(&state);
        let positions: Vec<_> = scores.iter().map(|s| s.position).collect();
        assert_eq!(positions, state.empty_positions());
    }

    #[test]
    fn test_search_leaves_state_untouched() {
        let state = state("X.. .O. ..X");
        let before = state.clone();
        MoveSelector::default().best_move(&state);
        MoveSelector::new(SearchStrategy::AlphaBeta).score_moves(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_no_move_when_not_computer_turn() {
        let state = GameState::new(3);
        assert_eq!(MoveSelector::default().best_move(&state), None);
        assert!(MoveSelector::default().score_moves(&state).is_empty());
    }

    #[test]
    fn test_no_move_when_game_over() {
        let state = state("XXX OO. ...");
        assert_eq!(MoveSelector::default().best_move(&state), None);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(SearchStrategy::AlphaBeta.to_string(), "alpha-beta");
        assert_eq!("exhaustive".parse::<SearchStrategy>(), Ok(SearchStrategy::Exhaustive));
    }

    #[test]
    fn test_alpha_beta_agrees_with_exhaustive() {
        use strum::IntoEnumIterator;

        for rows in ["X.. ... ...", ".X. ... ...", "X.. .O. ..X", "X.O .X. ...", "XO. ... ..X"] {
            let state = state(rows);
            let moves: Vec<_> = SearchStrategy::iter()
                .map(|strategy| MoveSelector::new(strategy).best_move(&state))
                .collect();
            assert!(moves.windows(2).all(|w| w[0] == w[1]), "disagreement on {rows}");
        }
    }
}
