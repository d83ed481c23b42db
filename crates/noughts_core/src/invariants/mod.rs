//! Invariants of the game state.
//!
//! Each invariant is a logical property that holds for every state reachable
//! through [`GameState::place`](crate::GameState::place). They are checked in
//! debug builds after each placement and tested independently.

use crate::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod single_winner;
pub mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// Every game-state invariant as one set.
pub type GameInvariants = (
    SingleWinnerInvariant,
    AlternatingTurnInvariant,
    StatusConsistentInvariant,
);

/// Checks every invariant against `state`.
pub fn check(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(state)
}
