//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are testable independently and are checked as
//! postconditions in debug builds.

use crate::session::{GameSession, TurnPhase};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

/// Invariant: one position per player, each within 0-100.
pub struct PositionsInBounds;

impl Invariant<GameSession> for PositionsInBounds {
    fn holds(session: &GameSession) -> bool {
        let positions = session.positions();
        positions.len() == usize::from(session.player_count().get())
            && positions.iter().all(|sq| sq.value() <= 100)
    }

    fn description() -> &'static str {
        "Exactly one position per player, each within 0-100"
    }
}

/// Invariant: the current player takes part in the round.
pub struct CurrentPlayerInRange;

impl Invariant<GameSession> for CurrentPlayerInRange {
    fn holds(session: &GameSession) -> bool {
        session.player_count().contains(session.current_player())
    }

    fn description() -> &'static str {
        "Current player index is below the player count"
    }
}

/// Invariant: a winner exists exactly when someone stands on square 100.
///
/// The winner is the player on 100, the session is finished, and the
/// winner still holds the turn.
pub struct WinnerOnFinish;

impl Invariant<GameSession> for WinnerOnFinish {
    fn holds(session: &GameSession) -> bool {
        let on_finish: Vec<_> = session
            .player_count()
            .players()
            .filter(|id| session.position(*id).is_some_and(|sq| sq.is_finish()))
            .collect();

        match session.winner() {
            None => on_finish.is_empty() && session.phase() != TurnPhase::Finished,
            Some(winner) => {
                on_finish == [winner]
                    && session.phase() == TurnPhase::Finished
                    && session.current_player() == winner
            }
        }
    }

    fn description() -> &'static str {
        "Winner is set exactly when one player stands on square 100"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (PositionsInBounds, CurrentPlayerInRange, WinnerOnFinish);
