//! Contract-based validation for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use crate::dice::DieFace;
use crate::error::SessionError;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::session::{GameSession, RollState};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

/// Precondition: nobody has won yet.
pub struct NoWinner;

impl NoWinner {
    /// Fails with `GameOver` once a winner is recorded.
    pub fn check(session: &GameSession) -> Result<(), SessionError> {
        match session.winner() {
            Some(winner) => Err(SessionError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Contract for starting a roll.
///
/// Precondition: no winner, dice not already rolling.
pub struct StartContract;

impl Contract<GameSession, ()> for StartContract {
    #[instrument(skip_all)]
    fn pre(session: &GameSession, _action: &()) -> Result<(), SessionError> {
        NoWinner::check(session)?;
        if matches!(session.roll_state(), RollState::Rolling { .. }) {
            return Err(SessionError::AlreadyRolling);
        }
        Ok(())
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), SessionError> {
        if before.positions() != after.positions()
            || before.current_player() != after.current_player()
        {
            return Err(SessionError::InvariantViolation(
                "Starting a roll moved a player".to_string(),
            ));
        }
        Ok(())
    }
}

/// Contract for committing a settled die value.
///
/// Preconditions:
/// - No winner yet
/// - Dice are rolling
///
/// Postconditions:
/// - Session invariants hold
/// - Only the mover's position may have changed
/// - Exactly one turn was recorded
pub struct SettleContract;

impl Contract<GameSession, DieFace> for SettleContract {
    #[instrument(skip(session))]
    fn pre(session: &GameSession, _face: &DieFace) -> Result<(), SessionError> {
        NoWinner::check(session)?;
        if !matches!(session.roll_state(), RollState::Rolling { .. }) {
            return Err(SessionError::NotRolling);
        }
        Ok(())
    }

    #[instrument(skip_all)]
    fn post(before: &GameSession, after: &GameSession) -> Result<(), SessionError> {
        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Session invariants violated");
            SessionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let mover = before.current_player().index();
        let bystander_moved = before
            .positions()
            .iter()
            .zip(after.positions())
            .enumerate()
            .any(|(idx, (was, now))| idx != mover && was != now);
        if bystander_moved {
            return Err(SessionError::InvariantViolation(
                "A player moved out of turn".to_string(),
            ));
        }

        if after.history().len() != before.history().len() + 1 {
            return Err(SessionError::InvariantViolation(
                "Turn history did not grow by one".to_string(),
            ));
        }
        Ok(())
    }
}
