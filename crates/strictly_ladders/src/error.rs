//! Errors for rejected session operations.

use crate::player::PlayerId;

/// Reason a session operation was refused.
///
/// The public session operations treat these as no-ops; the `try_*`
/// variants surface them for callers that want to know.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// Player count outside 2-4.
    #[display("Invalid player count {}: must be 2, 3 or 4", _0)]
    InvalidPlayerCount(u8),

    /// The player count is locked once a turn has been played.
    #[display("Player count cannot change after the game has started")]
    AlreadyStarted,

    /// A winner exists; only reset is allowed.
    #[display("Game is already over: {} won", _0)]
    GameOver(PlayerId),

    /// A roll is in progress.
    #[display("Dice are already rolling")]
    AlreadyRolling,

    /// No roll is in progress to settle.
    #[display("No roll in progress")]
    NotRolling,

    /// A postcondition failed after a state transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SessionError {}
