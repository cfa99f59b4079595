//! Strictly Ladders - snakes and ladders game logic
//!
//! A deterministic state machine for 2-4 players on the classic 100-square
//! board. Presentation layers read a [`SessionSnapshot`] and drive the game
//! through [`GameSession::start_turn`], [`GameSession::reset`] and
//! [`GameSession::set_player_count`]; [`roll_turn`] runs the timed dice
//! animation and commits exactly one roll.
//!
//! # Architecture
//!
//! - **Board**: fixed snakes and ladders, one redirect per square
//! - **Dice**: the [`Roll`] trait with random and scripted dice
//! - **Movement**: [`resolve`] turns a position and a roll into a [`Resolution`]
//! - **Session**: positions, turn order, winner and status
//! - **Contracts**: pre/postconditions and invariants checked on every commit
//!
//! # Example
//!
//! ```
//! use strictly_ladders::{GameSession, PlayerCount, ScriptedDie};
//!
//! let mut session = GameSession::new(PlayerCount::new(2).unwrap());
//! let mut die = ScriptedDie::new([1]);
//! session.play_turn(&mut die);
//! assert_eq!(session.status(), "Player 1 landed on a ladder! Climbed up to 38.");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod contracts;
mod dice;
mod error;
mod invariants;
mod movement;
mod player;
mod rolling;
mod session;
mod square;

// Crate-level exports - Board
pub use board::{BoardTopology, Redirect, TopologyViolation};

// Crate-level exports - Positions
pub use square::{GRID_SIDE, GridCoord, Square};

// Crate-level exports - Dice
pub use dice::{DieFace, RandomDie, Roll, ScriptedDie};

// Crate-level exports - Movement
pub use movement::{OutcomeKind, Resolution, resolve};

// Crate-level exports - Players and session
pub use error::SessionError;
pub use player::{PlayerCount, PlayerId};
pub use session::{
    GameSession, ROLLING_MESSAGE, RollState, SessionSnapshot, TurnPhase, TurnRecord,
    WELCOME_MESSAGE,
};

// Crate-level exports - Rolling phase
pub use rolling::{RollTiming, roll_turn};

// Crate-level exports - Contracts
pub use contracts::{Contract, NoWinner, SettleContract, StartContract};
pub use invariants::{
    CurrentPlayerInRange, Invariant, InvariantSet, InvariantViolation, PositionsInBounds,
    SessionInvariants, WinnerOnFinish,
};
