//! The game session: players, positions, turns and the winner.
//!
//! All state changes go through `reset`, `start_turn` and `settle_turn`,
//! so a position is never updated without the turn advancing (or the game
//! ending) in the same step.

use crate::board::BoardTopology;
use crate::contracts::{Contract, SettleContract, StartContract};
use crate::dice::{DieFace, Roll};
use crate::error::SessionError;
use crate::movement::{Resolution, resolve};
use crate::player::{PlayerCount, PlayerId};
use crate::square::Square;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Status shown before the first roll.
pub const WELCOME_MESSAGE: &str = "Roll the dice to start the game!";

/// Status shown while the dice tumble.
pub const ROLLING_MESSAGE: &str = "Rolling...";

/// Dice state for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RollState {
    /// No roll has been made this round.
    #[default]
    Idle,
    /// Dice are tumbling; `face` is the latest display value, if any.
    Rolling {
        /// Intermediate face for animation only.
        face: Option<DieFace>,
    },
    /// The last roll settled on this face.
    Settled(DieFace),
}

/// Where the turn cycle stands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum TurnPhase {
    /// Waiting for the current player to roll.
    #[strum(serialize = "awaiting roll")]
    AwaitingRoll,
    /// Dice are rolling.
    #[strum(serialize = "rolling")]
    Rolling,
    /// A player reached square 100.
    #[strum(serialize = "finished")]
    Finished,
}

/// One committed turn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    turn: u32,
    /// Player who rolled.
    player: PlayerId,
    /// How the roll resolved.
    resolution: Resolution,
}

/// Read-only view of a session for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Players in the round.
    player_count: PlayerCount,
    /// Square per player, indexed by player.
    positions: Vec<Square>,
    /// Player whose turn it is.
    current_player: PlayerId,
    /// Winner, once the game is over.
    winner: Option<PlayerId>,
    /// Turn phase.
    phase: TurnPhase,
    /// Face to draw on the die, if any.
    die_face: Option<DieFace>,
    /// Last status message.
    status: String,
    /// Whether any turn has been committed.
    started: bool,
    /// Committed turns so far.
    turns: usize,
}

/// Mutable aggregate for one round of snakes and ladders.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) board: &'static BoardTopology,
    pub(crate) player_count: PlayerCount,
    pub(crate) positions: Vec<Square>,
    pub(crate) current_player: PlayerId,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) status: String,
    pub(crate) roll_state: RollState,
    pub(crate) started: bool,
    pub(crate) history: Vec<TurnRecord>,
}

impl GameSession {
    /// Creates a session on the standard board with everyone at the start.
    #[instrument]
    pub fn new(player_count: PlayerCount) -> Self {
        info!(players = player_count.get(), "Creating game session");
        Self {
            board: BoardTopology::standard(),
            player_count,
            positions: vec![Square::START; usize::from(player_count.get())],
            current_player: PlayerId::FIRST,
            winner: None,
            status: WELCOME_MESSAGE.to_string(),
            roll_state: RollState::Idle,
            started: false,
            history: Vec::new(),
        }
    }

    /// Starts over with the same number of players.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.reset_with(self.player_count);
    }

    /// Starts over with `player_count` players. Legal in any state.
    #[instrument(skip(self))]
    pub fn reset_with(&mut self, player_count: PlayerCount) {
        info!(players = player_count.get(), "Resetting game session");
        *self = Self::new(player_count);
    }

    /// Changes the number of players, resetting the round.
    ///
    /// Refused once a turn has been played or while the dice roll.
    #[instrument(skip(self))]
    pub fn try_set_player_count(&mut self, count: u8) -> Result<(), SessionError> {
        if self.started {
            return Err(SessionError::AlreadyStarted);
        }
        if self.phase() == TurnPhase::Rolling {
            return Err(SessionError::AlreadyRolling);
        }
        let count = PlayerCount::new(count)?;
        self.reset_with(count);
        Ok(())
    }

    /// Changes the number of players, ignoring out-of-range counts and
    /// requests after the game has started. Returns whether it applied.
    #[instrument(skip(self))]
    pub fn set_player_count(&mut self, count: u8) -> bool {
        match self.try_set_player_count(count) {
            Ok(()) => true,
            Err(e @ SessionError::InvalidPlayerCount(_)) => {
                warn!(error = %e, "Ignoring player count");
                false
            }
            Err(e) => {
                debug!(error = %e, "Ignoring player count");
                false
            }
        }
    }

    /// Begins rolling the dice for the current player.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_start_turn(&mut self) -> Result<(), SessionError> {
        StartContract::pre(self, &())?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        self.roll_state = RollState::Rolling { face: None };
        self.status = ROLLING_MESSAGE.to_string();
        debug!("Dice rolling");

        #[cfg(debug_assertions)]
        StartContract::post(&before, self)?;
        Ok(())
    }

    /// Begins rolling; a no-op while rolling or after the game is won.
    /// Returns whether the roll started.
    pub fn start_turn(&mut self) -> bool {
        match self.try_start_turn() {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Ignoring start of turn");
                false
            }
        }
    }

    /// Records an intermediate face while the dice tumble.
    ///
    /// Display only: positions and the turn are untouched.
    pub fn show_face(&mut self, face: DieFace) -> bool {
        match &mut self.roll_state {
            RollState::Rolling { face: shown } => {
                *shown = Some(face);
                true
            }
            _ => false,
        }
    }

    /// Commits the settled die value: moves the current player, then
    /// either declares the winner or passes the turn.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_settle_turn(&mut self, face: DieFace) -> Result<TurnRecord, SessionError> {
        SettleContract::pre(self, &face)?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_player;
        let resolution = resolve(self.positions[player.index()], face, self.board);

        self.positions[player.index()] = resolution.new_square();
        self.status = resolution.message(player);
        self.roll_state = RollState::Settled(face);
        self.started = true;

        if resolution.is_win() {
            info!(%player, "Player reached the finish");
            self.winner = Some(player);
        } else {
            self.current_player = self.player_count.next_after(player);
        }

        let record = TurnRecord {
            turn: self.next_turn_number(),
            player,
            resolution,
        };
        self.history.push(record.clone());
        info!(
            turn = record.turn,
            roll = face.value(),
            from = resolution.origin().value(),
            to = resolution.new_square().value(),
            outcome = %resolution.kind(),
            "Turn committed"
        );

        #[cfg(debug_assertions)]
        SettleContract::post(&before, self)?;
        Ok(record)
    }

    /// Commits the settled die value; a no-op unless the dice are rolling.
    pub fn settle_turn(&mut self, face: DieFace) -> Option<TurnRecord> {
        match self.try_settle_turn(face) {
            Ok(record) => Some(record),
            Err(e @ SessionError::InvariantViolation(_)) => {
                error!(error = %e, "Turn committed with broken invariants");
                None
            }
            Err(e) => {
                debug!(error = %e, "Ignoring settle");
                None
            }
        }
    }

    /// Plays a whole turn with one roll and no animation.
    pub fn play_turn(&mut self, die: &mut impl Roll) -> Option<TurnRecord> {
        if !self.start_turn() {
            return None;
        }
        let face = die.roll();
        self.settle_turn(face)
    }

    fn next_turn_number(&self) -> u32 {
        u32::try_from(self.history.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    /// Board the session is played on.
    pub fn board(&self) -> &'static BoardTopology {
        self.board
    }

    /// Players in the round.
    pub fn player_count(&self) -> PlayerCount {
        self.player_count
    }

    /// Square per player, indexed by player.
    pub fn positions(&self) -> &[Square] {
        &self.positions
    }

    /// Square of one player, `None` for an id outside the round.
    pub fn position(&self, player: PlayerId) -> Option<Square> {
        self.positions.get(player.index()).copied()
    }

    /// Players standing on `square`, in turn order.
    pub fn players_on(&self, square: Square) -> Vec<PlayerId> {
        self.player_count
            .players()
            .filter(|id| self.position(*id) == Some(square))
            .collect()
    }

    /// Player whose turn it is (the winner once the game is over).
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Winner, once someone reaches square 100.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Last status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Dice state.
    pub fn roll_state(&self) -> RollState {
        self.roll_state
    }

    /// Face to draw on the die, if any.
    pub fn die_face(&self) -> Option<DieFace> {
        match self.roll_state {
            RollState::Idle => None,
            RollState::Rolling { face } => face,
            RollState::Settled(face) => Some(face),
        }
    }

    /// Where the turn cycle stands.
    pub fn phase(&self) -> TurnPhase {
        if self.winner.is_some() {
            TurnPhase::Finished
        } else if matches!(self.roll_state, RollState::Rolling { .. }) {
            TurnPhase::Rolling
        } else {
            TurnPhase::AwaitingRoll
        }
    }

    /// Whether any turn has been committed this round.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Committed turns, oldest first.
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Read-only copy of everything the presentation needs.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            player_count: self.player_count,
            positions: self.positions.clone(),
            current_player: self.current_player,
            winner: self.winner,
            phase: self.phase(),
            die_face: self.die_face(),
            status: self.status.clone(),
            started: self.started,
            turns: self.history.len(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(PlayerCount::default())
    }
}
