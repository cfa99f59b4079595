//! Player identities and the player count.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Zero-based player index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Player with the given zero-based index.
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Zero-based index into the positions list.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based number used in messages ("Player 1").
    pub const fn number(self) -> u8 {
        self.0 + 1
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Number of players in a round: 2, 3 or 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerCount(u8);

impl PlayerCount {
    /// Fewest players allowed.
    pub const MIN: u8 = 2;
    /// Most players allowed.
    pub const MAX: u8 = 4;

    /// Validates a player count.
    #[instrument]
    pub fn new(count: u8) -> Result<Self, SessionError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(SessionError::InvalidPlayerCount(count))
        }
    }

    /// Number of players.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every player id in turn order.
    pub fn players(self) -> impl Iterator<Item = PlayerId> {
        (0..self.0).map(PlayerId)
    }

    /// Whether `id` takes part in a round of this size.
    pub fn contains(self, id: PlayerId) -> bool {
        id.0 < self.0
    }

    /// Player whose turn follows `id`.
    pub fn next_after(self, id: PlayerId) -> PlayerId {
        PlayerId((id.0 + 1) % self.0)
    }
}

impl Default for PlayerCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = SessionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerCount> for u8 {
    fn from(count: PlayerCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
