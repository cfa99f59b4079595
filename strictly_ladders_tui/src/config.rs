//! Game configuration from TOML files and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_ladders::{PlayerCount, RandomDie, RollTiming};
use tracing::{debug, info, instrument, warn};

/// Settings for a game run.
///
/// ```toml
/// players = 3
/// seed = 42
///
/// [roll]
/// duration_ms = 1000
/// tick_ms = 100
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (2-4).
    players: Option<u8>,

    /// Seed for reproducible dice.
    seed: Option<u64>,

    /// Rolling phase timing.
    roll: RollTiming,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(players = ?config.players, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line values over the file's.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, players: Option<u8>, seed: Option<u64>) -> Self {
        if players.is_some() {
            self.players = players;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Validated player count; defaults to two.
    pub fn player_count(&self) -> Result<PlayerCount, ConfigError> {
        match self.players {
            None => Ok(PlayerCount::default()),
            Some(n) => PlayerCount::new(n).map_err(|e| {
                warn!(players = n, "Rejecting player count");
                ConfigError::new(e.to_string())
            }),
        }
    }

    /// Die for this run, seeded when a seed is configured.
    pub fn die(&self) -> RandomDie {
        self.seed.map_or_else(RandomDie::from_entropy, RandomDie::seeded)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "players = 3\nseed = 42\n\n[roll]\nduration_ms = 500\ntick_ms = 50"
        )
        .unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.player_count().unwrap().get(), 3);
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(config.roll().duration_ms, 500);
        assert_eq!(config.roll().tick_ms, 50);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 1").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.player_count().unwrap(), PlayerCount::default());
        assert_eq!(*config.roll(), RollTiming::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = GameConfig {
            players: Some(4),
            seed: Some(1),
            roll: RollTiming::default(),
        }
        .with_overrides(Some(2), None);
        assert_eq!(*config.players(), Some(2));
        assert_eq!(*config.seed(), Some(1));
    }

    #[test]
    fn test_invalid_player_count_is_an_error() {
        let config = GameConfig::default().with_overrides(Some(7), None);
        let err = config.player_count().unwrap_err();
        assert!(err.message.contains("Invalid player count 7"));
    }

    #[test]
    fn test_unreadable_file() {
        let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "players = \"three\"").unwrap();
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
