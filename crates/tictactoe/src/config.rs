//! Play settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Difficulty, GameMode, Player, SessionConfig};
use tracing::{debug, info, instrument};

/// Settings for interactive play.
///
/// Every field is optional in the file; command-line flags override the
/// file through the `with_` setters.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct PlayConfig {
    /// Computer strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// `pvc` to play the computer, `pvp` for two people.
    #[serde(default)]
    mode: GameMode,

    /// Who moves first.
    #[serde(default = "default_first")]
    first: Player,

    /// Seed for reproducible computer moves.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_first() -> Player {
    Player::X
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            mode: GameMode::default(),
            first: default_first(),
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file, or defaults if it is missing.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;

        info!(difficulty = %config.difficulty, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// The engine session settings these options describe.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.mode, self.difficulty, self.first)
    }
}

/// Configuration error with location tracking.
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
