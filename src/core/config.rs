//! Engine configuration: play mode, board size, RNG seed.
//!
//! `EngineConfig` is built in code with the `with_*` methods or loaded from
//! TOML. Missing keys fall back to the defaults (3×3, single-player,
//! entropy-seeded):
//!
//! ```toml
//! side_length = 3
//! two_players = true
//! seed = 42
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::board::STANDARD_SIDE_LENGTH;
use crate::error::ConfigError;

/// Largest supported side length.
pub const MAX_SIDE_LENGTH: usize = 16;

/// Who plays the second seat.
///
/// Persists across resets; only `set_mode` changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Player two is the random AI.
    #[default]
    SinglePlayer,
    /// Both seats are human.
    TwoPlayer,
}

impl Mode {
    #[must_use]
    pub const fn from_two_players(two_players: bool) -> Self {
        if two_players {
            Mode::TwoPlayer
        } else {
            Mode::SinglePlayer
        }
    }

    #[must_use]
    pub const fn is_two_players(self) -> bool {
        matches!(self, Mode::TwoPlayer)
    }
}

/// Engine configuration, loadable from TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board side length N (N×N cells, N in a row wins).
    pub side_length: usize,

    /// Start in two-player mode.
    pub two_players: bool,

    /// AI seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            side_length: STANDARD_SIDE_LENGTH,
            two_players: false,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board side length.
    #[must_use]
    pub fn with_side_length(mut self, side_length: usize) -> Self {
        self.side_length = side_length;
        self
    }

    /// Set the initial mode.
    #[must_use]
    pub fn with_two_players(mut self, two_players: bool) -> Self {
        self.two_players = two_players;
        self
    }

    /// Fix the AI seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Initial mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        Mode::from_two_players(self.two_players)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side_length == 0 {
            return Err(ConfigError::Validation(
                "side_length must be >= 1".into(),
            ));
        }
        if self.side_length > MAX_SIDE_LENGTH {
            return Err(ConfigError::Validation(format!(
                "side_length must be <= {MAX_SIDE_LENGTH}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&EngineConfig::default())
    }
}
