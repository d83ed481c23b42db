//! Application configuration.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{DEFAULT_SIZE, Mark, SearchStrategy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Smallest supported board side.
pub const MIN_BOARD_SIZE: usize = 1;

/// Largest supported board side. Boards above 3x3 also need the
/// alpha-beta strategy; the full tree of a 4x4 board is out of reach.
pub const MAX_BOARD_SIZE: usize = 4;

/// Settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Side length N of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// How the computer walks the game tree.
    #[serde(default)]
    strategy: SearchStrategy,

    /// Whether the computer opens each game.
    #[serde(default)]
    computer_first: bool,
}

fn default_board_size() -> usize {
    DEFAULT_SIZE
}

fn default_think_delay_ms() -> u64 {
    500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            think_delay_ms: default_think_delay_ms(),
            strategy: SearchStrategy::default(),
            computer_first: false,
        }
    }
}

/// Command-line values that replace configured ones when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Board side length.
    pub board_size: Option<usize>,
    /// Computer delay in milliseconds.
    pub think_delay_ms: Option<u64>,
    /// Search strategy.
    pub strategy: Option<SearchStrategy>,
    /// Who opens: `Some(true)` for the computer, `Some(false)` for the human.
    pub computer_first: Option<bool>,
}

impl AppConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = config.board_size, strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to the defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(size) = overrides.board_size {
            self.board_size = size;
        }
        if let Some(delay) = overrides.think_delay_ms {
            self.think_delay_ms = delay;
        }
        if let Some(strategy) = overrides.strategy {
            self.strategy = strategy;
        }
        if let Some(computer_first) = overrides.computer_first {
            self.computer_first = computer_first;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "Board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            )));
        }
        if self.board_size > DEFAULT_SIZE {
            if self.strategy == SearchStrategy::Exhaustive {
                return Err(ConfigError::new(format!(
                    "Board size {} needs strategy = \"{}\"",
                    self.board_size,
                    SearchStrategy::AlphaBeta
                )));
            }
            warn!(
                board_size = self.board_size,
                "Computer moves on boards larger than 3x3 take several seconds"
            );
        }
        Ok(())
    }

    /// The computer's delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// The player who opens each game.
    pub fn first_turn(&self) -> Mark {
        if self.computer_first {
            Mark::Computer
        } else {
            Mark::Human
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
