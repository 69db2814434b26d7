//! Game configuration loaded from TOML.

use crate::cli::GameArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_pegs::{ConstructionError, Game, Layout, Player, Rules};
use tracing::{debug, info, instrument};

/// Starting position and rules for a game.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PegConfig {
    /// Named starting board.
    #[serde(default)]
    #[getter(copy)]
    layout: Layout,

    /// Who moves first.
    #[serde(default = "default_first_player")]
    #[getter(copy)]
    first_player: Player,

    /// Rule set.
    #[serde(default)]
    #[getter(copy)]
    rules: RulesConfig,
}

#[instrument]
fn default_first_player() -> Player {
    Player::One
}

/// The `[rules]` table, in snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Multi-peg takes must be contiguous.
    #[getter(copy)]
    adjacent_required: bool,
    /// Fewest pegs per ply.
    #[getter(copy)]
    min_num_of_pegs_can_take: u32,
    /// Most pegs per ply.
    #[getter(copy)]
    max_num_of_pegs_can_take: u32,
    /// Multi-peg takes stay within one row.
    #[getter(copy)]
    x_only: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Rules::default().into()
    }
}

impl From<Rules> for RulesConfig {
    fn from(rules: Rules) -> Self {
        Self {
            adjacent_required: rules.adjacent_required(),
            min_num_of_pegs_can_take: rules.min_num_of_pegs_can_take(),
            max_num_of_pegs_can_take: rules.max_num_of_pegs_can_take(),
            x_only: rules.x_only(),
        }
    }
}

impl From<RulesConfig> for Rules {
    fn from(config: RulesConfig) -> Self {
        Rules::new(
            config.adjacent_required,
            config.min_num_of_pegs_can_take,
            config.max_num_of_pegs_can_take,
            config.x_only,
        )
    }
}

impl Default for PegConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            first_player: default_first_player(),
            rules: RulesConfig::default(),
        }
    }
}

impl PegConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(layout = %config.layout, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, args: &GameArgs) -> Self {
        if let Some(layout) = args.layout {
            self.layout = layout;
        }
        if let Some(min) = args.min {
            self.rules.min_num_of_pegs_can_take = min;
        }
        if let Some(max) = args.max {
            self.rules.max_num_of_pegs_can_take = max;
        }
        if let Some(adjacent) = args.adjacent {
            self.rules.adjacent_required = adjacent;
        }
        if let Some(x_only) = args.x_only {
            self.rules.x_only = x_only;
        }
        if args.second_player {
            self.first_player = Player::Two;
        }
        self
    }

    /// Builds the configured starting position.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if the configured rules are invalid.
    #[instrument(skip(self), fields(layout = %self.layout))]
    pub fn build_game(&self) -> Result<Game, ConstructionError> {
        Game::with_first_player(self.rules.into(), self.layout.board()?, self.first_player)
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
