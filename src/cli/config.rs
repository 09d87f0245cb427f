//! Shared configuration types for CLI commands
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional JSON file passed with `--config`, and command-line flags.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    engine::Difficulty,
    pipeline::AgentKind,
    session::MatchConfig,
    tictactoe::Player,
};

/// Everything a config file may set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub common: CommonConfig,
    pub play: PlayConfig,
    pub series: SeriesDefaults,
}

impl FileConfig {
    /// Load a JSON config file; missing sections and fields keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }
}

/// Common configuration shared across commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
        }
    }
}

/// Interactive play configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Mark the human plays
    pub human: Player,

    /// Mark that opens each board
    pub first: Player,

    pub difficulty: Difficulty,
}

impl PlayConfig {
    pub fn to_match_config(&self) -> MatchConfig {
        MatchConfig::new(self.human)
            .with_first(self.first)
            .with_difficulty(self.difficulty)
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            first: Player::X,
            difficulty: Difficulty::Hard,
        }
    }
}

/// Series configuration defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesDefaults {
    /// Number of games
    pub games: usize,

    /// Agent playing X
    pub x: AgentKind,

    /// Agent playing O
    pub o: AgentKind,

    pub first: Player,
}

impl Default for SeriesDefaults {
    fn default() -> Self {
        Self {
            games: 100,
            x: AgentKind::Random,
            o: AgentKind::Hard,
            first: Player::X,
        }
    }
}
