use std::path::{Path, PathBuf};

use checkers_core::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Session settings. The human opens as black by default and the engine
/// answers as red.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Side the human plays
    pub human: Player,
    /// Search depth of the engine's replies
    pub engine_depth: u8,
    /// Search depth used to rank hints for the human
    pub hint_depth: u8,
    /// Print the top hints before each human move
    pub show_hints: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Player::Black,
            engine_depth: 6,
            hint_depth: 4,
            show_hints: true,
        }
    }
}

impl PlayConfig {
    pub fn engine_player(&self) -> Player {
        self.human.other()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
