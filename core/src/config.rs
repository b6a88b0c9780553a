use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;

/// Side length used when none is configured.
pub const DEFAULT_SIZE: Coord = 8;

/// Largest accepted mine probability, in tenths.
pub const MAX_DIFFICULTY_TENTHS: u8 = 9;

/// Player-facing difficulty levels, each a fixed per-cell mine probability.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Numeric level `1..=3` shown by front ends.
    pub const fn level(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Mine probability per cell, in tenths.
    pub const fn tenths(self) -> u8 {
        self.level()
    }
}

/// Validated board parameters: a square side of at least one cell and a mine probability of `0..=9` tenths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    size: Coord,
    difficulty_tenths: u8,
}

impl BoardConfig {
    pub fn new(size: Coord, difficulty_tenths: u8) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidConfiguration(
                "board size must be at least 1",
            ));
        }
        if difficulty_tenths > MAX_DIFFICULTY_TENTHS {
            return Err(GameError::InvalidConfiguration(
                "difficulty must be between 0 and 9 tenths",
            ));
        }
        Ok(Self {
            size,
            difficulty_tenths,
        })
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn difficulty_tenths(&self) -> u8 {
        self.difficulty_tenths
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            difficulty_tenths: Difficulty::default().tenths(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse session config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] GameError),
}

/// User-facing session settings, as read from a config file or the command line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub size: Coord,
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible layouts, a random one is drawn when absent.
    pub seed: Option<u64>,
    pub highlight_mines: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            difficulty: Difficulty::default(),
            seed: None,
            highlight_mines: false,
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(source: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.board_config()?;
        Ok(config)
    }

    pub fn board_config(&self) -> Result<BoardConfig> {
        BoardConfig::new(self.size, self.difficulty.tenths())
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
