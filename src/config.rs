//! Game configuration: field size, ship length, attempt cap and policy.

use crate::field::Grid;
use core::fmt;

pub const DEFAULT_DIMENSION: usize = 5;
pub const DEFAULT_SHIP_LENGTH: usize = 3;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
/// Smallest field that still leaves room to miss.
pub const MIN_DIMENSION: usize = 2;

/// Largest side length the field storage supports.
pub fn max_dimension() -> usize {
    Grid::max_dimension()
}

/// Which shots consume an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttemptPolicy {
    /// Only in-bounds shots at fresh cells count.
    #[default]
    ValidShotsOnly,
    /// Every coordinate pair entered counts, including rejected ones.
    EveryShot,
}

/// Errors returned by [`GameConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    DimensionTooSmall { dimension: usize, min: usize },
    DimensionTooLarge { dimension: usize, max: usize },
    ZeroShipLength,
    ShipTooLong { length: usize, dimension: usize },
    ZeroAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DimensionTooSmall { dimension, min } => {
                write!(f, "Field size {} is below the minimum of {}", dimension, min)
            }
            ConfigError::DimensionTooLarge { dimension, max } => {
                write!(f, "Field size {} exceeds the maximum of {}", dimension, max)
            }
            ConfigError::ZeroShipLength => write!(f, "Ship length must be at least 1"),
            ConfigError::ShipTooLong { length, dimension } => write!(
                f,
                "Ship length {} does not fit a {}x{} field",
                length, dimension, dimension
            ),
            ConfigError::ZeroAttempts => write!(f, "Attempt limit must be at least 1"),
        }
    }
}

/// Immutable settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameConfig {
    pub dimension: usize,
    pub ship_length: usize,
    /// `None` plays until the ship is sunk.
    pub max_attempts: Option<u32>,
    pub attempt_policy: AttemptPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            ship_length: DEFAULT_SHIP_LENGTH,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            attempt_policy: AttemptPolicy::default(),
        }
    }
}

impl GameConfig {
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_ship_length(mut self, ship_length: usize) -> Self {
        self.ship_length = ship_length;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_attempt_policy(mut self, policy: AttemptPolicy) -> Self {
        self.attempt_policy = policy;
        self
    }

    /// Check that the settings describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension < MIN_DIMENSION {
            return Err(ConfigError::DimensionTooSmall {
                dimension: self.dimension,
                min: MIN_DIMENSION,
            });
        }
        let max = max_dimension();
        if self.dimension > max {
            return Err(ConfigError::DimensionTooLarge {
                dimension: self.dimension,
                max,
            });
        }
        if self.ship_length == 0 {
            return Err(ConfigError::ZeroShipLength);
        }
        if self.ship_length > self.dimension {
            return Err(ConfigError::ShipTooLong {
                length: self.ship_length,
                dimension: self.dimension,
            });
        }
        if self.max_attempts == Some(0) {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}
