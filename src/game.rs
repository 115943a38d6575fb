use core::fmt;
use log::{debug, info};

use crate::{
    common::{FieldError, ShotError, ShotOutcome},
    config::{AttemptPolicy, ConfigError, GameConfig},
    field::Field,
    placement::{place_ship, PlacementSource},
    ship::Ship,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    /// Field is empty, waiting for the ship.
    Setup,
    Playing,
    /// Every ship cell has been hit.
    Won,
    /// Attempt limit reached without sinking the ship.
    Exhausted,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Exhausted)
    }
}

/// Errors returned by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Config(ConfigError),
    Field(FieldError),
    Shot(ShotError),
    /// `setup` called after the ship was placed.
    NotInSetup,
    /// `fire` called before setup or after the game ended.
    NotPlaying(GameStatus),
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl From<FieldError> for GameError {
    fn from(err: FieldError) -> Self {
        GameError::Field(err)
    }
}

impl From<ShotError> for GameError {
    fn from(err: ShotError) -> Self {
        GameError::Shot(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Config(e) => write!(f, "Invalid configuration: {}", e),
            GameError::Field(e) => write!(f, "Field error: {}", e),
            GameError::Shot(e) => write!(f, "{}", e),
            GameError::NotInSetup => write!(f, "The ship has already been placed"),
            GameError::NotPlaying(status) => {
                write!(f, "No shots accepted while the game is {:?}", status)
            }
        }
    }
}

/// End-of-game statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSummary {
    pub status: GameStatus,
    pub attempts: u32,
    pub hits: u32,
    /// `hits / attempts`, zero when no attempt was made.
    pub accuracy: f64,
    /// Accuracy as a percentage rounded to one decimal.
    pub accuracy_percent: f64,
}

/// Hits over attempts, guarding against a zero denominator.
pub fn accuracy(hits: u32, attempts: u32) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        hits as f64 / attempts as f64
    }
}

/// One single-player game: a field with one hidden ship and the shot tallies.
pub struct GameSession {
    config: GameConfig,
    field: Field,
    status: GameStatus,
    attempts: u32,
    hits: u32,
    remaining: usize,
}

impl GameSession {
    /// Create a session in [`GameStatus::Setup`] with an all-water field.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let field = Field::new(config.dimension)?;
        Ok(Self {
            config,
            field,
            status: GameStatus::Setup,
            attempts: 0,
            hits: 0,
            remaining: 0,
        })
    }

    /// Place the ship and start play.
    pub fn setup<S: PlacementSource>(&mut self, source: &mut S) -> Result<Ship, GameError> {
        if self.status != GameStatus::Setup {
            return Err(GameError::NotInSetup);
        }
        self.field.reset();
        let ship = place_ship(&mut self.field, source, self.config.ship_length)?;
        self.remaining = self.field.remaining_ship_cells();
        self.status = GameStatus::Playing;
        info!(
            "game started: {}x{} field, ship length {}, attempts {:?}",
            self.config.dimension, self.config.dimension, self.config.ship_length, self.config.max_attempts
        );
        Ok(ship)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Ship cells still afloat.
    pub fn remaining_ship_cells(&self) -> usize {
        self.remaining
    }

    /// Attempts left before exhaustion, `None` when unlimited.
    pub fn attempts_left(&self) -> Option<u32> {
        self.config
            .max_attempts
            .map(|max| max.saturating_sub(self.attempts))
    }

    /// Fire at (row, col). Signed so that negative input reports as an
    /// invalid coordinate rather than failing to parse.
    pub fn fire(&mut self, row: i64, col: i64) -> Result<ShotOutcome, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::NotPlaying(self.status));
        }
        let res = match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => self.field.shoot(r, c),
            _ => Err(ShotError::InvalidCoordinate { row, col }),
        };
        match res {
            Ok(outcome) => {
                self.attempts = self.attempts.saturating_add(1);
                if outcome == ShotOutcome::Hit {
                    self.hits = self.hits.saturating_add(1);
                }
                self.remaining = self.field.remaining_ship_cells();
                if self.remaining == 0 {
                    self.status = GameStatus::Won;
                    info!("ship sunk after {} attempts", self.attempts);
                } else {
                    self.check_exhausted();
                }
                Ok(outcome)
            }
            Err(err) => {
                debug!("rejected shot: {}", err);
                if self.config.attempt_policy == AttemptPolicy::EveryShot {
                    self.attempts = self.attempts.saturating_add(1);
                    self.check_exhausted();
                }
                Err(GameError::Shot(err))
            }
        }
    }

    fn check_exhausted(&mut self) {
        if let Some(max) = self.config.max_attempts {
            if self.attempts >= max {
                self.status = GameStatus::Exhausted;
                info!("attempt limit of {} reached", max);
            }
        }
    }

    /// Snapshot of the tallies.
    pub fn summary(&self) -> GameSummary {
        let ratio = accuracy(self.hits, self.attempts);
        GameSummary {
            status: self.status,
            attempts: self.attempts,
            hits: self.hits,
            accuracy: ratio,
            accuracy_percent: libm::round(ratio * 1000.0) / 10.0,
        }
    }
}
