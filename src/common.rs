//! Common types for the field: shot outcomes and field errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// Outcome of a shot that landed on a fresh, in-bounds cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// The shot struck a ship segment.
    Hit,
    /// The shot landed in open water.
    Miss,
}

/// Reasons a shot is rejected without touching the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Row or column outside `[0, N)`.
    InvalidCoordinate { row: i64, col: i64 },
    /// The cell was already hit or missed.
    AlreadyTargeted { row: usize, col: usize },
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the field", row, col)
            }
            ShotError::AlreadyTargeted { row, col } => {
                write!(f, "Cell ({}, {}) was already targeted", row, col)
            }
        }
    }
}

/// Tri-state view of a shot: hit, miss, or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    Hit,
    Miss,
    Invalid,
}

impl From<&Result<ShotOutcome, ShotError>> for ShotResult {
    fn from(res: &Result<ShotOutcome, ShotError>) -> Self {
        match res {
            Ok(ShotOutcome::Hit) => ShotResult::Hit,
            Ok(ShotOutcome::Miss) => ShotResult::Miss,
            Err(_) => ShotResult::Invalid,
        }
    }
}

/// Errors returned by field setup operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoard(BitBoardError),
    /// Ship would extend past the edge of the field.
    ShipOutOfBounds,
    /// A ship is already on the field.
    ShipAlreadyPlaced,
    /// Ship length is zero or longer than the field side.
    InvalidShipLength { length: usize, dimension: usize },
}

impl From<BitBoardError> for FieldError {
    fn from(err: BitBoardError) -> Self {
        FieldError::BitBoard(err)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            FieldError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            FieldError::ShipAlreadyPlaced => write!(f, "A ship is already placed on the field"),
            FieldError::InvalidShipLength { length, dimension } => write!(
                f,
                "Ship length {} does not fit a {}x{} field",
                length, dimension, dimension
            ),
        }
    }
}
