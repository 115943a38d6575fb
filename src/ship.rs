//! Ship geometry: orientation, anchor and the cells it covers.

use core::fmt;

use crate::common::FieldError;
use crate::field::Grid;

/// Orientation of a ship on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A contiguous run of cells anchored at (`row`, `col`).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    row: usize,
    col: usize,
    length: usize,
}

impl Ship {
    /// Build a ship that must fit entirely inside a `dimension`×`dimension` field.
    pub fn new(
        orientation: Orientation,
        row: usize,
        col: usize,
        length: usize,
        dimension: usize,
    ) -> Result<Self, FieldError> {
        if length == 0 || length > dimension {
            return Err(FieldError::InvalidShipLength { length, dimension });
        }
        let (last_row, last_col) = match orientation {
            Orientation::Horizontal => (Some(row), col.checked_add(length - 1)),
            Orientation::Vertical => (row.checked_add(length - 1), Some(col)),
        };
        match (last_row, last_col) {
            (Some(r), Some(c)) if r < dimension && c < dimension => {}
            _ => return Err(FieldError::ShipOutOfBounds),
        }
        Ok(Ship {
            orientation,
            row,
            col,
            length,
        })
    }

    /// Largest valid anchor (row, col), inclusive, for a ship of `length`.
    pub fn anchor_bounds(orientation: Orientation, length: usize, dimension: usize) -> (usize, usize) {
        let along = dimension.saturating_sub(length);
        let across = dimension.saturating_sub(1);
        match orientation {
            Orientation::Horizontal => (across, along),
            Orientation::Vertical => (along, across),
        }
    }

    /// Cells covered by the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }

    /// Occupancy mask of the ship on a field of `dimension`.
    pub fn mask(&self, dimension: usize) -> Result<Grid, FieldError> {
        Ok(Grid::from_cells(dimension, self.cells())?)
    }

    /// Anchor of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: ({}, {}), orientation: {:?}, length: {} }}",
            self.row, self.col, self.orientation, self.length
        )
    }
}
