//! Field state: ship occupancy, hits and misses on an N×N grid.

use crate::bitboard::BitBoard;
use crate::common::{FieldError, ShotError, ShotOutcome};
use crate::ship::Ship;
use core::fmt;
use log::debug;

/// Bitboard type backing every layer of the field.
pub type Grid = BitBoard<u128>;

/// State of a single cell, derived from the field layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Cell {
    Water,
    Ship,
    Hit,
    Miss,
}

pub struct Field {
    dim: usize,
    ship: Option<Ship>,
    ship_map: Grid,
    hits: Grid,
    misses: Grid,
}

impl Field {
    /// Create an all-water field of `dimension`×`dimension` cells.
    pub fn new(dimension: usize) -> Result<Self, FieldError> {
        let empty = Grid::try_new(dimension)?;
        Ok(Field {
            dim: dimension,
            ship: None,
            ship_map: empty,
            hits: empty,
            misses: empty,
        })
    }

    /// Turn every cell back into water, dropping the ship and all shots.
    pub fn reset(&mut self) {
        self.ship = None;
        self.ship_map.clear_all();
        self.hits.clear_all();
        self.misses.clear_all();
    }

    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// The placed ship, if any.
    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    /// Board occupancy mask of the ship.
    pub fn ship_map(&self) -> Grid {
        self.ship_map
    }

    pub fn hits(&self) -> Grid {
        self.hits
    }

    pub fn misses(&self) -> Grid {
        self.misses
    }

    /// State of the cell at (row, col), or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        let cell = if self.hits.get(row, col).unwrap_or(false) {
            Cell::Hit
        } else if self.misses.get(row, col).unwrap_or(false) {
            Cell::Miss
        } else if self.ship_map.get(row, col).unwrap_or(false) {
            Cell::Ship
        } else {
            Cell::Water
        };
        Some(cell)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let n = self.dim;
        (0..n * n).filter_map(move |idx| {
            let (r, c) = (idx / n, idx % n);
            self.cell(r, c).map(|cell| (r, c, cell))
        })
    }

    /// Mark the ship's cells. Only one ship may be placed per field.
    pub fn place(&mut self, ship: Ship) -> Result<(), FieldError> {
        if self.ship.is_some() {
            return Err(FieldError::ShipAlreadyPlaced);
        }
        let mask = ship.mask(self.dim)?;
        self.ship_map = self.ship_map | mask;
        self.ship = Some(ship);
        debug!("placed {:?}", ship);
        Ok(())
    }

    /// Resolve a shot at (row, col), marking a hit or a miss.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, ShotError> {
        let cell = self.cell(row, col).ok_or(ShotError::InvalidCoordinate {
            row: row as i64,
            col: col as i64,
        })?;
        // bounds already checked, so the layer writes cannot fail
        let outcome = match cell {
            Cell::Hit | Cell::Miss => return Err(ShotError::AlreadyTargeted { row, col }),
            Cell::Ship => {
                let _ = self.hits.set(row, col);
                ShotOutcome::Hit
            }
            Cell::Water => {
                let _ = self.misses.set(row, col);
                ShotOutcome::Miss
            }
        };
        debug!("shot at ({}, {}) -> {:?}", row, col, outcome);
        Ok(outcome)
    }

    /// Ship cells that have not been hit yet.
    pub fn remaining_ship_cells(&self) -> usize {
        self.cells()
            .filter(|&(_, _, cell)| cell == Cell::Ship)
            .count()
    }

    /// Returns `true` when a ship is placed and every segment is hit.
    pub fn all_sunk(&self) -> bool {
        self.ship.is_some() && self.remaining_ship_cells() == 0
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Field {{\n  ship: {:?},\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?}\n}}",
            self.ship, self.ship_map, self.hits, self.misses
        )
    }
}
