//! Ship placement with a pluggable source of orientation and anchor choices.

use alloc::collections::VecDeque;
use log::debug;
use rand::Rng;

use crate::common::FieldError;
use crate::field::Field;
use crate::ship::{Orientation, Ship};

/// Supplies the choices the placer needs. Implemented by a random source for
/// play and by a scripted source for reproducible setups.
pub trait PlacementSource {
    /// Choose the ship orientation.
    fn pick_orientation(&mut self) -> Orientation;

    /// Choose an anchor with `row <= max_row` and `col <= max_col`.
    fn pick_anchor(&mut self, max_row: usize, max_col: usize) -> (usize, usize);
}

impl<S: PlacementSource + ?Sized> PlacementSource for &mut S {
    fn pick_orientation(&mut self) -> Orientation {
        (**self).pick_orientation()
    }

    fn pick_anchor(&mut self, max_row: usize, max_col: usize) -> (usize, usize) {
        (**self).pick_anchor(max_row, max_col)
    }
}

/// Uniform choices drawn from any `rand` generator.
pub struct RandomPlacement<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPlacement<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> PlacementSource for RandomPlacement<R> {
    fn pick_orientation(&mut self) -> Orientation {
        if self.rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    fn pick_anchor(&mut self, max_row: usize, max_col: usize) -> (usize, usize) {
        let r = self.rng.random_range(0..=max_row);
        let c = self.rng.random_range(0..=max_col);
        (r, c)
    }
}

/// Replays fixed placements in order. Anchors are used verbatim, so an
/// out-of-range script surfaces as [`FieldError::ShipOutOfBounds`]. Once the
/// script runs out it answers horizontal at (0, 0).
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlacement {
    script: VecDeque<(Orientation, usize, usize)>,
}

impl ScriptedPlacement {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = (Orientation, usize, usize)>,
    {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Placements not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl PlacementSource for ScriptedPlacement {
    fn pick_orientation(&mut self) -> Orientation {
        self.script
            .front()
            .map(|&(o, _, _)| o)
            .unwrap_or(Orientation::Horizontal)
    }

    fn pick_anchor(&mut self, _max_row: usize, _max_col: usize) -> (usize, usize) {
        self.script
            .pop_front()
            .map(|(_, r, c)| (r, c))
            .unwrap_or((0, 0))
    }
}

/// Place a ship of `length` on `field` using choices from `source`.
pub fn place_ship<S: PlacementSource>(
    field: &mut Field,
    source: &mut S,
    length: usize,
) -> Result<Ship, FieldError> {
    let dim = field.dimension();
    if length == 0 || length > dim {
        return Err(FieldError::InvalidShipLength {
            length,
            dimension: dim,
        });
    }
    if field.ship().is_some() {
        return Err(FieldError::ShipAlreadyPlaced);
    }
    let orientation = source.pick_orientation();
    let (max_row, max_col) = Ship::anchor_bounds(orientation, length, dim);
    let (row, col) = source.pick_anchor(max_row, max_col);
    debug!(
        "placing length {} ship {:?} at ({}, {}), anchor bounds ({}, {})",
        length, orientation, row, col, max_row, max_col
    );
    let ship = Ship::new(orientation, row, col, length, dim)?;
    field.place(ship)?;
    Ok(ship)
}
