//! Commonly used types and utilities for ease of import.

pub use crate::{
    place_ship, render_field, ColorMode, GameConfig, GameSession, GameStatus, Orientation,
    PlacementSource, RandomPlacement, RenderOptions, ScriptedPlacement, ShotOutcome,
};

#[cfg(feature = "std")]
pub use crate::console::ConsoleGame;
