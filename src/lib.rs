#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod console;
mod field;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
pub mod render;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use common::*;
pub use config::*;
pub use field::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::*;
pub use render::{render_field, write_field, ColorMode, RenderOptions};
pub use ship::*;
