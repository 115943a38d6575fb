//! Text rendering of a field with row/column indices.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::field::{Cell, Field};

pub const WATER_GLYPH: char = '~';
pub const SHIP_GLYPH: char = '#';
pub const HIT_GLYPH: char = 'X';
pub const MISS_GLYPH: char = 'O';

pub const ANSI_RESET: &str = "\x1b[0m";
pub const ANSI_RED: &str = "\x1b[31m";
pub const ANSI_GREEN: &str = "\x1b[32m";
pub const ANSI_BLUE: &str = "\x1b[34m";
pub const ANSI_CYAN: &str = "\x1b[36m";

/// Whether glyphs are wrapped in terminal color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Plain,
    Ansi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Show ship cells instead of disguising them as water.
    pub reveal: bool,
    pub color: ColorMode,
}

impl RenderOptions {
    pub fn hidden(color: ColorMode) -> Self {
        Self {
            reveal: false,
            color,
        }
    }

    pub fn revealed(color: ColorMode) -> Self {
        Self {
            reveal: true,
            color,
        }
    }
}

impl Cell {
    /// Glyph for the cell as seen by the player.
    pub fn glyph(&self, reveal: bool) -> char {
        match self {
            Cell::Water => WATER_GLYPH,
            Cell::Ship if reveal => SHIP_GLYPH,
            Cell::Ship => WATER_GLYPH,
            Cell::Hit => HIT_GLYPH,
            Cell::Miss => MISS_GLYPH,
        }
    }

    fn color(&self, reveal: bool) -> &'static str {
        match self {
            Cell::Water => ANSI_BLUE,
            Cell::Ship if reveal => ANSI_GREEN,
            Cell::Ship => ANSI_BLUE,
            Cell::Hit => ANSI_RED,
            Cell::Miss => ANSI_CYAN,
        }
    }
}

fn index_width(dimension: usize) -> usize {
    let mut width = 1;
    let mut last = dimension.saturating_sub(1);
    while last >= 10 {
        width += 1;
        last /= 10;
    }
    width
}

/// Write the field: a header row of column indices, then one line per row
/// prefixed with its index. Every line ends with a newline.
pub fn write_field<W: Write>(out: &mut W, field: &Field, opts: RenderOptions) -> fmt::Result {
    let n = field.dimension();
    let w = index_width(n);

    write!(out, "{:w$}", "", w = w)?;
    for c in 0..n {
        write!(out, " {:>w$}", c, w = w)?;
    }
    writeln!(out)?;

    for r in 0..n {
        write!(out, "{:>w$}", r, w = w)?;
        for c in 0..n {
            let cell = field.cell(r, c).unwrap_or(Cell::Water);
            let glyph = cell.glyph(opts.reveal);
            write!(out, " {:w$}", "", w = w - 1)?;
            match opts.color {
                ColorMode::Plain => out.write_char(glyph)?,
                ColorMode::Ansi => write!(out, "{}{}{}", cell.color(opts.reveal), glyph, ANSI_RESET)?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render the field into a new string.
pub fn render_field(field: &Field, opts: RenderOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_field(&mut out, field, opts);
    out
}
