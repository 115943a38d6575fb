#![cfg(feature = "std")]

//! Console driver: reads coordinates line by line and plays a session.

use std::io::{BufRead, Write};
use std::string::String;

use crate::{
    common::{ShotError, ShotOutcome},
    game::{GameError, GameSession, GameStatus, GameSummary},
    render::{
        write_field, ColorMode, RenderOptions, ANSI_BLUE, ANSI_CYAN, ANSI_GREEN, ANSI_RED,
        ANSI_RESET, HIT_GLYPH, MISS_GLYPH, SHIP_GLYPH, WATER_GLYPH,
    },
};

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire { row: i64, col: i64 },
    Help,
    Quit,
}

/// Parse one input line. Coordinates are two integers separated by
/// whitespace or a comma; range checks are left to the session.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }
    if input.eq_ignore_ascii_case("help") {
        return Ok(Command::Help);
    }
    let mut parts = input
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|p| !p.is_empty());
    let row_str = parts.next().ok_or("Missing row")?;
    let col_str = parts
        .next()
        .ok_or("Missing column - enter a row and a column (e.g., 2 3)")?;
    if parts.next().is_some() {
        return Err("Too many values - enter exactly a row and a column".to_string());
    }
    let row = parse_index(row_str)
        .ok_or_else(|| format!("Invalid row '{}' - must be a whole number", row_str))?;
    let col = parse_index(col_str)
        .ok_or_else(|| format!("Invalid column '{}' - must be a whole number", col_str))?;
    Ok(Command::Fire { row, col })
}

/// Parse a signed integer. Numbers too large for `i64` saturate so they still
/// reach the session and get rejected as out of bounds.
fn parse_index(token: &str) -> Option<i64> {
    if let Ok(value) = token.parse::<i64>() {
        return Some(value);
    }
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

/// One-line end-of-game statistics.
pub fn summary_line(summary: &GameSummary) -> String {
    format!(
        "Attempts: {} | Hits: {} | Accuracy: {:.1}%",
        summary.attempts, summary.hits, summary.accuracy_percent
    )
}

/// Plays a [`GameSession`] over any line-oriented input and output.
pub struct ConsoleGame<R, W> {
    input: R,
    output: W,
    color: ColorMode,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(input: R, output: W, color: ColorMode) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Give back the output sink, e.g. to inspect a buffer in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    fn paint(&self, color: &str, text: &str) -> String {
        match self.color {
            ColorMode::Plain => text.to_string(),
            ColorMode::Ansi => format!("{}{}{}", color, text, ANSI_RESET),
        }
    }

    fn print_field(&mut self, session: &GameSession, reveal: bool) -> anyhow::Result<()> {
        let mut grid = String::new();
        let opts = RenderOptions {
            reveal,
            color: self.color,
        };
        write_field(&mut grid, session.field(), opts)?;
        write!(self.output, "{}", grid)?;
        if reveal {
            writeln!(
                self.output,
                "Legend: {}=Ship  {}=Hit  {}=Miss  {}=Water",
                SHIP_GLYPH, HIT_GLYPH, MISS_GLYPH, WATER_GLYPH
            )?;
        } else {
            writeln!(
                self.output,
                "Legend: {}=Hit  {}=Miss  {}=Unknown",
                HIT_GLYPH, MISS_GLYPH, WATER_GLYPH
            )?;
        }
        Ok(())
    }

    fn print_welcome(&mut self, session: &GameSession) -> anyhow::Result<()> {
        let config = *session.config();
        let title = self.paint(ANSI_GREEN, "BATTLESHIP");
        writeln!(self.output, "════════════════════════════════════════")?;
        writeln!(self.output, "              {}", title)?;
        writeln!(self.output, "════════════════════════════════════════")?;
        writeln!(
            self.output,
            "A ship of length {} is hidden on a {}x{} field.",
            config.ship_length, config.dimension, config.dimension
        )?;
        match config.max_attempts {
            Some(max) => writeln!(self.output, "Sink it within {} attempts.", max)?,
            None => writeln!(self.output, "Keep firing until it sinks.")?,
        }
        self.print_help(session)
    }

    fn print_help(&mut self, session: &GameSession) -> anyhow::Result<()> {
        let last = session.config().dimension - 1;
        writeln!(self.output, "Instructions:")?;
        writeln!(
            self.output,
            "  • Enter a row and a column, each 0-{} (e.g., 2 3)",
            last
        )?;
        writeln!(self.output, "  • Type 'help' to see this again, 'q' to quit")?;
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, session: &GameSession) -> anyhow::Result<()> {
        let shot = session.attempts().saturating_add(1);
        match session.config().max_attempts {
            Some(max) => write!(self.output, "\nShot {}/{} - row and column: ", shot, max)?,
            None => write!(self.output, "\nShot {} - row and column: ", shot)?,
        }
        self.output.flush()?;
        Ok(())
    }

    fn report_shot(
        &mut self,
        session: &GameSession,
        (row, col): (i64, i64),
        res: Result<ShotOutcome, GameError>,
    ) -> anyhow::Result<()> {
        match res {
            Ok(ShotOutcome::Hit) => {
                let msg = self.paint(ANSI_RED, "HIT!");
                writeln!(self.output, "{} Your shot at ({}, {}) struck the ship.", msg, row, col)?;
            }
            Ok(ShotOutcome::Miss) => {
                let msg = self.paint(ANSI_CYAN, "Miss.");
                writeln!(self.output, "{} Your shot at ({}, {}) hit only water.", msg, row, col)?;
            }
            Err(GameError::Shot(err @ ShotError::InvalidCoordinate { .. })) => {
                writeln!(
                    self.output,
                    "✗ {} - rows and columns go from 0 to {}",
                    err,
                    session.config().dimension - 1
                )?;
            }
            Err(GameError::Shot(err @ ShotError::AlreadyTargeted { .. })) => {
                writeln!(self.output, "✗ {} - choose another target", err)?;
            }
            Err(err) => return Err(anyhow::anyhow!(err)),
        }
        if session.status() == GameStatus::Playing {
            if let Some(left) = session.attempts_left() {
                writeln!(self.output, "Attempts left: {}", left)?;
            }
        }
        Ok(())
    }

    fn print_result(&mut self, session: &GameSession) -> anyhow::Result<()> {
        writeln!(self.output, "\n════════════════════════════════════════")?;
        writeln!(self.output, "               GAME OVER")?;
        writeln!(self.output, "════════════════════════════════════════")?;
        self.print_field(session, true)?;
        match session.status() {
            GameStatus::Won => {
                let msg = self.paint(ANSI_GREEN, "VICTORY!");
                writeln!(self.output, "\n{} You sank the ship.", msg)?;
            }
            GameStatus::Exhausted => {
                let msg = self.paint(ANSI_RED, "Out of attempts.");
                writeln!(self.output, "\n{} The ship survived.", msg)?;
            }
            GameStatus::Setup | GameStatus::Playing => {
                let msg = self.paint(ANSI_BLUE, "Game abandoned.");
                writeln!(self.output, "\n{}", msg)?;
            }
        }
        writeln!(self.output, "{}", summary_line(&session.summary()))?;
        Ok(())
    }

    /// Run the prompt loop until the session ends or the player quits.
    /// Running out of input mid-game is an error.
    pub fn run(&mut self, session: &mut GameSession) -> anyhow::Result<GameSummary> {
        if session.status() != GameStatus::Playing {
            anyhow::bail!("Game is not ready to play: {:?}", session.status());
        }
        self.print_welcome(session)?;
        let mut show_field = true;
        while !session.status().is_over() {
            if show_field {
                writeln!(self.output)?;
                self.print_field(session, false)?;
            }
            self.prompt(session)?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => anyhow::bail!("Input closed before the game finished"),
            };
            if line.trim().is_empty() {
                show_field = false;
                continue;
            }
            match parse_command(&line) {
                Ok(Command::Fire { row, col }) => {
                    let res = session.fire(row, col);
                    self.report_shot(session, (row, col), res)?;
                    show_field = true;
                }
                Ok(Command::Help) => {
                    self.print_help(session)?;
                    show_field = false;
                }
                Ok(Command::Quit) => break,
                Err(e) => {
                    writeln!(self.output, "✗ Malformed input: {}", e)?;
                    show_field = false;
                }
            }
        }
        self.print_result(session)?;
        self.output.flush()?;
        Ok(session.summary())
    }
}
