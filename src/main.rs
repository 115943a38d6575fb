use std::io;

use battleship_solo::{
    console::ConsoleGame, init_logging, AttemptPolicy, ColorMode, GameConfig, GameSession,
    RandomPlacement, DEFAULT_DIMENSION, DEFAULT_MAX_ATTEMPTS, DEFAULT_SHIP_LENGTH,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Single-player Battleship: find and sink one hidden ship.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Side length of the square field.
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    size: usize,
    /// Number of cells the ship covers.
    #[arg(long, default_value_t = DEFAULT_SHIP_LENGTH)]
    ship_length: usize,
    /// Shots allowed before the game is lost.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS, conflicts_with = "unlimited")]
    max_attempts: u32,
    /// Keep firing until the ship sinks.
    #[arg(long)]
    unlimited: bool,
    /// Count out-of-bounds and repeated shots as attempts.
    #[arg(long)]
    count_invalid: bool,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Disable ANSI colors.
    #[arg(long)]
    no_color: bool,
    /// Print the final summary as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let policy = if self.count_invalid {
            AttemptPolicy::EveryShot
        } else {
            AttemptPolicy::ValidShotsOnly
        };
        let max_attempts = if self.unlimited {
            None
        } else {
            Some(self.max_attempts)
        };
        GameConfig::default()
            .with_dimension(self.size)
            .with_ship_length(self.ship_length)
            .with_max_attempts(max_attempts)
            .with_attempt_policy(policy)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = cli.config();
    let mut session = GameSession::new(config).map_err(|e| anyhow::anyhow!(e))?;

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut placement = RandomPlacement::new(rng);
    session
        .setup(&mut placement)
        .map_err(|e| anyhow::anyhow!(e))?;

    let color = if cli.no_color {
        ColorMode::Plain
    } else {
        ColorMode::Ansi
    };
    let stdin = io::stdin();
    let mut game = ConsoleGame::new(stdin.lock(), io::stdout(), color);
    let summary = game.run(&mut session)?;

    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}
