#![cfg(feature = "std")]

use std::io::Cursor;

use battleship_solo::console::{parse_command, summary_line, Command, ConsoleGame};
use battleship_solo::{
    AttemptPolicy, ColorMode, GameConfig, GameSession, GameStatus, Orientation,
    ScriptedPlacement,
};

fn started(config: GameConfig) -> GameSession {
    let mut session = GameSession::new(config).unwrap();
    let mut source = ScriptedPlacement::new([(Orientation::Horizontal, 2, 1)]);
    session.setup(&mut source).unwrap();
    session
}

fn play(session: &mut GameSession, input: &str) -> (anyhow::Result<GameStatus>, String) {
    let mut game = ConsoleGame::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), ColorMode::Plain);
    let res = game.run(session).map(|s| s.status);
    let output = String::from_utf8(game.into_output()).unwrap();
    (res, output)
}

#[test]
fn test_parse_command() {
    assert_eq!(parse_command("2 3"), Ok(Command::Fire { row: 2, col: 3 }));
    assert_eq!(parse_command("2,3"), Ok(Command::Fire { row: 2, col: 3 }));
    assert_eq!(parse_command("  -1   4 \n"), Ok(Command::Fire { row: -1, col: 4 }));
    assert_eq!(parse_command("q"), Ok(Command::Quit));
    assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
    assert_eq!(parse_command("Help"), Ok(Command::Help));
    assert!(parse_command("").is_err());
    assert!(parse_command("a b").is_err());
    assert!(parse_command("1").is_err());
    assert!(parse_command("1 2 3").is_err());
    assert!(parse_command("1 x").is_err());
    assert!(parse_command("1 2x").is_err());
    assert!(parse_command("- 2").is_err());
}

#[test]
fn test_parse_command_saturates_huge_numbers() {
    assert_eq!(
        parse_command("99999999999999999999 0"),
        Ok(Command::Fire { row: i64::MAX, col: 0 })
    );
    assert_eq!(
        parse_command("1 -99999999999999999999"),
        Ok(Command::Fire { row: 1, col: i64::MIN })
    );
    assert_eq!(
        parse_command("+99999999999999999999,3"),
        Ok(Command::Fire { row: i64::MAX, col: 3 })
    );
}

#[test]
fn test_huge_coordinate_counts_as_invalid_shot() {
    let config = GameConfig::default().with_attempt_policy(AttemptPolicy::EveryShot);
    let mut session = started(config);
    let (res, out) = play(&mut session, "99999999999999999999 0\n-1 0\nq\n");

    assert_eq!(res.unwrap(), GameStatus::Playing);
    assert!(!out.contains("Malformed input"));
    assert!(out.contains(&format!("Coordinate ({}, 0) is outside the field", i64::MAX)));
    assert!(out.contains("Coordinate (-1, 0) is outside the field"));
    assert_eq!(session.attempts(), 2);
    assert_eq!(session.hits(), 0);
}

#[test]
fn test_full_game_to_victory() {
    let mut session = started(GameConfig::default().with_max_attempts(None));
    let input = "x y\n9 9\n2 1\n2 1\n2 2\n\nhelp\n2 3\n";
    let (res, out) = play(&mut session, input);

    assert_eq!(res.unwrap(), GameStatus::Won);
    assert!(out.contains("Malformed input"));
    assert!(out.contains("Coordinate (9, 9) is outside the field"));
    assert!(out.contains("Cell (2, 1) was already targeted"));
    assert!(out.contains("VICTORY!"));
    assert!(out.contains("Attempts: 3 | Hits: 3 | Accuracy: 100.0%"));
}

#[test]
fn test_ship_hidden_until_game_over() {
    let mut session = started(GameConfig::default());
    let (res, out) = play(&mut session, "0 0\n0 1\n0 2\n0 3\n0 4\n");

    assert_eq!(res.unwrap(), GameStatus::Exhausted);
    let (during, after) = out.split_at(out.find("GAME OVER").unwrap());
    assert!(!during.contains('#'));
    assert!(after.contains("2 ~ # # # ~"));
    assert!(after.contains("Out of attempts."));
    assert!(after.contains("Attempts: 5 | Hits: 0 | Accuracy: 0.0%"));
}

#[test]
fn test_attempts_left_reported() {
    let mut session = started(GameConfig::default());
    let (_, out) = play(&mut session, "0 0\nq\n");
    assert!(out.contains("Attempts left: 4"));
}

#[test]
fn test_quit_abandons_game() {
    let mut session = started(GameConfig::default());
    let (res, out) = play(&mut session, "2 1\nq\n");
    assert_eq!(res.unwrap(), GameStatus::Playing);
    assert!(out.contains("Game abandoned."));
    assert!(out.contains("Attempts: 1 | Hits: 1 | Accuracy: 100.0%"));
}

#[test]
fn test_input_closed_mid_game() {
    let mut session = started(GameConfig::default());
    let (res, _) = play(&mut session, "0 0\n");
    assert!(res.is_err());
    assert_eq!(session.attempts(), 1);
}

#[test]
fn test_run_requires_setup() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    let (res, _) = play(&mut session, "0 0\n");
    assert!(res.is_err());
}

#[test]
fn test_summary_line() {
    let mut session = started(GameConfig::default());
    for (r, c) in [(2, 1), (2, 2), (0, 0), (0, 1), (0, 2)] {
        session.fire(r, c).unwrap();
    }
    assert_eq!(
        summary_line(&session.summary()),
        "Attempts: 5 | Hits: 2 | Accuracy: 40.0%"
    );
}
