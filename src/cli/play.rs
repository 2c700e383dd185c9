//! Play command implementation: interactive match against a random bot.
//!
//! The console player lives here rather than in the library because it is
//! terminal I/O; the engine only ever sees it through the
//! [`PlayerController`] trait.

use std::io::{self, BufRead, Write};

use jesonmor::game::{Color, Game, Move, Place, PlayerController, RandomPlayer};
use jesonmor::runner::run_match;

use super::output::{format_text, render_board};
use super::run::{build_config, seed_or_clock};
use super::{CliError, WinRuleArg};

/// Parse a place in algebraic notation, e.g. `b3`.
fn parse_place(text: &str) -> Option<Place> {
    let mut chars = text.chars();
    let file = chars.next()?;
    if !file.is_ascii_lowercase() {
        return None;
    }
    let rank: u16 = chars.as_str().parse().ok()?;
    if rank == 0 {
        return None;
    }
    let x = u8::try_from(u32::from(file) - u32::from('a')).ok()?;
    Some(Place::new(x, u8::try_from(rank - 1).ok()?))
}

/// Parse a move written as `a1-b3` or `a1 b3`.
fn parse_move(text: &str) -> Option<Move> {
    let mut parts = text.trim().split(['-', ' ']).filter(|p| !p.is_empty());
    let from = parse_place(parts.next()?)?;
    let to = parse_place(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(from, to))
}

/// Interactive decision source reading moves from stdin.
///
/// Re-prompts until the entered move is one of the offered legal moves,
/// showing the violated rule's description for rejected input. On EOF it
/// falls back to the first legal move so the match can still finish.
#[derive(Debug)]
struct ConsolePlayer {
    /// Display name.
    name: String,
}

impl ConsolePlayer {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl PlayerController for ConsolePlayer {
    fn next_move(&mut self, game: &Game, available: &[Move]) -> Move {
        println!();
        print!("{}", render_board(game));
        println!();
        println!(
            "{} to move ({} legal moves).",
            game.current_player(),
            available.len()
        );

        let stdin = io::stdin();
        loop {
            print!("your move (e.g. a1-b3): ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    // EOF: concede control to the engine's first choice.
                    println!();
                    return available[0];
                }
                Ok(_) => {}
            }

            let Some(mv) = parse_move(&line) else {
                println!("could not parse that; use algebraic notation like a1-b3");
                continue;
            };

            if available.contains(&mv) {
                return mv;
            }

            match game.validate_move(mv) {
                Err(violation) => println!("{violation}"),
                Ok(()) => println!("move rejected: it is not your piece to move"),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the match aborts.
pub(crate) fn execute(
    color: Option<String>,
    size: u8,
    seed: Option<u64>,
    protection: u32,
    win_rule: WinRuleArg,
    max_moves: u32,
) -> Result<(), CliError> {
    let seed = seed_or_clock(seed);
    let config = build_config(None, size, protection, win_rule)?;

    let human_color = match color.as_deref() {
        None | Some("white") => Color::White,
        Some("black") => Color::Black,
        Some(other) => {
            return Err(CliError::new(format!(
                "unknown color '{other}', expected white or black"
            )));
        }
    };

    println!("You play {human_color} against a random bot (seed {seed}).");

    let mut human = ConsolePlayer::new("you");
    let mut bot = RandomPlayer::new("random-bot", seed);

    let report = match human_color {
        Color::White => run_match(config, &mut human, &mut bot, max_moves)?,
        Color::Black => run_match(config, &mut bot, &mut human, max_moves)?,
    };

    println!();
    print!("{}", render_board(&report.game));
    println!();
    print!("{}", format_text(&report, seed));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        assert_eq!(parse_place("a1"), Some(Place::new(0, 0)));
        assert_eq!(parse_place("e9"), Some(Place::new(4, 8)));
        assert_eq!(parse_place("A1"), None);
        assert_eq!(parse_place("a0"), None);
        assert_eq!(parse_place("11"), None);
    }

    #[test]
    fn test_parse_move() {
        let expected = Move::new(Place::new(0, 0), Place::new(1, 2));
        assert_eq!(parse_move("a1-b3"), Some(expected));
        assert_eq!(parse_move("a1 b3"), Some(expected));
        assert_eq!(parse_move(" a1-b3 \n"), Some(expected));
        assert_eq!(parse_move("a1"), None);
        assert_eq!(parse_move("a1-b3-c5"), None);
    }

    #[test]
    fn test_parse_move_rejects_uppercase_files() {
        assert_eq!(parse_move("A1-B3"), None);
    }
}
