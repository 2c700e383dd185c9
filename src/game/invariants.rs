//! Engine invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger in a correctly implemented game: the board
//! type forbids two pieces on one cell by construction, and `apply_move`
//! is atomic. If a check fires, it indicates a bug in the engine or in a
//! driver mutating state it should not reach.

use crate::error::InvariantViolation;
use crate::game::{Color, Game};

/// Check all game invariants.
///
/// Returns every violation found, or an empty vector if all hold.
#[must_use]
pub fn check_invariants(game: &Game) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // Piece counts never grow past the initial placement.
    for color in [Color::White, Color::Black] {
        let on_board = game.board().count_pieces(color);
        let initial = game.initial_pieces(color);
        if on_board > initial {
            violations.push(InvariantViolation::new(format!(
                "{color} has {on_board} pieces on the board but started with {initial}"
            )));
        }
    }

    // Total count decreases exactly by the captures in the history.
    let initial_total =
        u64::from(game.initial_pieces(Color::White)) + u64::from(game.initial_pieces(Color::Black));
    let captures = game
        .move_history()
        .iter()
        .filter(|record| record.captured.is_some())
        .count() as u64;
    let expected = initial_total.saturating_sub(captures);
    let on_board = u64::from(game.board().total_pieces());
    if on_board != expected {
        violations.push(InvariantViolation::new(format!(
            "{on_board} pieces on the board, expected {expected} \
             ({initial_total} initial minus {captures} captures)"
        )));
    }

    // History alternates, starting with White.
    let mut expected_color = Color::White;
    for (index, record) in game.move_history().iter().enumerate() {
        if record.color != expected_color {
            violations.push(InvariantViolation::new(format!(
                "move {index} was played by {}, expected {expected_color}",
                record.color
            )));
            break;
        }
        expected_color = expected_color.opponent();
    }

    // While running, the side to move follows from the history length.
    if game.winner().is_none() && game.current_player() != expected_color {
        violations.push(InvariantViolation::new(format!(
            "side to move is {}, expected {expected_color} after {} moves",
            game.current_player(),
            game.move_count()
        )));
    }

    // Scores are a pure function of the history and the weights.
    let mut replayed = [0i64; 2];
    for record in game.move_history() {
        replayed[record.color.index()] += game.scoring().delta(record.captured, record.mv);
    }
    for color in [Color::White, Color::Black] {
        let actual = game.score(color);
        let expected = replayed[color.index()];
        if actual != expected {
            violations.push(InvariantViolation::new(format!(
                "{color} score is {actual}, history replays to {expected}"
            )));
        }
    }

    violations
}
