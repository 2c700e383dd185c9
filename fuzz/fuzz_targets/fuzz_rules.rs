#![no_main]

//! Rule chain fuzzer.
//!
//! Builds a game from arbitrary placements, then validates arbitrary
//! moves. Validation must never panic and must agree with itself on
//! repeated evaluation.

use arbitrary::Arbitrary;
use jesonmor::game::{
    Color, Configuration, Game, Move, Piece, PieceKind, Place, PlayerSpec, ScoringWeights, WinRule,
};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated placement.
#[derive(Arbitrary, Debug, Clone, Copy)]
struct FuzzPlacement {
    x: u8,
    y: u8,
    kind_tag: u8,
    is_white: bool,
}

/// Structured input for rule fuzzing.
#[derive(Arbitrary, Debug)]
struct RulesInput {
    /// Board side length (mapped into 1..=16).
    size: u8,
    /// Opening protection window.
    protection: u8,
    /// Arbitrary placements; out-of-bounds and duplicates are dropped.
    placements: Vec<FuzzPlacement>,
    /// Moves to validate, legal or not.
    moves: Vec<(u8, u8, u8, u8)>,
}

fn kind_of(tag: u8) -> PieceKind {
    match tag % 3 {
        0 => PieceKind::Knight,
        1 => PieceKind::Archer,
        _ => PieceKind::Rook,
    }
}

fuzz_target!(|input: RulesInput| {
    let size = input.size % 16 + 1;

    let mut placements: Vec<(Place, Piece)> = Vec::new();
    for p in input.placements.iter().take(64) {
        let place = Place::new(p.x % size, p.y % size);
        if placements.iter().any(|&(seen, _)| seen == place) {
            continue;
        }
        let owner = if p.is_white {
            Color::White
        } else {
            Color::Black
        };
        placements.push((place, Piece::new(kind_of(p.kind_tag), owner)));
    }

    let config = Configuration {
        size,
        players: [
            PlayerSpec::new("white", Color::White),
            PlayerSpec::new("black", Color::Black),
        ],
        protection_moves: u32::from(input.protection),
        placements,
        scoring: ScoringWeights::default(),
        win_rule: WinRule::Annihilation,
    };

    // Both sides may be empty; rejection is a valid outcome.
    let Ok(game) = Game::new(config) else {
        return;
    };

    for &(fx, fy, tx, ty) in input.moves.iter().take(128) {
        let mv = Move::new(Place::new(fx, fy), Place::new(tx, ty));
        let first = game.validate_move(mv);
        let second = game.validate_move(mv);
        assert_eq!(first, second);
    }

    // Everything the generator offers must validate.
    for color in [Color::White, Color::Black] {
        for mv in game.available_moves(color) {
            assert!(game.validate_move(mv).is_ok());
        }
    }
});
