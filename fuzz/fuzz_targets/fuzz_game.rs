#![no_main]

//! Whole-game fuzzer.
//!
//! Plays arbitrary move choices through a standard game and checks the
//! engine invariants after every applied move. Rejected moves must leave
//! the game untouched; terminal games must refuse further moves.

use arbitrary::Arbitrary;
use jesonmor::game::{Color, Configuration, Game, Move, Place, check_invariants};
use libfuzzer_sys::fuzz_target;

/// Structured input for game fuzzing.
#[derive(Arbitrary, Debug)]
struct GameInput {
    /// Opening protection window.
    protection: u8,
    /// Choices: even bytes pick from the legal set, odd bytes attempt a
    /// raw (possibly illegal) move.
    choices: Vec<(u8, u8, u8, u8, u8)>,
}

fuzz_target!(|input: GameInput| {
    let mut config = Configuration::jeson_mor(9);
    config.protection_moves = u32::from(input.protection % 8);

    let mut game = Game::new(config).expect("standard setup is valid");

    for &(pick, fx, fy, tx, ty) in input.choices.iter().take(200) {
        if game.is_terminal() {
            // Terminal is absorbing.
            let refused = game.apply_move(Move::new(
                Place::new(fx % 9, fy % 9),
                Place::new(tx % 9, ty % 9),
            ));
            assert!(refused.is_err());
            break;
        }

        let side = game.current_player();
        if pick % 2 == 0 {
            let available = game.available_moves(side);
            if available.is_empty() {
                game.declare_no_move_loss(side);
                assert_eq!(game.winner(), Some(side.opponent()));
                break;
            }
            let mv = available[usize::from(pick) % available.len()];
            game.apply_move(mv).expect("offered move applies");
        } else {
            // A raw move either applies or leaves the state untouched.
            let before = game.move_count();
            let mv = Move::new(Place::new(fx % 9, fy % 9), Place::new(tx % 9, ty % 9));
            if game.apply_move(mv).is_err() {
                assert_eq!(game.move_count(), before);
                assert_eq!(game.current_player(), side);
            }
        }

        assert!(check_invariants(&game).is_empty());
    }
});
