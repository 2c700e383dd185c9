//! Property-based tests for the validation chain and move application.
//!
//! These tests generate arbitrary piece placements and verify the engine's
//! core guarantees: everything the move generator offers is legal,
//! validation is idempotent, and applying a move preserves the board
//! accounting invariants.
//!
//! Run with: cargo test --release prop_rules

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use proptest::sample::Index;

use jesonmor::game::{
    Color, Configuration, Game, Move, Piece, PieceKind, Place, PlayerSpec, RandomPlayer,
    ScoringWeights, WinRule, check_invariants,
};
use jesonmor::runner::run_match;

const SIZE: u8 = 9;

fn game_with(placements: Vec<(Place, Piece)>, protection_moves: u32) -> Game {
    let config = Configuration {
        size: SIZE,
        players: [
            PlayerSpec::new("white", Color::White),
            PlayerSpec::new("black", Color::Black),
        ],
        protection_moves,
        placements,
        scoring: ScoringWeights::default(),
        win_rule: WinRule::Annihilation,
    };
    Game::new(config).expect("generated configuration is valid")
}

fn arb_kind() -> impl Strategy<Value = PieceKind> {
    prop_oneof![
        Just(PieceKind::Knight),
        Just(PieceKind::Archer),
        Just(PieceKind::Rook),
    ]
}

prop_compose! {
    /// Random placements with anchor knights so neither side is empty.
    fn arb_placements()(
        cells in proptest::collection::hash_map(
            (0..SIZE, 0..SIZE),
            (arb_kind(), any::<bool>()),
            0..16,
        )
    ) -> Vec<(Place, Piece)> {
        let mut placements: Vec<(Place, Piece)> = cells
            .into_iter()
            .filter(|&((x, y), _)| (x, y) != (0, 0) && (x, y) != (SIZE - 1, SIZE - 1))
            .map(|((x, y), (kind, is_white))| {
                let owner = if is_white { Color::White } else { Color::Black };
                (Place::new(x, y), Piece::new(kind, owner))
            })
            .collect();
        placements.push((Place::new(0, 0), Piece::new(PieceKind::Knight, Color::White)));
        placements.push((
            Place::new(SIZE - 1, SIZE - 1),
            Piece::new(PieceKind::Knight, Color::Black),
        ));
        // Hash maps iterate in arbitrary order; sort for reproducibility.
        placements.sort_by_key(|(place, _)| (place.y, place.x));
        placements
    }
}

prop_compose! {
    /// Any move between on-board squares, legal or not.
    fn arb_move()(fx in 0..SIZE, fy in 0..SIZE, tx in 0..SIZE, ty in 0..SIZE) -> Move {
        Move::new(Place::new(fx, fy), Place::new(tx, ty))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Everything the move generator offers passes every rule.
    #[test]
    fn prop_available_moves_pass_every_rule(
        placements in arb_placements(),
        protection in 0u32..6,
    ) {
        let game = game_with(placements, protection);
        for color in [Color::White, Color::Black] {
            for mv in game.available_moves(color) {
                prop_assert!(game.validate_move(mv).is_ok(), "offered move {mv} fails validation");
            }
        }
    }

    /// Validating the same (state, move) pair twice gives the same answer.
    #[test]
    fn prop_validation_is_idempotent(
        placements in arb_placements(),
        mv in arb_move(),
    ) {
        let game = game_with(placements, 2);
        prop_assert_eq!(game.validate_move(mv), game.validate_move(mv));
    }

    /// Applying an offered move keeps the board accounting intact.
    #[test]
    fn prop_apply_preserves_board_accounting(
        placements in arb_placements(),
        pick in any::<Index>(),
    ) {
        let mut game = game_with(placements, 0);
        let moves = game.available_moves(Color::White);
        prop_assume!(!moves.is_empty());

        let mv = moves[pick.index(moves.len())];
        let total_before = game.board().total_pieces();
        let record = game.apply_move(mv).expect("offered move applies");

        // The moved piece sits on exactly one cell.
        prop_assert!(game.piece_at(mv.from).is_none());
        prop_assert!(game.piece_at(mv.to).is_some());

        // Count decreases by one on capture, is unchanged otherwise.
        let expected = if record.captured.is_some() {
            total_before - 1
        } else {
            total_before
        };
        prop_assert_eq!(game.board().total_pieces(), expected);

        prop_assert!(check_invariants(&game).is_empty());
    }

    /// Moves offered during the protection window are never captures.
    #[test]
    fn prop_protection_window_offers_no_captures(
        placements in arb_placements(),
        protection in 1u32..8,
    ) {
        let game = game_with(placements, protection);
        for mv in game.available_moves(Color::White) {
            prop_assert!(game.piece_at(mv.to).is_none(), "capture {mv} offered inside the window");
        }
    }
}

proptest! {
    // Whole matches are costlier; fewer cases.
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random matches end with the engine invariants intact.
    #[test]
    fn prop_random_matches_preserve_invariants(seed in any::<u64>()) {
        let config = Configuration::jeson_mor(9);
        let mut white = RandomPlayer::new("white", seed);
        let mut black = RandomPlayer::new("black", seed ^ 0x9e37_79b9_7f4a_7c15);

        let report = run_match(config, &mut white, &mut black, 120).expect("match runs");
        prop_assert!(check_invariants(&report.game).is_empty());
    }
}
