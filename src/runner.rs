//! Match orchestration: the synchronous turn loop and batch series.
//!
//! [`run_match`] drives one game between two [`PlayerController`]s:
//! compute the legal set, let the side to move pick, verify the pick is a
//! member of the offered set, apply, repeat until terminal. A controller
//! returning a foreign move is an invariant violation and aborts the
//! match - that is a programming error, not a rule failure.
//!
//! [`run_series`] replays the same configuration across many seeds in
//! parallel and aggregates the outcomes.

use rayon::prelude::*;

use crate::error::{InvariantViolation, MatchError};
use crate::game::{Color, Configuration, Game, PlayerController, RandomPlayer};

/// Why a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    /// The configured win rule was satisfied.
    Victory,
    /// The side to move had no legal moves; the opponent wins.
    NoLegalMoves,
    /// The move cap was reached with no winner - a draw.
    MoveLimit,
}

/// Result of one finished match.
#[derive(Debug)]
pub struct MatchReport {
    /// Final game state, history and scores included.
    pub game: Game,
    /// Why the match ended.
    pub termination: Termination,
}

impl MatchReport {
    /// The winner, or `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.game.winner()
    }

    /// Number of moves played.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.game.move_count()
    }
}

/// Run one match to completion.
///
/// `max_moves` caps the game length; hitting the cap ends the match as a
/// draw, mirroring a turn limit. The loop never calls `next_move` with an
/// empty legal set and never calls it again once the game is terminal.
///
/// # Errors
///
/// - [`MatchError::Config`] when the configuration is invalid.
/// - [`MatchError::Invariant`] when a controller returns a move outside
///   the offered set, or an offered move fails to apply (both bugs).
pub fn run_match(
    config: Configuration,
    white: &mut dyn PlayerController,
    black: &mut dyn PlayerController,
    max_moves: u32,
) -> Result<MatchReport, MatchError> {
    let mut game = Game::new(config)?;

    let termination = loop {
        if game.is_terminal() {
            break Termination::Victory;
        }
        if game.move_count() >= max_moves {
            break Termination::MoveLimit;
        }

        let side = game.current_player();
        let available = game.available_moves(side);
        if available.is_empty() {
            game.declare_no_move_loss(side);
            break Termination::NoLegalMoves;
        }

        let controller: &mut dyn PlayerController = match side {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let chosen = controller.next_move(&game, &available);

        if !available.contains(&chosen) {
            return Err(InvariantViolation::new(format!(
                "controller '{}' returned {chosen}, which was not in the offered set of {} moves",
                controller.name(),
                available.len()
            ))
            .into());
        }

        game.apply_move(chosen).map_err(|e| {
            InvariantViolation::new(format!("offered move {chosen} failed to apply: {e}"))
        })?;
    };

    Ok(MatchReport { game, termination })
}

/// Aggregated outcomes of a series of matches.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct SeriesStats {
    /// Matches that finished.
    pub games_played: u64,
    /// Wins by White.
    pub white_wins: u64,
    /// Wins by Black.
    pub black_wins: u64,
    /// Draws (move cap reached).
    pub draws: u64,
    /// Total moves across all finished matches.
    pub total_moves: u64,
}

impl SeriesStats {
    /// Fold one match report into the stats.
    pub fn add_report(&mut self, report: &MatchReport) {
        self.games_played += 1;
        self.total_moves += u64::from(report.moves_played());
        match report.winner() {
            Some(Color::White) => self.white_wins += 1,
            Some(Color::Black) => self.black_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Merge another accumulator into this one.
    pub fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.white_wins += other.white_wins;
        self.black_wins += other.black_wins;
        self.draws += other.draws;
        self.total_moves += other.total_moves;
    }

    /// Mean match length in moves, zero when nothing finished.
    #[must_use]
    pub fn mean_moves(&self) -> u64 {
        if self.games_played == 0 {
            0
        } else {
            self.total_moves / self.games_played
        }
    }
}

/// Run `games` random-vs-random matches in parallel and aggregate.
///
/// Match `i` uses seeds derived from `base_seed + i`, so the whole series
/// is reproducible. Uses a fold/reduce over rayon's thread pool: each
/// thread accumulates into its own [`SeriesStats`], merged at the end.
///
/// # Errors
///
/// Returns [`MatchError::Config`] if the configuration is invalid; the
/// check runs once, before any match starts.
pub fn run_series(
    config: &Configuration,
    games: u64,
    base_seed: u64,
    max_moves: u32,
) -> Result<SeriesStats, MatchError> {
    config.validate().map_err(MatchError::Config)?;

    let stats = (0..games)
        .into_par_iter()
        .fold(SeriesStats::default, |mut local, i| {
            let game_seed = base_seed.wrapping_add(i);
            let mut white = RandomPlayer::new("white", game_seed.wrapping_mul(2));
            let mut black = RandomPlayer::new("black", game_seed.wrapping_mul(2).wrapping_add(1));

            if let Ok(report) = run_match(config.clone(), &mut white, &mut black, max_moves) {
                local.add_report(&report);
            }
            local
        })
        .reduce(SeriesStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Move, Place, ScriptedPlayer};

    /// A controller that deliberately returns a move it was never offered.
    #[derive(Debug)]
    struct RogueController;

    impl PlayerController for RogueController {
        fn next_move(&mut self, _game: &Game, _available: &[Move]) -> Move {
            Move::new(Place::new(0, 0), Place::new(0, 0))
        }

        fn name(&self) -> &str {
            "rogue"
        }
    }

    #[test]
    fn test_random_match_is_reproducible() {
        let config = Configuration::jeson_mor(9);

        let run = |seed: u64| {
            let mut white = RandomPlayer::new("w", seed);
            let mut black = RandomPlayer::new("b", seed ^ 1);
            run_match(config.clone(), &mut white, &mut black, 200).expect("match runs")
        };

        let first = run(7);
        let second = run(7);
        assert_eq!(first.winner(), second.winner());
        assert_eq!(first.moves_played(), second.moves_played());
        assert_eq!(first.game.move_history(), second.game.move_history());
    }

    #[test]
    fn test_move_cap_produces_draw() {
        let config = Configuration::jeson_mor(9);
        let mut white = RandomPlayer::new("w", 1);
        let mut black = RandomPlayer::new("b", 2);

        let report = run_match(config, &mut white, &mut black, 0).expect("match runs");
        assert_eq!(report.termination, Termination::MoveLimit);
        assert_eq!(report.winner(), None);
        assert_eq!(report.moves_played(), 0);
    }

    #[test]
    fn test_rogue_controller_is_an_invariant_violation() {
        let config = Configuration::jeson_mor(9);
        let mut rogue = RogueController;
        let mut black = RandomPlayer::new("b", 3);

        let err = run_match(config, &mut rogue, &mut black, 100)
            .expect_err("rogue move must abort the match");
        assert!(matches!(err, MatchError::Invariant(_)));
        assert!(err.to_string().contains("rogue"));
    }

    #[test]
    fn test_invalid_config_rejected_before_play() {
        let mut config = Configuration::jeson_mor(9);
        config.size = 0;
        let mut white = RandomPlayer::new("w", 1);
        let mut black = RandomPlayer::new("b", 2);

        let err = run_match(config, &mut white, &mut black, 10).expect_err("invalid config");
        assert!(matches!(err, MatchError::Config(_)));
    }

    #[test]
    fn test_scripted_win_on_central_square() {
        // Two knights march White onto the center while Black shuffles.
        let config = Configuration::jeson_mor(9);
        let mut white = ScriptedPlayer::new(
            "w",
            [
                Move::new(Place::new(4, 0), Place::new(5, 2)),
                Move::new(Place::new(5, 2), Place::new(4, 4)),
            ],
        );
        let mut black = ScriptedPlayer::new(
            "b",
            [Move::new(Place::new(0, 8), Place::new(1, 6))],
        );

        let report = run_match(config, &mut white, &mut black, 100).expect("match runs");
        assert_eq!(report.termination, Termination::Victory);
        assert_eq!(report.winner(), Some(Color::White));
        assert_eq!(report.moves_played(), 3);
    }

    #[test]
    fn test_series_accumulates() {
        let config = Configuration::jeson_mor(9);
        let stats = run_series(&config, 8, 99, 60).expect("series runs");

        assert_eq!(stats.games_played, 8);
        assert_eq!(
            stats.white_wins + stats.black_wins + stats.draws,
            stats.games_played
        );
        assert!(stats.mean_moves() <= 60);
    }

    #[test]
    fn test_series_is_reproducible() {
        let config = Configuration::jeson_mor(9);
        let first = run_series(&config, 4, 123, 80).expect("series runs");
        let second = run_series(&config, 4, 123, 80).expect("series runs");

        assert_eq!(first.white_wins, second.white_wins);
        assert_eq!(first.black_wins, second.black_wins);
        assert_eq!(first.total_moves, second.total_moves);
    }
}
