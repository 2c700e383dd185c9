//! Static game setup: board size, players, placements, win rule, scoring.
//!
//! A [`Configuration`] is built by the caller (or deserialized by a driver;
//! the engine itself never parses files) and handed to
//! [`Game::new`](crate::game::Game::new) once. It is validated there and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{Color, Move, Piece, PieceKind, Place, PlayerSpec};

/// How a game is won, beyond the ever-present no-legal-move loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinRule {
    /// Classic Jeson Mor: moving onto the central square wins.
    /// Requires an odd board size.
    CentralSquare,
    /// Reaching the opponent's home rank wins.
    BackRank,
    /// Capturing the opponent's last piece wins.
    Annihilation,
}

/// Weights for the pluggable scoring formula.
///
/// A move is worth `capture_weight * value(captured piece)` plus
/// `distance_weight * manhattan(move)`. Integer-valued so scores stay
/// exact and comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Points per point of captured material.
    pub capture_weight: i64,
    /// Points per square of Manhattan distance moved.
    pub distance_weight: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            capture_weight: 1,
            distance_weight: 0,
        }
    }
}

impl ScoringWeights {
    /// Score delta for one applied move.
    #[must_use]
    pub fn delta(&self, captured: Option<PieceKind>, mv: Move) -> i64 {
        self.capture_weight * captured.map_or(0, PieceKind::value)
            + self.distance_weight * i64::from(mv.manhattan())
    }
}

/// Static setup data for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Side length of the square board.
    pub size: u8,
    /// The two players; one must be White and one Black.
    pub players: [PlayerSpec; 2],
    /// Number of opening moves during which captures are banned.
    pub protection_moves: u32,
    /// Initial piece placement.
    pub placements: Vec<(Place, Piece)>,
    /// Scoring weights.
    pub scoring: ScoringWeights,
    /// Win rule in force.
    pub win_rule: WinRule,
}

impl Configuration {
    /// The classic Jeson Mor setup: each player's home rank filled with
    /// knights on an odd-sized board, central-square win rule.
    #[must_use]
    pub fn jeson_mor(size: u8) -> Self {
        let mut placements = Vec::with_capacity(usize::from(size) * 2);
        for x in 0..size {
            placements.push((
                Place::new(x, 0),
                Piece::new(PieceKind::Knight, Color::White),
            ));
            placements.push((
                Place::new(x, size - 1),
                Piece::new(PieceKind::Knight, Color::Black),
            ));
        }

        Self {
            size,
            players: [
                PlayerSpec::new("White", Color::White),
                PlayerSpec::new("Black", Color::Black),
            ],
            protection_moves: 0,
            placements,
            scoring: ScoringWeights::default(),
            win_rule: WinRule::CentralSquare,
        }
    }

    /// The central square of the board.
    #[must_use]
    pub const fn center(&self) -> Place {
        Place::new(self.size / 2, self.size / 2)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: zero board size, an even
    /// board under the central-square rule, duplicate player colors,
    /// out-of-bounds or duplicate placements, or a side with no pieces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::BoardSizeZero);
        }
        if self.win_rule == WinRule::CentralSquare && self.size % 2 == 0 {
            return Err(ConfigError::EvenBoardForCentralWin(self.size));
        }
        if self.players[0].color == self.players[1].color {
            return Err(ConfigError::DuplicateColors(self.players[0].color));
        }

        let mut seen: Vec<Place> = Vec::with_capacity(self.placements.len());
        let mut counts = [0u32; 2];
        for &(place, piece) in &self.placements {
            if place.x >= self.size || place.y >= self.size {
                return Err(ConfigError::PlacementOutOfBounds(place));
            }
            if seen.contains(&place) {
                return Err(ConfigError::DuplicatePlacement(place));
            }
            seen.push(place);
            counts[piece.owner.index()] += 1;
        }

        for color in [Color::White, Color::Black] {
            if counts[color.index()] == 0 {
                return Err(ConfigError::EmptySide(color));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jeson_mor_setup_is_valid() {
        let config = Configuration::jeson_mor(9);
        assert!(config.validate().is_ok());
        assert_eq!(config.placements.len(), 18);
        assert_eq!(config.center(), Place::new(4, 4));
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut config = Configuration::jeson_mor(9);
        config.size = 0;
        config.placements.clear();
        assert_eq!(config.validate(), Err(ConfigError::BoardSizeZero));
    }

    #[test]
    fn test_even_board_rejected_for_central_win() {
        let config = Configuration::jeson_mor(8);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EvenBoardForCentralWin(8))
        );
    }

    #[test]
    fn test_even_board_allowed_for_back_rank() {
        let mut config = Configuration::jeson_mor(8);
        config.win_rule = WinRule::BackRank;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicate_colors_rejected() {
        let mut config = Configuration::jeson_mor(9);
        config.players[1].color = Color::White;
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateColors(Color::White))
        );
    }

    #[test]
    fn test_out_of_bounds_placement_rejected() {
        let mut config = Configuration::jeson_mor(9);
        config.placements.push((
            Place::new(9, 0),
            Piece::new(PieceKind::Knight, Color::White),
        ));
        assert_eq!(
            config.validate(),
            Err(ConfigError::PlacementOutOfBounds(Place::new(9, 0)))
        );
    }

    #[test]
    fn test_duplicate_placement_rejected() {
        let mut config = Configuration::jeson_mor(9);
        config.placements.push((
            Place::new(0, 0),
            Piece::new(PieceKind::Rook, Color::White),
        ));
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicatePlacement(Place::new(0, 0)))
        );
    }

    #[test]
    fn test_empty_side_rejected() {
        let mut config = Configuration::jeson_mor(9);
        config.placements.retain(|(_, piece)| piece.owner == Color::White);
        assert_eq!(config.validate(), Err(ConfigError::EmptySide(Color::Black)));
    }

    #[test]
    fn test_scoring_delta() {
        let weights = ScoringWeights::default();
        let mv = Move::new(Place::new(0, 0), Place::new(1, 2));

        assert_eq!(weights.delta(None, mv), 0);
        assert_eq!(weights.delta(Some(PieceKind::Rook), mv), 5);

        let distance = ScoringWeights {
            capture_weight: 0,
            distance_weight: 2,
        };
        assert_eq!(distance.delta(Some(PieceKind::Rook), mv), 6);
    }

    #[test]
    fn test_configuration_round_trips_through_json() {
        let config = Configuration::jeson_mor(9);
        let json = serde_json::to_string(&config).expect("serializable");
        let back: Configuration = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, config);
    }
}
