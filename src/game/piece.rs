//! Piece kinds and their candidate-move geometry.
//!
//! Movement is modeled as capability polymorphism rather than an
//! inheritance tree: each [`PieceKind`] supplies raw geometry (a candidate
//! superset, ignoring occupancy) and a blocking-sensitivity flag. Path
//! obstruction is judged by the kind's shape rule in
//! [`rules`](crate::game::rules), which sees the whole board.

use serde::{Deserialize, Serialize};

use crate::game::{Board, Color, Move, Place};

/// Knight offsets in a fixed order, so move generation is deterministic.
pub const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Ray directions for sliding pieces: up, down, left, right.
pub const RAY_DIRECTIONS: [(i16, i16); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// The closed set of piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// L-shaped leaper; ignores intervening pieces.
    Knight,
    /// Orthogonal slider that moves along a clear line but captures by
    /// jumping exactly one screen piece, cannon-style.
    Archer,
    /// Orthogonal slider requiring a clear line.
    Rook,
}

impl PieceKind {
    /// Material value used by the capture scoring rule.
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            Self::Knight => 3,
            Self::Archer => 4,
            Self::Rook => 5,
        }
    }

    /// Display character (uppercased for White pieces).
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Knight => 'n',
            Self::Archer => 'a',
            Self::Rook => 'r',
        }
    }

    /// Whether this kind's legality depends on intervening pieces.
    #[must_use]
    pub const fn is_blocking_sensitive(self) -> bool {
        match self {
            Self::Knight => false,
            Self::Archer | Self::Rook => true,
        }
    }

    /// Enumerate the geometric candidate moves from `from`.
    ///
    /// This is the unfiltered superset the rule chain whittles down: knight
    /// offsets clipped to the board, or every square along the four
    /// orthogonal rays regardless of occupancy. The order is fixed so that
    /// move generation is reproducible for a given board state.
    #[must_use]
    pub fn candidate_moves(self, board: &Board, from: Place) -> Vec<Move> {
        let size = board.size();
        match self {
            Self::Knight => KNIGHT_OFFSETS
                .iter()
                .filter_map(|&(dx, dy)| from.offset(dx, dy, size))
                .map(|to| Move::new(from, to))
                .collect(),
            Self::Archer | Self::Rook => {
                let mut moves = Vec::new();
                for &(dx, dy) in &RAY_DIRECTIONS {
                    for dist in 1..i16::from(size) {
                        match from.offset(dx * dist, dy * dist, size) {
                            Some(to) => moves.push(Move::new(from, to)),
                            None => break,
                        }
                    }
                }
                moves
            }
        }
    }
}

/// A game unit: a kind owned by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// What the piece is.
    pub kind: PieceKind,
    /// Who owns it.
    pub owner: Color,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub const fn new(kind: PieceKind, owner: Color) -> Self {
        Self { kind, owner }
    }

    /// Display character: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn label(self) -> char {
        match self.owner {
            Color::White => self.kind.label().to_ascii_uppercase(),
            Color::Black => self.kind.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_corner_candidates() {
        let board = Board::new(8).expect("nonzero size");
        let moves = PieceKind::Knight.candidate_moves(&board, Place::new(0, 0));

        let targets: Vec<Place> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![Place::new(1, 2), Place::new(2, 1)]);
    }

    #[test]
    fn test_knight_center_has_eight_candidates() {
        let board = Board::new(9).expect("nonzero size");
        let moves = PieceKind::Knight.candidate_moves(&board, Place::new(4, 4));
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_slider_candidates_cover_rank_and_file() {
        let board = Board::new(5).expect("nonzero size");
        let moves = PieceKind::Rook.candidate_moves(&board, Place::new(2, 2));

        // Four squares along each axis on a 5x5 board.
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.from == Place::new(2, 2)));
        assert!(
            moves
                .iter()
                .all(|m| m.to.x == 2 || m.to.y == 2)
        );
    }

    #[test]
    fn test_archer_geometry_matches_rook() {
        // The archer's raw geometry is identical to the rook's; only the
        // obstruction semantics differ, and those live in the shape rules.
        let board = Board::new(7).expect("nonzero size");
        let from = Place::new(3, 0);
        assert_eq!(
            PieceKind::Archer.candidate_moves(&board, from),
            PieceKind::Rook.candidate_moves(&board, from)
        );
    }

    #[test]
    fn test_blocking_sensitivity() {
        assert!(!PieceKind::Knight.is_blocking_sensitive());
        assert!(PieceKind::Archer.is_blocking_sensitive());
        assert!(PieceKind::Rook.is_blocking_sensitive());
    }

    #[test]
    fn test_piece_labels() {
        assert_eq!(Piece::new(PieceKind::Knight, Color::White).label(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).label(), 'n');
        assert_eq!(Piece::new(PieceKind::Archer, Color::White).label(), 'A');
        assert_eq!(Piece::new(PieceKind::Rook, Color::Black).label(), 'r');
    }
}
