//! Board geometry: places, moves, and the piece grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{Color, Piece};

/// A coordinate on the board.
///
/// Immutable value type; `(0, 0)` is the bottom-left corner. White's home
/// rank is `y = 0`, Black's is `y = size - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Place {
    /// X coordinate (file).
    pub x: u8,
    /// Y coordinate (rank).
    pub y: u8,
}

impl Place {
    /// Create a new place.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Translate by a signed offset, returning `None` when the result
    /// falls outside `[0, size)` on either axis.
    #[must_use]
    pub fn offset(self, dx: i16, dy: i16, size: u8) -> Option<Self> {
        let x = i16::from(self.x) + dx;
        let y = i16::from(self.y) + dy;
        if x < 0 || y < 0 || x >= i16::from(size) || y >= i16::from(size) {
            return None;
        }
        // Both fit in u8: they are non-negative and below `size`.
        Some(Self::new(u8::try_from(x).ok()?, u8::try_from(y).ok()?))
    }

    /// Manhattan distance to another place.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u16 {
        let dx = i16::from(self.x) - i16::from(other.x);
        let dy = i16::from(self.y) - i16::from(other.y);
        dx.unsigned_abs() + dy.unsigned_abs()
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Algebraic notation for boards small enough to name files by letter.
        if self.x < 26 {
            let file = char::from(b'a' + self.x);
            write!(f, "{file}{}", u16::from(self.y) + 1)
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

/// A proposed relocation of a piece, possibly capturing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Source square.
    pub from: Place,
    /// Destination square.
    pub to: Place,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(from: Place, to: Place) -> Self {
        Self { from, to }
    }

    /// Manhattan distance covered by this move.
    #[must_use]
    pub fn manhattan(self) -> u16 {
        self.from.manhattan(self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// The piece grid: a dense square board with at most one piece per cell.
///
/// Cells are stored in row-major order. Pieces are relocated between cells,
/// never duplicated, so every piece is reachable from exactly one place.
#[derive(Debug, Clone)]
pub struct Board {
    /// Side length in squares.
    size: u8,
    /// Cells in row-major order.
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Returns `None` if `size` is zero.
    #[must_use]
    pub fn new(size: u8) -> Option<Self> {
        if size == 0 {
            return None;
        }
        let cells = vec![None; usize::from(size) * usize::from(size)];
        Some(Self { size, cells })
    }

    /// Side length of the board.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Check whether a place lies on the board.
    #[must_use]
    pub const fn in_bounds(&self, place: Place) -> bool {
        place.x < self.size && place.y < self.size
    }

    /// Convert a place to a cell index.
    fn index(&self, place: Place) -> Option<usize> {
        if self.in_bounds(place) {
            Some(usize::from(place.y) * usize::from(self.size) + usize::from(place.x))
        } else {
            None
        }
    }

    /// Get the piece at a place (`None` when empty or out of bounds).
    #[must_use]
    pub fn piece_at(&self, place: Place) -> Option<Piece> {
        self.index(place).and_then(|idx| self.cells[idx])
    }

    /// Put a piece on a cell, returning whatever it displaced.
    ///
    /// Returns `None` without placing when the place is out of bounds.
    pub fn put(&mut self, place: Place, piece: Piece) -> Option<Option<Piece>> {
        let idx = self.index(place)?;
        Some(self.cells[idx].replace(piece))
    }

    /// Remove and return the piece at a place.
    pub fn take(&mut self, place: Place) -> Option<Piece> {
        let idx = self.index(place)?;
        self.cells[idx].take()
    }

    /// Iterate over occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Place, Piece)> + '_ {
        let size = usize::from(self.size);
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|piece| {
                #[allow(clippy::cast_possible_truncation)]
                let place = Place::new((idx % size) as u8, (idx / size) as u8);
                (place, piece)
            })
        })
    }

    /// Iterate over the cells owned by one player, in row-major order.
    pub fn pieces_owned_by(&self, color: Color) -> impl Iterator<Item = (Place, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.owner == color)
    }

    /// Count the pieces owned by one player.
    #[must_use]
    pub fn count_pieces(&self, color: Color) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let count = self.pieces_owned_by(color).count() as u32;
        count
    }

    /// Count all pieces on the board.
    #[must_use]
    pub fn total_pieces(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let count = self.pieces().count() as u32;
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PieceKind;

    #[test]
    fn test_place_display_algebraic() {
        assert_eq!(Place::new(0, 0).to_string(), "a1");
        assert_eq!(Place::new(4, 8).to_string(), "e9");
    }

    #[test]
    fn test_place_offset_bounds() {
        let place = Place::new(0, 0);
        assert_eq!(place.offset(1, 2, 8), Some(Place::new(1, 2)));
        assert_eq!(place.offset(-1, 0, 8), None);
        assert_eq!(place.offset(0, 8, 8), None);
    }

    #[test]
    fn test_move_manhattan() {
        let mv = Move::new(Place::new(0, 0), Place::new(2, 1));
        assert_eq!(mv.manhattan(), 3);
        assert_eq!(mv.to_string(), "a1-c2");
    }

    #[test]
    fn test_board_zero_size() {
        assert!(Board::new(0).is_none());
    }

    #[test]
    fn test_board_put_take() {
        let mut board = Board::new(9).expect("nonzero size");
        let place = Place::new(4, 4);
        let knight = Piece::new(PieceKind::Knight, Color::White);

        assert_eq!(board.piece_at(place), None);
        assert_eq!(board.put(place, knight), Some(None));
        assert_eq!(board.piece_at(place), Some(knight));
        assert_eq!(board.take(place), Some(knight));
        assert_eq!(board.piece_at(place), None);
    }

    #[test]
    fn test_board_put_out_of_bounds() {
        let mut board = Board::new(5).expect("nonzero size");
        let piece = Piece::new(PieceKind::Knight, Color::Black);
        assert_eq!(board.put(Place::new(5, 0), piece), None);
        assert_eq!(board.total_pieces(), 0);
    }

    #[test]
    fn test_board_iteration_order_is_row_major() {
        let mut board = Board::new(3).expect("nonzero size");
        let white = Piece::new(PieceKind::Knight, Color::White);
        board.put(Place::new(2, 0), white);
        board.put(Place::new(0, 2), white);
        board.put(Place::new(1, 0), white);

        let places: Vec<Place> = board.pieces().map(|(place, _)| place).collect();
        assert_eq!(
            places,
            vec![Place::new(1, 0), Place::new(2, 0), Place::new(0, 2)]
        );
    }

    #[test]
    fn test_board_counts_by_owner() {
        let mut board = Board::new(4).expect("nonzero size");
        board.put(Place::new(0, 0), Piece::new(PieceKind::Knight, Color::White));
        board.put(Place::new(1, 0), Piece::new(PieceKind::Rook, Color::White));
        board.put(Place::new(0, 3), Piece::new(PieceKind::Archer, Color::Black));

        assert_eq!(board.count_pieces(Color::White), 2);
        assert_eq!(board.count_pieces(Color::Black), 1);
        assert_eq!(board.total_pieces(), 3);
    }
}
