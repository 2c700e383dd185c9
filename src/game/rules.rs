//! The move-validation chain.
//!
//! Legality is decided by a fixed, ordered list of stateless [`Rule`]
//! predicates. Global rules run first (nil move, vacancy, bounds, friendly
//! fire, the opening protection window), then one shape rule per piece
//! kind. The chain short-circuits on the first failure and reports that
//! rule's description, so rejection text is always specific.
//!
//! Shape rules for non-matching piece kinds report success ("not
//! applicable") rather than failing; every rule is also safe to evaluate
//! on its own, regardless of what ran before it.

use crate::error::RuleViolation;
use crate::game::{Board, Game, Move, PieceKind, Place};

/// A pure validator over (game, move).
///
/// Rules read game state but never mutate it; validating the same pair
/// twice always yields the same answer.
pub trait Rule: std::fmt::Debug {
    /// Whether the move passes this rule.
    fn validate(&self, game: &Game, mv: Move) -> bool;

    /// Human-readable description, used as rejection text.
    fn description(&self) -> &'static str;
}

/// Run a chain of rules in order, returning the first failure.
///
/// # Errors
///
/// Returns a [`RuleViolation`] carrying the description of the first rule
/// that rejected the move.
pub fn validate_chain(rules: &[Box<dyn Rule>], game: &Game, mv: Move) -> Result<(), RuleViolation> {
    for rule in rules {
        if !rule.validate(game, mv) {
            return Err(RuleViolation {
                rule: rule.description(),
            });
        }
    }
    Ok(())
}

/// The standard chain: global rules first, then the shape rules.
#[must_use]
pub fn standard_rules(protection_moves: u32) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(NilMoveRule),
        Box::new(VacantRule),
        Box::new(OutOfBoundaryRule),
        Box::new(OccupiedRule),
        Box::new(ProtectionRule::new(protection_moves)),
        Box::new(KnightMoveRule),
        Box::new(ArcherMoveRule),
        Box::new(RookMoveRule),
    ]
}

/// Rejects moves whose source and destination coincide.
#[derive(Debug, Clone, Copy)]
pub struct NilMoveRule;

impl Rule for NilMoveRule {
    fn validate(&self, _game: &Game, mv: Move) -> bool {
        mv.from != mv.to
    }

    fn description(&self) -> &'static str {
        "source and destination are the same square"
    }
}

/// Rejects moves from an empty square.
#[derive(Debug, Clone, Copy)]
pub struct VacantRule;

impl Rule for VacantRule {
    fn validate(&self, game: &Game, mv: Move) -> bool {
        game.board().piece_at(mv.from).is_some()
    }

    fn description(&self) -> &'static str {
        "no piece on the source square"
    }
}

/// Rejects moves with either endpoint off the board.
#[derive(Debug, Clone, Copy)]
pub struct OutOfBoundaryRule;

impl Rule for OutOfBoundaryRule {
    fn validate(&self, game: &Game, mv: Move) -> bool {
        game.board().in_bounds(mv.from) && game.board().in_bounds(mv.to)
    }

    fn description(&self) -> &'static str {
        "move leaves the board"
    }
}

/// Rejects capturing your own piece. Capturing an opponent is legal.
#[derive(Debug, Clone, Copy)]
pub struct OccupiedRule;

impl Rule for OccupiedRule {
    fn validate(&self, game: &Game, mv: Move) -> bool {
        let Some(mover) = game.board().piece_at(mv.from) else {
            return true;
        };
        match game.board().piece_at(mv.to) {
            Some(target) => target.owner != mover.owner,
            None => true,
        }
    }

    fn description(&self) -> &'static str {
        "destination is occupied by a friendly piece"
    }
}

/// Bans captures during the first N moves of the game.
#[derive(Debug, Clone, Copy)]
pub struct ProtectionRule {
    /// Number of opening moves during which captures are disallowed.
    window: u32,
}

impl ProtectionRule {
    /// Create a protection rule with the given window.
    #[must_use]
    pub const fn new(window: u32) -> Self {
        Self { window }
    }
}

impl Rule for ProtectionRule {
    fn validate(&self, game: &Game, mv: Move) -> bool {
        if game.move_count() >= self.window {
            return true;
        }
        let Some(mover) = game.board().piece_at(mv.from) else {
            return true;
        };
        match game.board().piece_at(mv.to) {
            Some(target) => target.owner == mover.owner,
            None => true,
        }
    }

    fn description(&self) -> &'static str {
        "captures are disabled during the opening protection window"
    }
}

/// Count the pieces strictly between two squares on a shared rank or file.
///
/// Returns `None` when the squares are not orthogonally colinear.
fn pieces_between(board: &Board, from: Place, to: Place) -> Option<u32> {
    if from == to || (from.x != to.x && from.y != to.y) {
        return None;
    }

    let dx = (i16::from(to.x) - i16::from(from.x)).signum();
    let dy = (i16::from(to.y) - i16::from(from.y)).signum();

    let mut count = 0;
    let mut step = 1;
    loop {
        let Some(square) = from.offset(dx * step, dy * step, board.size()) else {
            return None;
        };
        if square == to {
            return Some(count);
        }
        if board.piece_at(square).is_some() {
            count += 1;
        }
        step += 1;
    }
}

/// Shape rule for knights: an L-shaped jump, blind to intervening pieces.
#[derive(Debug, Clone, Copy)]
pub struct KnightMoveRule;

impl Rule for KnightMoveRule {
    fn validate(&self, game: &Game, mv: Move) -> bool {
        match game.board().piece_at(mv.from) {
            Some(piece) if piece.kind == PieceKind::Knight => {
                let dx = (i16::from(mv.to.x) - i16::from(mv.from.x)).abs();
                let dy = (i16::from(mv.to.y) - i16::from(mv.from.y)).abs();
                (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
            }
            _ => true,
        }
    }

    fn description(&self) -> &'static str {
        "knights move in an L shape"
    }
}

/// Shape rule for rooks: a clear orthogonal line.
#[derive(Debug, Clone, Copy)]
pub struct RookMoveRule;

impl Rule for RookMoveRule {
    fn validate(&self, game: &Game, mv: Move) -> bool {
        match game.board().piece_at(mv.from) {
            Some(piece) if piece.kind == PieceKind::Rook => {
                pieces_between(game.board(), mv.from, mv.to) == Some(0)
            }
            _ => true,
        }
    }

    fn description(&self) -> &'static str {
        "rooks slide along a clear rank or file"
    }
}

/// Shape rule for archers: quiet moves need a clear line, captures need
/// exactly one screen piece to jump over.
#[derive(Debug, Clone, Copy)]
pub struct ArcherMoveRule;

impl Rule for ArcherMoveRule {
    fn validate(&self, game: &Game, mv: Move) -> bool {
        match game.board().piece_at(mv.from) {
            Some(piece) if piece.kind == PieceKind::Archer => {
                let Some(screens) = pieces_between(game.board(), mv.from, mv.to) else {
                    return false;
                };
                if game.board().piece_at(mv.to).is_some() {
                    screens == 1
                } else {
                    screens == 0
                }
            }
            _ => true,
        }
    }

    fn description(&self) -> &'static str {
        "archers need a clear line, or exactly one screen to capture over"
    }
}
