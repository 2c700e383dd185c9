//! Error types for the game engine.
//!
//! Three distinct failure classes, kept deliberately separate:
//!
//! - [`RuleViolation`] - a candidate move failed one validator. Expected,
//!   recoverable, surfaced as rejection text and never fatal.
//! - [`ConfigError`] - an invalid [`Configuration`](crate::game::Configuration)
//!   fails game construction outright.
//! - [`InvariantViolation`] - a programming error (for example a controller
//!   returning a move it was never offered). Aborts the match.

use std::fmt;

use crate::game::{Color, Place};

/// A candidate move was rejected by one rule in the validation chain.
///
/// Carries the description of the first rule that failed; the chain
/// short-circuits, so there is always exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleViolation {
    /// Description of the rule that rejected the move.
    pub rule: &'static str,
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move rejected: {}", self.rule)
    }
}

impl std::error::Error for RuleViolation {}

/// Reasons [`Game::apply_move`](crate::game::Game::apply_move) can refuse
/// a move without touching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyError {
    /// The rule chain rejected the move.
    Rejected(RuleViolation),
    /// The source piece does not belong to the side to move.
    WrongSide,
    /// The game is already terminal.
    GameOver,
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(violation) => write!(f, "{violation}"),
            Self::WrongSide => write!(f, "piece does not belong to the side to move"),
            Self::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for ApplyError {}

/// Errors raised while validating a [`Configuration`](crate::game::Configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size must be at least 1.
    BoardSizeZero,
    /// An initial placement lies outside the board.
    PlacementOutOfBounds(Place),
    /// Two initial placements target the same cell.
    DuplicatePlacement(Place),
    /// Both player specs claim the same color.
    DuplicateColors(Color),
    /// The central-square win rule needs an odd board size.
    EvenBoardForCentralWin(u8),
    /// A player starts with no pieces at all.
    EmptySide(Color),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoardSizeZero => write!(f, "board size must be at least 1"),
            Self::PlacementOutOfBounds(place) => {
                write!(f, "initial placement {place} is outside the board")
            }
            Self::DuplicatePlacement(place) => {
                write!(f, "two initial placements target {place}")
            }
            Self::DuplicateColors(color) => {
                write!(f, "both players are configured as {color}")
            }
            Self::EvenBoardForCentralWin(size) => {
                write!(
                    f,
                    "central-square win rule needs an odd board size, got {size}"
                )
            }
            Self::EmptySide(color) => write!(f, "{color} starts with no pieces"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A broken engine invariant - a bug, not a user-facing rule failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    /// Create a new violation from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Errors produced while driving a full match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Game construction failed.
    Config(ConfigError),
    /// A controller or the engine broke an invariant mid-match.
    Invariant(InvariantViolation),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Invariant(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Invariant(e) => Some(e),
        }
    }
}

impl From<ConfigError> for MatchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<InvariantViolation> for MatchError {
    fn from(e: InvariantViolation) -> Self {
        Self::Invariant(e)
    }
}
