// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Jesonmor: a deterministic engine for Jeson Mor-style board games.
//!
//! This crate provides a two-player, turn-based board-game engine built
//! around three ideas:
//! - A chain-of-responsibility move-validation pipeline
//! - Capability-based piece movement (geometry + blocking semantics)
//! - Pluggable win rules and scoring
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         Match Runner                │
//! ├─────────────────────────────────────┤
//! │    Game (board, history, score)     │
//! ├─────────────────────────────────────┤
//! │   Rule Chain / Piece Geometry       │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use jesonmor::game::{Color, Configuration, Game, Move, Place};
//!
//! let mut game = Game::new(Configuration::jeson_mor(9)).unwrap();
//!
//! // White opens with a knight jump from a1.
//! let mv = Move::new(Place::new(0, 0), Place::new(1, 2));
//! game.apply_move(mv).unwrap();
//!
//! assert_eq!(game.current_player(), Color::Black);
//! assert_eq!(game.move_count(), 1);
//! ```

pub mod error;
pub mod game;
pub mod runner;

pub use error::{ApplyError, ConfigError, InvariantViolation, MatchError, RuleViolation};

// Re-export key game types at crate root for convenience
pub use game::{
    Board, Color, Configuration, Game, Move, Piece, PieceKind, Place, PlayerController,
    PlayerSpec, WinRule,
};
pub use runner::{MatchReport, SeriesStats, Termination, run_match, run_series};
