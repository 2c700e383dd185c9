//! Engine layer for Jeson Mor-style games.
//!
//! Implements the game semantics on top of plain value types:
//! - Board with places, moves, and piece slots
//! - Piece kinds and their candidate-move geometry
//! - The ordered move-validation rule chain
//! - Players: identity specs and pluggable decision sources
//! - Game state: history, scoring, win detection, turn alternation

mod board;
mod config;
mod invariants;
mod piece;
mod player;
mod rules;
mod state;

pub use board::{Board, Move, Place};
pub use config::{Configuration, ScoringWeights, WinRule};
pub use invariants::check_invariants;
pub use piece::{KNIGHT_OFFSETS, Piece, PieceKind, RAY_DIRECTIONS};
pub use player::{Color, PlayerController, PlayerSpec, RandomPlayer, ScriptedPlayer};
pub use rules::{
    ArcherMoveRule, KnightMoveRule, NilMoveRule, OccupiedRule, OutOfBoundaryRule, ProtectionRule,
    RookMoveRule, Rule, VacantRule, standard_rules, validate_chain,
};
pub use state::{Game, MoveRecord};
