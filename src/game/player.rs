//! Player identity and decision sources.
//!
//! A [`PlayerSpec`] is static identity (name and color); a
//! [`PlayerController`] is the polymorphic decision source that picks one
//! move from the legal set each turn. Controllers never touch board state
//! directly - they receive the [`Game`] read-only.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::game::{Game, Move};

/// The two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Moves first; home rank is `y = 0`.
    White,
    /// Home rank is `y = size - 1`.
    Black,
}

impl Color {
    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Dense index (White = 0, Black = 1) for score and name tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }

    /// This side's home rank on a board of the given size.
    #[must_use]
    pub const fn home_rank(self, size: u8) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => size - 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "White"),
            Self::Black => write!(f, "Black"),
        }
    }
}

/// Static identity of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    /// Display name.
    pub name: String,
    /// Which side this player controls.
    pub color: Color,
}

impl PlayerSpec {
    /// Create a new player spec.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// A decision source: produces one move given the set of legal moves.
///
/// The returned move must be a member of `available`; the match runner
/// treats anything else as an invariant violation and aborts. `available`
/// is never empty when this is called (an empty set already ended the game
/// as a no-legal-move loss).
pub trait PlayerController {
    /// Pick the next move. May block on external input.
    fn next_move(&mut self, game: &Game, available: &[Move]) -> Move;

    /// Short name for reports.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn PlayerController + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerController")
            .field("name", &self.name())
            .finish()
    }
}

/// Deterministic hash used for seeded move selection.
fn simple_hash(seed: u64, index: u64) -> u64 {
    let mut x = seed.wrapping_add(index);
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    x ^= x >> 33;
    x
}

/// Picks a uniformly pseudo-random legal move from an injected seed.
///
/// The sequence is a pure function of the seed and the call count, so
/// matches replay bit-exactly - no global generator involved.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    /// Display name.
    name: String,
    /// Seed this player was constructed with.
    seed: u64,
    /// Number of decisions made so far.
    decisions: u64,
}

impl RandomPlayer {
    /// Create a new random player from a seed.
    #[must_use]
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            seed,
            decisions: 0,
        }
    }
}

impl PlayerController for RandomPlayer {
    fn next_move(&mut self, _game: &Game, available: &[Move]) -> Move {
        let roll = simple_hash(self.seed, self.decisions);
        self.decisions += 1;
        available[usize::try_from(roll % available.len() as u64).unwrap_or(0)]
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays a fixed move list; used by tests and scripted scenarios.
///
/// Falls back to the first legal move once the script runs out, so a short
/// script still drives a full game deterministically.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    /// Display name.
    name: String,
    /// Remaining scripted moves.
    script: VecDeque<Move>,
}

impl ScriptedPlayer {
    /// Create a scripted player from a move list.
    #[must_use]
    pub fn new(name: impl Into<String>, script: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: name.into(),
            script: script.into_iter().collect(),
        }
    }

    /// Number of scripted moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl PlayerController for ScriptedPlayer {
    fn next_move(&mut self, _game: &Game, available: &[Move]) -> Move {
        match self.script.pop_front() {
            Some(mv) => mv,
            None => available[0],
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
