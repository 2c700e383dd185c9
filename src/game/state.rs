//! Game state: the board, the rule chain, history, score, and the turn
//! state machine.
//!
//! A [`Game`] is constructed once from a [`Configuration`], mutated one
//! applied move at a time, and becomes terminal when a winner is set.
//! Terminal is absorbing: further applies are refused. Rules and players
//! only ever see `&Game`, so nothing outside this type can mutate the
//! board.

use serde::{Deserialize, Serialize};

use crate::error::{ApplyError, ConfigError, RuleViolation};
use crate::game::rules::{Rule, standard_rules, validate_chain};
use crate::game::{
    Board, Color, Configuration, Move, Piece, PieceKind, Place, PlayerSpec, ScoringWeights,
    WinRule,
};

/// One entry of the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub color: Color,
    /// The move that was applied.
    pub mv: Move,
    /// Kind of the captured piece, if the move was a capture.
    pub captured: Option<PieceKind>,
}

/// Complete state of one game.
#[derive(Debug)]
pub struct Game {
    /// The piece grid.
    board: Board,
    /// The two players, indexed by [`Color::index`].
    players: [PlayerSpec; 2],
    /// The validation chain, in evaluation order.
    rules: Vec<Box<dyn Rule>>,
    /// Applied moves, oldest first.
    history: Vec<MoveRecord>,
    /// Scores, indexed by [`Color::index`].
    scores: [i64; 2],
    /// Side to move.
    current: Color,
    /// Winner, once the game is terminal.
    winner: Option<Color>,
    /// Piece counts at setup, indexed by [`Color::index`].
    initial_counts: [u32; 2],
    /// Scoring weights from the configuration.
    scoring: ScoringWeights,
    /// Win rule from the configuration.
    win_rule: WinRule,
    /// Central square (only meaningful under the central-square rule).
    center: Place,
}

impl Game {
    /// Construct a game from a configuration.
    ///
    /// # Errors
    ///
    /// Fails with a [`ConfigError`] when the configuration is invalid;
    /// nothing is partially constructed in that case.
    pub fn new(config: Configuration) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut board = Board::new(config.size).ok_or(ConfigError::BoardSizeZero)?;
        for &(place, piece) in &config.placements {
            // Validated above: in bounds, no duplicates.
            board.put(place, piece);
        }

        let center = config.center();
        let mut players = config.players;
        players.sort_by_key(|spec| spec.color.index());

        let initial_counts = [
            board.count_pieces(Color::White),
            board.count_pieces(Color::Black),
        ];

        Ok(Self {
            board,
            players,
            rules: standard_rules(config.protection_moves),
            history: Vec::new(),
            scores: [0, 0],
            current: Color::White,
            winner: None,
            initial_counts,
            scoring: config.scoring,
            win_rule: config.win_rule,
            center,
        })
    }

    /// The board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    #[must_use]
    pub const fn board_size(&self) -> u8 {
        self.board.size()
    }

    /// The piece at a place, if any.
    #[must_use]
    pub fn piece_at(&self, place: Place) -> Option<Piece> {
        self.board.piece_at(place)
    }

    /// The player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> Color {
        self.current
    }

    /// The spec of the player controlling a side.
    #[must_use]
    pub const fn player(&self, color: Color) -> &PlayerSpec {
        &self.players[color.index()]
    }

    /// The applied moves, oldest first.
    #[must_use]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Total number of moves applied so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let count = self.history.len() as u32;
        count
    }

    /// The winner, or `None` while the game is still running.
    #[must_use]
    pub const fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Whether the game has ended.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Current score of one side.
    #[must_use]
    pub const fn score(&self, color: Color) -> i64 {
        self.scores[color.index()]
    }

    /// Piece count one side started with.
    #[must_use]
    pub const fn initial_pieces(&self, color: Color) -> u32 {
        self.initial_counts[color.index()]
    }

    /// The scoring weights in force.
    #[must_use]
    pub const fn scoring(&self) -> ScoringWeights {
        self.scoring
    }

    /// The win rule in force.
    #[must_use]
    pub const fn win_rule(&self) -> WinRule {
        self.win_rule
    }

    /// Run the full rule chain against a candidate move.
    ///
    /// Pure and idempotent: no game state changes, and re-validating the
    /// same move against the same state gives the same answer.
    ///
    /// # Errors
    ///
    /// Returns the description of the first rule that rejects the move.
    pub fn validate_move(&self, mv: Move) -> Result<(), RuleViolation> {
        validate_chain(&self.rules, self, mv)
    }

    /// Every legal move for one side.
    ///
    /// Cells are scanned in row-major order and each piece's candidate
    /// list is generated in its fixed geometric order, so the result is
    /// deterministic for a given board state. Only moves that pass the
    /// entire rule chain are returned.
    #[must_use]
    pub fn available_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (place, piece) in self.board.pieces_owned_by(color) {
            for mv in piece.kind.candidate_moves(&self.board, place) {
                if self.validate_move(mv).is_ok() {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Apply one move for the side to move.
    ///
    /// Atomic: a refused move leaves the game untouched. On success the
    /// source cell is emptied, any opposing piece at the destination is
    /// captured, history and score are updated, the win rule is checked,
    /// and the turn passes to the opponent (unless the game just ended).
    ///
    /// # Errors
    ///
    /// - [`ApplyError::GameOver`] when the game is already terminal.
    /// - [`ApplyError::WrongSide`] when the source piece does not belong
    ///   to the side to move.
    /// - [`ApplyError::Rejected`] when the rule chain refuses the move.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveRecord, ApplyError> {
        if self.winner.is_some() {
            return Err(ApplyError::GameOver);
        }

        self.validate_move(mv).map_err(ApplyError::Rejected)?;

        // The chain guarantees an occupied, in-bounds source.
        let Some(mover) = self.board.piece_at(mv.from) else {
            return Err(ApplyError::Rejected(RuleViolation {
                rule: "no piece on the source square",
            }));
        };
        if mover.owner != self.current {
            return Err(ApplyError::WrongSide);
        }

        // All checks passed; mutate in one go.
        self.board.take(mv.from);
        let captured = self.board.put(mv.to, mover).flatten().map(|p| p.kind);

        let record = MoveRecord {
            color: mover.owner,
            mv,
            captured,
        };
        self.history.push(record);
        self.scores[mover.owner.index()] += self.scoring.delta(captured, mv);

        if self.move_wins(mover.owner, mv) {
            self.winner = Some(mover.owner);
        } else {
            self.current = self.current.opponent();
        }

        Ok(record)
    }

    /// Whether the just-applied move satisfies the win rule.
    fn move_wins(&self, mover: Color, mv: Move) -> bool {
        match self.win_rule {
            WinRule::CentralSquare => mv.to == self.center,
            WinRule::BackRank => mv.to.y == mover.opponent().home_rank(self.board.size()),
            WinRule::Annihilation => self.board.count_pieces(mover.opponent()) == 0,
        }
    }

    /// Record a no-legal-move loss: the stuck side's opponent wins.
    ///
    /// Ignored when the game is already terminal.
    pub fn declare_no_move_loss(&mut self, stuck: Color) {
        if self.winner.is_none() {
            self.winner = Some(stuck.opponent());
        }
    }
}
