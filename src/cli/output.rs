//! Output formatting utilities for CLI.

use serde::Serialize;

use jesonmor::game::{Color, Game, Place};
use jesonmor::runner::{MatchReport, SeriesStats, Termination};

/// JSON-serializable match result.
#[derive(Debug, Serialize)]
pub(super) struct JsonMatchResult {
    /// Random seed used.
    pub(super) seed: u64,
    /// Winning side (null if draw).
    pub(super) winner: Option<String>,
    /// Why the match ended.
    pub(super) termination: Termination,
    /// Total moves played.
    pub(super) moves_played: u32,
    /// Per-player results.
    pub(super) players: Vec<JsonPlayerResult>,
    /// Move history in algebraic notation.
    pub(super) history: Vec<String>,
}

/// JSON-serializable per-player result.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayerResult {
    /// Side name ("White"/"Black").
    pub(super) color: String,
    /// Controller name.
    pub(super) name: String,
    /// Final score.
    pub(super) score: i64,
    /// Pieces left on the board.
    pub(super) pieces: u32,
}

impl JsonMatchResult {
    /// Create from a match report.
    pub(super) fn from_report(report: &MatchReport, seed: u64) -> Self {
        let game = &report.game;
        Self {
            seed,
            winner: report.winner().map(|color| color.to_string()),
            termination: report.termination,
            moves_played: report.moves_played(),
            players: [Color::White, Color::Black]
                .into_iter()
                .map(|color| JsonPlayerResult {
                    color: color.to_string(),
                    name: game.player(color).name.clone(),
                    score: game.score(color),
                    pieces: game.board().count_pieces(color),
                })
                .collect(),
            history: game
                .move_history()
                .iter()
                .map(|record| record.mv.to_string())
                .collect(),
        }
    }
}

/// Format a match report as human-readable text.
pub(super) fn format_text(report: &MatchReport, seed: u64) -> String {
    let game = &report.game;
    let mut output = String::new();

    output.push_str(&format!("Match Result (seed: {seed})\n"));
    match report.winner() {
        Some(color) => {
            output.push_str(&format!(
                "  Winner: {color} ({})\n",
                game.player(color).name
            ));
        }
        None => output.push_str("  Winner: Draw\n"),
    }
    let ending = match report.termination {
        Termination::Victory => "win rule satisfied",
        Termination::NoLegalMoves => "opponent had no legal moves",
        Termination::MoveLimit => "move limit reached",
    };
    output.push_str(&format!("  Ended: {ending}\n"));
    output.push_str(&format!("  Moves: {}\n\n", report.moves_played()));

    for color in [Color::White, Color::Black] {
        output.push_str(&format!(
            "  {color}: {} points, {} pieces left ({})\n",
            game.score(color),
            game.board().count_pieces(color),
            game.player(color).name
        ));
    }

    output
}

/// Format aggregated series statistics as human-readable text.
pub(super) fn format_series_text(stats: &SeriesStats, base_seed: u64) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Series Result (base seed: {base_seed}, {} games)\n",
        stats.games_played
    ));
    output.push_str(&format!("  White wins: {}\n", stats.white_wins));
    output.push_str(&format!("  Black wins: {}\n", stats.black_wins));
    output.push_str(&format!("  Draws:      {}\n", stats.draws));
    output.push_str(&format!("  Mean moves: {}\n", stats.mean_moves()));

    output
}

/// Render the board as an ASCII grid, ranks top-down.
///
/// ```text
///   9  n n n n n n n n n
///   ...
///   1  N N N N N N N N N
///      a b c d e f g h i
/// ```
pub(super) fn render_board(game: &Game) -> String {
    let size = game.board_size();
    let mut output = String::new();

    for y in (0..size).rev() {
        output.push_str(&format!("{:>3}  ", u16::from(y) + 1));
        for x in 0..size {
            let cell = game
                .piece_at(Place::new(x, y))
                .map_or('.', jesonmor::game::Piece::label);
            output.push(cell);
            output.push(' ');
        }
        output.push('\n');
    }

    output.push_str("     ");
    for x in 0..size.min(26) {
        output.push(char::from(b'a' + x));
        output.push(' ');
    }
    output.push('\n');

    output
}
