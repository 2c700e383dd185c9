//! Jesonmor CLI - run, play, and batch-run Jeson Mor-style matches.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Jesonmor - a deterministic board-game engine
#[derive(Parser, Debug)]
#[command(name = "jesonmor")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single match between two seeded random players
    Run {
        /// Load a full configuration from a JSON file instead of flags
        #[arg(long)]
        config: Option<std::path::PathBuf>,

        /// Board size (odd for the central-square win rule)
        #[arg(long, default_value = "9")]
        size: u8,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Opening moves during which captures are banned
        #[arg(short, long, default_value = "0")]
        protection: u32,

        /// Win rule: central, back-rank, or annihilation
        #[arg(short, long, default_value = "central")]
        win_rule: cli::WinRuleArg,

        /// Maximum moves before the match is called a draw
        #[arg(short, long, default_value = "300")]
        max_moves: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress the board and progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Play interactively against a random bot
    Play {
        /// Side to play: white or black
        #[arg(short, long)]
        color: Option<String>,

        /// Board size (odd for the central-square win rule)
        #[arg(long, default_value = "9")]
        size: u8,

        /// Random seed for the bot
        #[arg(short, long)]
        seed: Option<u64>,

        /// Opening moves during which captures are banned
        #[arg(short, long, default_value = "0")]
        protection: u32,

        /// Win rule: central, back-rank, or annihilation
        #[arg(short, long, default_value = "central")]
        win_rule: cli::WinRuleArg,

        /// Maximum moves before the match is called a draw
        #[arg(short, long, default_value = "300")]
        max_moves: u32,
    },

    /// Run many matches in parallel and aggregate statistics
    Series {
        /// Load a full configuration from a JSON file instead of flags
        #[arg(long)]
        config: Option<std::path::PathBuf>,

        /// Board size (odd for the central-square win rule)
        #[arg(long, default_value = "9")]
        size: u8,

        /// Number of matches to run
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each match)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Opening moves during which captures are banned
        #[arg(short, long, default_value = "0")]
        protection: u32,

        /// Win rule: central, back-rank, or annihilation
        #[arg(short, long, default_value = "central")]
        win_rule: cli::WinRuleArg,

        /// Maximum moves before a match is called a draw
        #[arg(short, long, default_value = "300")]
        max_moves: u32,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            config,
            size,
            seed,
            protection,
            win_rule,
            max_moves,
            format,
            quiet,
        } => cli::run::execute(
            config, size, seed, protection, win_rule, max_moves, format, quiet,
        ),

        Commands::Play {
            color,
            size,
            seed,
            protection,
            win_rule,
            max_moves,
        } => cli::play::execute(color, size, seed, protection, win_rule, max_moves),

        Commands::Series {
            config,
            size,
            games,
            seed,
            protection,
            win_rule,
            max_moves,
            threads,
            format,
        } => cli::series::execute(
            config, size, games, seed, protection, win_rule, max_moves, threads, format,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
