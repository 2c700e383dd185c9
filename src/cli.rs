//! CLI command implementations.

pub(crate) mod play;
pub(crate) mod run;
pub(crate) mod series;

mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;

use jesonmor::game::WinRule;

/// Output format for the `run` and `series` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Win rule selector, mapped onto [`WinRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum WinRuleArg {
    /// Moving onto the central square wins (classic Jeson Mor).
    Central,
    /// Reaching the opponent's home rank wins.
    BackRank,
    /// Capturing the opponent's last piece wins.
    Annihilation,
}

impl From<WinRuleArg> for WinRule {
    fn from(arg: WinRuleArg) -> Self {
        match arg {
            WinRuleArg::Central => Self::CentralSquare,
            WinRuleArg::BackRank => Self::BackRank,
            WinRuleArg::Annihilation => Self::Annihilation,
        }
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<jesonmor::MatchError> for CliError {
    fn from(e: jesonmor::MatchError) -> Self {
        Self::new(e.to_string())
    }
}
