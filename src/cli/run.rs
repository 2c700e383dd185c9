//! Run command implementation: one random-vs-random match.

use std::fs;
use std::path::PathBuf;

use jesonmor::game::{Configuration, RandomPlayer};
use jesonmor::runner::run_match;

use super::output::{JsonMatchResult, format_text, render_board};
use super::{CliError, OutputFormat, WinRuleArg};

/// Pick a seed from the wall clock when none was given.
pub(crate) fn seed_or_clock(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| {
                #[allow(clippy::cast_possible_truncation)]
                let nanos = d.as_nanos() as u64;
                nanos
            })
            .unwrap_or(42)
    })
}

/// Build a configuration from the CLI flags, or load one from JSON.
pub(crate) fn build_config(
    config_path: Option<&PathBuf>,
    size: u8,
    protection: u32,
    win_rule: WinRuleArg,
) -> Result<Configuration, CliError> {
    if let Some(path) = config_path {
        let text = fs::read_to_string(path)
            .map_err(|e| CliError::new(format!("failed to read {}: {e}", path.display())))?;
        return serde_json::from_str(&text)
            .map_err(|e| CliError::new(format!("invalid configuration in {}: {e}", path.display())));
    }

    let mut config = Configuration::jeson_mor(size);
    config.protection_moves = protection;
    config.win_rule = win_rule.into();
    Ok(config)
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the match aborts.
#[allow(clippy::too_many_arguments)]
pub(crate) fn execute(
    config_path: Option<PathBuf>,
    size: u8,
    seed: Option<u64>,
    protection: u32,
    win_rule: WinRuleArg,
    max_moves: u32,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let seed = seed_or_clock(seed);
    let config = build_config(config_path.as_ref(), size, protection, win_rule)?;

    if !quiet {
        println!("Running match with seed {seed}...");
        println!();
    }

    let mut white = RandomPlayer::new("random-white", seed.wrapping_mul(2));
    let mut black = RandomPlayer::new("random-black", seed.wrapping_mul(2).wrapping_add(1));
    let report = run_match(config, &mut white, &mut black, max_moves)?;

    match format {
        OutputFormat::Text => {
            if !quiet {
                print!("{}", render_board(&report.game));
                println!();
            }
            print!("{}", format_text(&report, seed));
        }
        OutputFormat::Json => {
            let json_result = JsonMatchResult::from_report(&report, seed);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
