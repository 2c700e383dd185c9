//! Series command implementation: many matches, aggregated statistics.

use std::path::PathBuf;
use std::time::Instant;

use jesonmor::runner::run_series;

use super::output::format_series_text;
use super::run::{build_config, seed_or_clock};
use super::{CliError, OutputFormat, WinRuleArg};

/// Execute the series command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
#[allow(clippy::too_many_arguments)]
pub(crate) fn execute(
    config_path: Option<PathBuf>,
    size: u8,
    games: u64,
    seed: Option<u64>,
    protection: u32,
    win_rule: WinRuleArg,
    max_moves: u32,
    threads: Option<usize>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let base_seed = seed_or_clock(seed);
    let config = build_config(config_path.as_ref(), size, protection, win_rule)?;

    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let start = Instant::now();
    let stats = run_series(&config, games, base_seed, max_moves)?;
    let duration = start.elapsed();

    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        #[allow(clippy::cast_precision_loss)]
        let played = stats.games_played as f64;
        played / duration.as_secs_f64()
    } else {
        0.0
    };

    match format {
        OutputFormat::Text => {
            print!("{}", format_series_text(&stats, base_seed));
            println!(
                "Duration: {:.2}s ({games_per_sec:.0} games/sec)",
                duration.as_secs_f64()
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
