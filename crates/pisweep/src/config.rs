//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use pisweep_core::constants::DEFAULT_MAX_WORKERS;
use pisweep_core::options::{Dispatch, SweepOptions};

/// Approximates π by parallel numerical integration and times
/// the sweep from 1 to 50 workers.
///
/// Without arguments the interval count is read interactively.
#[derive(Parser, Debug)]
#[command(name = "pisweep", version, about)]
pub struct AppConfig {
    /// Number of integration intervals (prompted for when omitted).
    #[arg(short = 'n', long, env = "PISWEEP_INTERVALS", value_parser = parse_intervals_arg)]
    pub intervals: Option<u64>,

    /// Highest worker count in the sweep.
    #[arg(long, default_value_t = DEFAULT_MAX_WORKERS, value_parser = parse_max_workers)]
    pub max_workers: usize,

    /// Worker strategy: threads (fresh threads per trial) or pool (rayon).
    #[arg(long, default_value = "threads")]
    pub dispatch: Dispatch,

    /// Clamp the last worker's sub-range to the domain's upper bound.
    #[arg(long)]
    pub clamp: bool,

    /// Print a summary of the fastest and slowest trials.
    #[arg(long)]
    pub summary: bool,

    /// Also write all trial outcomes to this file as JSON.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Sweep options derived from the flags.
    #[must_use]
    pub fn sweep_options(&self) -> SweepOptions {
        SweepOptions {
            max_workers: self.max_workers,
            dispatch: self.dispatch,
            clamp_last_range: self.clamp,
        }
        .normalize()
    }
}

fn parse_intervals_arg(s: &str) -> Result<u64, String> {
    pisweep_cli::parse_intervals(s).map_err(|e| e.to_string())
}

fn parse_max_workers(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("worker count must be at least 1".into()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
