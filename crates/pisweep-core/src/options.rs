//! Sweep options and dispatch strategy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_WORKERS;
use crate::error::PiError;

/// How the workers of one trial are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dispatch {
    /// Fresh scoped OS threads per trial, one per sub-range.
    #[default]
    Threads,
    /// The shared rayon pool; threads are reused across trials.
    Pool,
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Threads => f.write_str("threads"),
            Self::Pool => f.write_str("pool"),
        }
    }
}

impl FromStr for Dispatch {
    type Err = PiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "threads" | "thread" => Ok(Self::Threads),
            "pool" | "rayon" => Ok(Self::Pool),
            other => Err(PiError::Input(format!("unknown dispatch strategy: {other}"))),
        }
    }
}

/// Options shared by every trial of a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOptions {
    /// Highest worker count; the sweep runs W = 1..=`max_workers`.
    pub max_workers: usize,
    /// Worker execution strategy.
    pub dispatch: Dispatch,
    /// Clamp the last sub-range's end to the domain's upper bound.
    pub clamp_last_range: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
            dispatch: Dispatch::Threads,
            clamp_last_range: false,
        }
    }
}

impl SweepOptions {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_workers == 0 {
            self.max_workers = DEFAULT_MAX_WORKERS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = SweepOptions::default();
        assert_eq!(opts.max_workers, 50);
        assert_eq!(opts.dispatch, Dispatch::Threads);
        assert!(!opts.clamp_last_range);
    }

    #[test]
    fn normalize_zero_max_workers() {
        let opts = SweepOptions {
            max_workers: 0,
            ..Default::default()
        }
        .normalize();
        assert_eq!(opts.max_workers, DEFAULT_MAX_WORKERS);
    }

    #[test]
    fn normalize_keeps_explicit_values() {
        let opts = SweepOptions {
            max_workers: 8,
            dispatch: Dispatch::Pool,
            clamp_last_range: true,
        }
        .normalize();
        assert_eq!(opts.max_workers, 8);
        assert_eq!(opts.dispatch, Dispatch::Pool);
        assert!(opts.clamp_last_range);
    }

    #[test]
    fn dispatch_parse_and_display() {
        assert_eq!("threads".parse::<Dispatch>().unwrap(), Dispatch::Threads);
        assert_eq!("Pool".parse::<Dispatch>().unwrap(), Dispatch::Pool);
        assert_eq!("rayon".parse::<Dispatch>().unwrap(), Dispatch::Pool);
        assert!("fibers".parse::<Dispatch>().is_err());
        assert_eq!(Dispatch::Pool.to_string(), "pool");
        assert_eq!(Dispatch::Threads.to_string(), "threads");
    }
}
