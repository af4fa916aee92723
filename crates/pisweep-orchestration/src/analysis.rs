//! Sweep analysis: timing extremes, speedup, and estimate spread.

use std::time::Duration;

use serde::Serialize;

use pisweep_core::error::PiError;

use crate::interfaces::{serialize_secs, TrialOutcome};

/// Summary of a completed sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSummary {
    /// Number of trials analysed.
    pub trials: usize,
    /// Worker count of the first trial, used as the speedup baseline.
    pub baseline_workers: usize,
    #[serde(rename = "baseline_secs", serialize_with = "serialize_secs")]
    pub baseline_elapsed: Duration,
    /// Worker count of the fastest trial (lowest W on ties).
    pub fastest_workers: usize,
    #[serde(rename = "fastest_secs", serialize_with = "serialize_secs")]
    pub fastest_elapsed: Duration,
    /// Worker count of the slowest trial (highest W on ties).
    pub slowest_workers: usize,
    #[serde(rename = "slowest_secs", serialize_with = "serialize_secs")]
    pub slowest_elapsed: Duration,
    /// Baseline time divided by the fastest time.
    pub speedup: f64,
    /// Largest minus smallest estimate across the sweep.
    pub estimate_spread: f64,
}

/// Analyse a sweep's outcomes.
pub fn analyze_sweep(outcomes: &[TrialOutcome]) -> Result<SweepSummary, PiError> {
    let baseline = outcomes.first().ok_or(PiError::EmptySweep)?;

    let fastest = outcomes
        .iter()
        .min_by_key(|o| o.elapsed)
        .ok_or(PiError::EmptySweep)?;
    let slowest = outcomes
        .iter()
        .max_by_key(|o| o.elapsed)
        .ok_or(PiError::EmptySweep)?;

    let (min_estimate, max_estimate) = outcomes.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), o| (lo.min(o.estimate), hi.max(o.estimate)),
    );

    let fastest_secs = fastest.elapsed.as_secs_f64();
    let speedup = if fastest_secs > 0.0 {
        baseline.elapsed.as_secs_f64() / fastest_secs
    } else {
        1.0
    };

    Ok(SweepSummary {
        trials: outcomes.len(),
        baseline_workers: baseline.workers,
        baseline_elapsed: baseline.elapsed,
        fastest_workers: fastest.workers,
        fastest_elapsed: fastest.elapsed,
        slowest_workers: slowest.workers,
        slowest_elapsed: slowest.elapsed,
        speedup,
        estimate_spread: max_estimate - min_estimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(workers: usize, estimate: f64, millis: u64) -> TrialOutcome {
        TrialOutcome {
            workers,
            estimate,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn empty_sweep_is_an_error() {
        assert!(matches!(analyze_sweep(&[]), Err(PiError::EmptySweep)));
    }

    #[test]
    fn single_trial() {
        let summary = analyze_sweep(&[outcome(1, 3.0, 10)]).unwrap();
        assert_eq!(summary.trials, 1);
        assert_eq!(summary.fastest_workers, 1);
        assert_eq!(summary.slowest_workers, 1);
        assert_eq!(summary.speedup, 1.0);
        assert_eq!(summary.estimate_spread, 0.0);
    }

    #[test]
    fn fastest_and_slowest() {
        let outcomes = vec![
            outcome(1, 3.0, 40),
            outcome(2, 3.5, 20),
            outcome(3, 3.25, 10),
            outcome(4, 3.0, 80),
        ];
        let summary = analyze_sweep(&outcomes).unwrap();
        assert_eq!(summary.baseline_workers, 1);
        assert_eq!(summary.fastest_workers, 3);
        assert_eq!(summary.slowest_workers, 4);
        assert!((summary.speedup - 4.0).abs() < 1e-12);
        assert_eq!(summary.estimate_spread, 0.5);
    }

    #[test]
    fn ties_prefer_lowest_fastest_and_highest_slowest() {
        let outcomes = vec![outcome(1, 3.0, 5), outcome(2, 3.0, 5)];
        let summary = analyze_sweep(&outcomes).unwrap();
        assert_eq!(summary.fastest_workers, 1);
        assert_eq!(summary.slowest_workers, 2);
    }

    #[test]
    fn zero_duration_speedup_defaults_to_one() {
        let outcomes = vec![outcome(1, 3.0, 0), outcome(2, 3.0, 0)];
        assert_eq!(analyze_sweep(&outcomes).unwrap().speedup, 1.0);
    }

    #[test]
    fn summary_serializes_seconds() {
        let summary = analyze_sweep(&[outcome(1, 3.0, 500)]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["baseline_secs"], 0.5);
        assert_eq!(json["fastest_workers"], 1);
        assert_eq!(json["trials"], 1);
    }
}
