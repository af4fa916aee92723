//! Orchestration interfaces.

use std::time::Duration;

use serde::Serialize;

use crate::analysis::SweepSummary;

/// Result of one fork-join trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialOutcome {
    /// Worker count W.
    pub workers: usize,
    /// Reduced π estimate.
    pub estimate: f64,
    /// Wall-clock time from dispatch to join.
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

/// Trait for receiving trial outcomes as a sweep progresses.
pub trait TrialObserver: Send + Sync {
    /// Called once per trial, in increasing worker order.
    fn on_trial(&self, outcome: &TrialOutcome);

    /// Called after the last trial of a successful sweep.
    fn on_sweep_complete(&self, _outcomes: &[TrialOutcome]) {}
}

/// Trait for presenting sweep results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one trial report.
    fn present_outcome(&self, outcome: &TrialOutcome);

    /// Present the sweep summary.
    fn present_summary(&self, summary: &SweepSummary);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Null observer (does nothing).
pub struct NullObserver;

impl TrialObserver for NullObserver {
    fn on_trial(&self, _outcome: &TrialOutcome) {}
}

/// Forwards every notification to each wrapped observer in order.
pub struct CompositeObserver<'a> {
    observers: Vec<&'a dyn TrialObserver>,
}

impl<'a> CompositeObserver<'a> {
    #[must_use]
    pub fn new(observers: Vec<&'a dyn TrialObserver>) -> Self {
        Self { observers }
    }
}

impl TrialObserver for CompositeObserver<'_> {
    fn on_trial(&self, outcome: &TrialOutcome) {
        for observer in &self.observers {
            observer.on_trial(outcome);
        }
    }

    fn on_sweep_complete(&self, outcomes: &[TrialOutcome]) {
        for observer in &self.observers {
            observer.on_sweep_complete(outcomes);
        }
    }
}

pub(crate) fn serialize_secs<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64(d.as_secs_f64())
}
