//! Sweep driver: one trial per worker count, strictly in sequence.

use tracing::{debug, info};

use pisweep_core::domain::{IntegrationDomain, StepSize};
use pisweep_core::error::PiError;
use pisweep_core::options::SweepOptions;

use crate::interfaces::{NullObserver, TrialObserver, TrialOutcome};
use crate::trial::run_trial;

/// Lazy sweep over W = 1..=`max_workers`.
///
/// Each call to `next` runs one complete trial. After the first failed
/// trial the iterator is exhausted.
pub struct Sweep {
    domain: IntegrationDomain,
    step: StepSize,
    opts: SweepOptions,
    next_workers: usize,
    failed: bool,
}

impl Sweep {
    /// Prepare a sweep over the unit domain with `intervals` rectangles.
    pub fn new(intervals: u64, opts: SweepOptions) -> Result<Self, PiError> {
        let domain = IntegrationDomain::UNIT;
        let step = StepSize::from_intervals(domain, intervals)?;
        let opts = opts.normalize();
        debug!(
            intervals,
            step = step.value(),
            max_workers = opts.max_workers,
            "sweep prepared"
        );
        Ok(Self {
            domain,
            step,
            opts,
            next_workers: 1,
            failed: false,
        })
    }

    #[must_use]
    pub fn step(&self) -> &StepSize {
        &self.step
    }

    #[must_use]
    pub fn options(&self) -> &SweepOptions {
        &self.opts
    }

    fn remaining(&self) -> usize {
        if self.failed {
            0
        } else {
            (self.opts.max_workers + 1).saturating_sub(self.next_workers)
        }
    }
}

impl Iterator for Sweep {
    type Item = Result<TrialOutcome, PiError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let workers = self.next_workers;
        self.next_workers += 1;

        let result = run_trial(self.domain, &self.step, workers, &self.opts);
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining.min(1), Some(remaining))
    }
}

/// Run a complete sweep and collect every outcome.
pub fn run_sweep(intervals: u64, opts: &SweepOptions) -> Result<Vec<TrialOutcome>, PiError> {
    run_sweep_with_observer(intervals, opts, &NullObserver)
}

/// Run a complete sweep, notifying `observer` after each trial.
pub fn run_sweep_with_observer(
    intervals: u64,
    opts: &SweepOptions,
    observer: &dyn TrialObserver,
) -> Result<Vec<TrialOutcome>, PiError> {
    let sweep = Sweep::new(intervals, opts.clone())?;
    let mut outcomes = Vec::with_capacity(sweep.options().max_workers);

    for outcome in sweep {
        let outcome = outcome?;
        observer.on_trial(&outcome);
        outcomes.push(outcome);
    }

    info!(intervals, trials = outcomes.len(), "sweep complete");
    observer.on_sweep_complete(&outcomes);
    Ok(outcomes)
}
