//! Concrete observer implementations.

use crossbeam_channel::Sender;
use tracing::info;

use crate::interfaces::{TrialObserver, TrialOutcome};

/// Observer that forwards outcomes through a channel (non-blocking).
///
/// Lets a single consumer own all reporting while the sweep runs on
/// another thread.
pub struct ChannelObserver {
    sender: Sender<TrialOutcome>,
}

impl ChannelObserver {
    #[must_use]
    pub fn new(sender: Sender<TrialOutcome>) -> Self {
        Self { sender }
    }
}

impl TrialObserver for ChannelObserver {
    fn on_trial(&self, outcome: &TrialOutcome) {
        // A disconnected or full receiver only loses reports, never trials.
        let _ = self.sender.try_send(outcome.clone());
    }
}

/// Observer that logs each trial through `tracing`.
pub struct LoggingObserver;

impl TrialObserver for LoggingObserver {
    fn on_trial(&self, outcome: &TrialOutcome) {
        info!(
            workers = outcome.workers,
            estimate = outcome.estimate,
            elapsed_secs = outcome.elapsed.as_secs_f64(),
            "trial finished"
        );
    }

    fn on_sweep_complete(&self, outcomes: &[TrialOutcome]) {
        info!(trials = outcomes.len(), "all trials finished");
    }
}
