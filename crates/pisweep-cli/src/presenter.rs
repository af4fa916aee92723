//! CLI result presenter.

use std::io::{self, Write};

use parking_lot::Mutex;
use tracing::warn;

use pisweep_orchestration::analysis::SweepSummary;
use pisweep_orchestration::interfaces::{ResultPresenter, TrialObserver, TrialOutcome};

use crate::output::{format_estimate, format_general, format_seconds, REPORT_PRECISION};

/// Separator printed after every trial block.
pub const SEPARATOR: &str = "-----------------------------";

/// Render the report block for one trial, separator line included.
#[must_use]
pub fn render_outcome(outcome: &TrialOutcome) -> String {
    format!(
        "Liczba wątków: {}\nPrzybliżona wartość liczby PI: {}\nCzas obliczeń: {} sekund\n{SEPARATOR}\n",
        outcome.workers,
        format_estimate(outcome.estimate),
        format_seconds(outcome.elapsed),
    )
}

/// Render the sweep summary.
#[must_use]
pub fn render_summary(summary: &SweepSummary) -> String {
    format!(
        "Podsumowanie ({} prób):\n  Najszybciej: {} wątków, {} sekund\n  Najwolniej: {} wątków, {} sekund\n  Przyspieszenie względem {} wątków: {}\n  Rozrzut przybliżeń: {}\n",
        summary.trials,
        summary.fastest_workers,
        format_seconds(summary.fastest_elapsed),
        summary.slowest_workers,
        format_seconds(summary.slowest_elapsed),
        summary.baseline_workers,
        format_general(summary.speedup, REPORT_PRECISION),
        format_general(summary.estimate_spread, REPORT_PRECISION),
    )
}

/// Render an error line for the error stream.
#[must_use]
pub fn render_error(error: &str) -> String {
    format!("Błąd: {error}")
}

/// CLI result presenter.
///
/// Every report goes through one locked sink so blocks never interleave,
/// even if outcomes arrive from more than one thread.
pub struct CLIResultPresenter<W: Write + Send> {
    out: Mutex<W>,
}

impl CLIResultPresenter<io::Stdout> {
    /// Presenter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> CLIResultPresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.lock();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            warn!(%e, "failed to write report");
        }
    }
}

impl<W: Write + Send> ResultPresenter for CLIResultPresenter<W> {
    fn present_outcome(&self, outcome: &TrialOutcome) {
        self.emit(&render_outcome(outcome));
    }

    fn present_summary(&self, summary: &SweepSummary) {
        self.emit(&render_summary(summary));
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", render_error(error));
    }
}

impl<W: Write + Send> TrialObserver for CLIResultPresenter<W> {
    fn on_trial(&self, outcome: &TrialOutcome) {
        self.present_outcome(outcome);
    }
}
