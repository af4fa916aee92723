//! # pisweep-orchestration
//!
//! Fork-join trial execution, worker-count sweeps, and sweep analysis.

pub mod analysis;
pub mod interfaces;
pub mod observers;
pub mod sweep;
pub mod trial;

pub use analysis::{analyze_sweep, SweepSummary};
pub use interfaces::{CompositeObserver, ResultPresenter, TrialObserver, TrialOutcome};
pub use sweep::{run_sweep, run_sweep_with_observer, Sweep};
pub use trial::run_trial;
