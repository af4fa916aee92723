//! # pisweep-core
//!
//! Building blocks for approximating π by integrating 4/(1+x²) over [0, 1]:
//! the integration domain, step size, per-worker partitioning, the partial
//! result arena, and the rectangle-rule partial integrator.

pub mod constants;
pub mod domain;
pub mod error;
pub mod integrator;
pub mod options;
pub mod partial;
pub mod partition;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_MAX_WORKERS, DOMAIN_LOWER, DOMAIN_UPPER, MAX_INTERVALS,
};
pub use domain::{IntegrationDomain, StepSize};
pub use error::PiError;
pub use integrator::{integrate_partial, integrate_partial_into};
pub use options::{Dispatch, SweepOptions};
pub use partial::PartialResults;
pub use partition::{SubRange, WorkerAssignment};

/// Approximate π on the calling thread with `intervals` rectangles.
///
/// For worker fan-out and timing use `pisweep-orchestration`.
///
/// # Example
/// ```
/// let pi = pisweep_core::approximate_pi(1).unwrap();
/// assert_eq!(pi, 4.0);
///
/// let pi = pisweep_core::approximate_pi(100_000).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 1e-3);
/// ```
pub fn approximate_pi(intervals: u64) -> Result<f64, PiError> {
    let domain = IntegrationDomain::UNIT;
    let step = StepSize::from_intervals(domain, intervals)?;
    Ok(integrate_partial(domain.lower, domain.upper, step.value()))
}
