//! Constants for the integration domain, sweep bounds, and exit codes.

/// Lower bound of the integration domain.
pub const DOMAIN_LOWER: f64 = 0.0;

/// Upper bound of the integration domain.
pub const DOMAIN_UPPER: f64 = 1.0;

/// Largest accepted interval count. Beyond 2^53 the step drops below half
/// an ulp of x near 1.0 and `x += step` no longer advances.
pub const MAX_INTERVALS: u64 = 1 << 53;

/// Highest worker count reached by a default sweep.
pub const DEFAULT_MAX_WORKERS: usize = 50;

/// Exit codes returned by the `pisweep` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or interval count.
    pub const ERROR_CONFIG: i32 = 4;
    /// A worker could not be created or did not finish.
    pub const ERROR_WORKER: i32 = 5;
}
