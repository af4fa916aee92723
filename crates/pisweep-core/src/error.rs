//! Error type shared by the integration, orchestration, and CLI crates.

/// Error type for π integration sweeps.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PiError {
    /// The interval count is zero or could not be parsed.
    #[error("invalid interval count: {0}")]
    InvalidIntervals(String),

    /// A trial was requested with zero workers.
    #[error("invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(usize),

    /// The operating system refused to create a worker thread.
    #[error("failed to spawn worker: {0}")]
    WorkerSpawn(String),

    /// A worker panicked before writing its partial sum.
    #[error("worker {0} panicked before completing its sub-range")]
    WorkerPanicked(usize),

    /// Reading the interval count from the user failed.
    #[error("input error: {0}")]
    Input(String),

    /// Analysis was requested on a sweep with no trials.
    #[error("sweep produced no trials")]
    EmptySweep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_error_display() {
        let err = PiError::InvalidIntervals("abc".into());
        assert_eq!(err.to_string(), "invalid interval count: abc");

        let err = PiError::InvalidWorkerCount(0);
        assert_eq!(err.to_string(), "invalid worker count: 0 (must be at least 1)");

        let err = PiError::WorkerPanicked(3);
        assert_eq!(
            err.to_string(),
            "worker 3 panicked before completing its sub-range"
        );

        assert_eq!(PiError::EmptySweep.to_string(), "sweep produced no trials");
    }
}
