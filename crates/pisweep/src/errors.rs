//! Error handling and exit codes.

use pisweep_core::constants::exit_codes;
use pisweep_core::error::PiError;

/// Map a sweep error to the process exit code.
pub fn handle_error(err: &PiError) -> i32 {
    match err {
        PiError::InvalidIntervals(_) | PiError::InvalidWorkerCount(_) | PiError::Input(_) => {
            exit_codes::ERROR_CONFIG
        }
        PiError::WorkerSpawn(_) | PiError::WorkerPanicked(_) => exit_codes::ERROR_WORKER,
        PiError::EmptySweep => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<PiError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
