//! Trial orchestration: partition, fan out, join, reduce, and time.

use std::thread;
use std::time::Instant;

use tracing::debug;

use pisweep_core::domain::{IntegrationDomain, StepSize};
use pisweep_core::error::PiError;
use pisweep_core::integrator::integrate_partial;
use pisweep_core::options::{Dispatch, SweepOptions};
use pisweep_core::partial::PartialResults;
use pisweep_core::partition::{SubRange, WorkerAssignment};

use crate::interfaces::TrialOutcome;

/// Run one fork-join trial with `workers` concurrent partial integrations.
///
/// The timed span covers dispatch and the full join; the index-order
/// reduction of the partial results follows it.
pub fn run_trial(
    domain: IntegrationDomain,
    step: &StepSize,
    workers: usize,
    opts: &SweepOptions,
) -> Result<TrialOutcome, PiError> {
    let assignment = WorkerAssignment::new(domain, workers, opts.clamp_last_range)?;
    let mut partials = PartialResults::new(workers);
    let step = step.value();
    let work = |range: &SubRange| integrate_partial(range.start, range.end, step);

    let start = Instant::now();
    match opts.dispatch {
        Dispatch::Threads => fan_out_threads(&assignment, &mut partials, &work)?,
        Dispatch::Pool => fan_out_pool(&assignment, &mut partials, &work),
    }
    let elapsed = start.elapsed();

    let estimate = partials.sum();
    debug!(workers, estimate, ?elapsed, dispatch = %opts.dispatch, "trial complete");

    Ok(TrialOutcome {
        workers,
        estimate,
        elapsed,
    })
}

/// Spawn one scoped OS thread per sub-range and join them all.
///
/// Every spawned thread is joined before returning, even after a failure;
/// the first spawn error or worker panic is reported.
pub(crate) fn fan_out_threads<F>(
    assignment: &WorkerAssignment,
    partials: &mut PartialResults,
    work: &F,
) -> Result<(), PiError>
where
    F: Fn(&SubRange) -> f64 + Sync,
{
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(assignment.workers());
        let mut result = Ok(());

        for (index, (slot, range)) in partials
            .slots_mut()
            .iter_mut()
            .zip(assignment.iter())
            .enumerate()
        {
            let spawned = thread::Builder::new()
                .name(format!("pisweep-worker-{index}"))
                .spawn_scoped(scope, move || *slot = work(range));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    result = Err(PiError::WorkerSpawn(e.to_string()));
                    break;
                }
            }
        }

        for (index, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && result.is_ok() {
                result = Err(PiError::WorkerPanicked(index));
            }
        }
        result
    })
}

/// Run the sub-ranges on the rayon pool. A worker panic resumes on the caller.
pub(crate) fn fan_out_pool<F>(
    assignment: &WorkerAssignment,
    partials: &mut PartialResults,
    work: &F,
) where
    F: Fn(&SubRange) -> f64 + Sync,
{
    use rayon::iter::{
        IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator,
        ParallelIterator,
    };

    partials
        .slots_mut()
        .par_iter_mut()
        .zip(assignment.ranges().par_iter())
        .for_each(|(slot, range)| *slot = work(range));
}
