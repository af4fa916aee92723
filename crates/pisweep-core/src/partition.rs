//! Worker assignment: contiguous sub-ranges of the integration domain.

use crate::domain::IntegrationDomain;
use crate::error::PiError;

/// Half-open sub-range `[start, end)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubRange {
    pub start: f64,
    pub end: f64,
}

impl SubRange {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Ordered partition of a domain into one sub-range per worker.
///
/// Sub-range `i` is `[lower + i·w, lower + (i+1)·w)` with `w = width / W`.
/// The end of sub-range `i` and the start of sub-range `i + 1` are computed
/// by the same expression, so neighbours share a bit-identical boundary.
/// The final end is `lower + W·w`, which can miss `upper` by rounding unless
/// `clamp_last` is set.
#[derive(Debug, Clone)]
pub struct WorkerAssignment {
    ranges: Vec<SubRange>,
}

impl WorkerAssignment {
    /// Partition `domain` among `workers` workers.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(
        domain: IntegrationDomain,
        workers: usize,
        clamp_last: bool,
    ) -> Result<Self, PiError> {
        if workers == 0 {
            return Err(PiError::InvalidWorkerCount(workers));
        }

        let range_per_worker = domain.width() / workers as f64;
        let mut ranges: Vec<SubRange> = (0..workers)
            .map(|i| SubRange {
                start: domain.lower + i as f64 * range_per_worker,
                end: domain.lower + (i + 1) as f64 * range_per_worker,
            })
            .collect();

        if clamp_last {
            if let Some(last) = ranges.last_mut() {
                last.end = domain.upper;
            }
        }

        Ok(Self { ranges })
    }

    /// Number of workers.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub fn ranges(&self) -> &[SubRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubRange> {
        self.ranges.iter()
    }
}

impl<'a> IntoIterator for &'a WorkerAssignment {
    type Item = &'a SubRange;
    type IntoIter = std::slice::Iter<'a, SubRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
