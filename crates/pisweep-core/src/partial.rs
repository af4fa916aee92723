//! Partial result vector: one output slot per worker.

/// Arena of per-worker partial sums, addressed by worker index.
///
/// Workers receive disjoint `&mut f64` slots through [`slots_mut`], so the
/// borrow checker guarantees no two workers touch the same slot. The
/// reduction reads the slots only after every borrow has ended.
///
/// [`slots_mut`]: PartialResults::slots_mut
#[derive(Debug, Clone)]
pub struct PartialResults {
    slots: Vec<f64>,
}

impl PartialResults {
    /// Allocate `workers` zeroed slots.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self {
            slots: vec![0.0; workers],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Mutable view of the slots for fan-out.
    pub fn slots_mut(&mut self) -> &mut [f64] {
        &mut self.slots
    }

    #[must_use]
    pub fn slots(&self) -> &[f64] {
        &self.slots
    }

    /// Sum the slots in index order.
    #[must_use]
    pub fn sum(&self) -> f64 {
        let mut total = 0.0_f64;
        for &value in &self.slots {
            total += value;
        }
        total
    }
}
