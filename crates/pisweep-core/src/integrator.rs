//! Partial integrator: a rectangle-rule sum of 4/(1+x²) over one sub-range.
//!
//! The sample point of each rectangle is its left edge. `x` is advanced by
//! repeated addition of the step, so a sub-range can gain or lose one
//! rectangle near its end to accumulated rounding. Plain `f64` addition is
//! used throughout; the result is reproducible for a given operation order.

/// Integrand whose integral over [0, 1] equals π.
#[inline]
#[must_use]
pub fn integrand(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}

/// Sum the rectangles of width `step` starting at `range_start` while the
/// sample point stays below `range_end`.
///
/// `step` must be positive; `range_start <= range_end`.
#[must_use]
pub fn integrate_partial(range_start: f64, range_end: f64, step: f64) -> f64 {
    debug_assert!(step > 0.0, "step must be positive");
    debug_assert!(range_start <= range_end, "inverted sub-range");

    let mut sum = 0.0;
    let mut x = range_start;
    while x < range_end {
        sum += integrand(x) * step;
        x += step;
    }
    sum
}

/// Slot form of [`integrate_partial`]: writes the partial sum into a
/// caller-owned output slot.
#[inline]
pub fn integrate_partial_into(slot: &mut f64, range_start: f64, range_end: f64, step: f64) {
    *slot = integrate_partial(range_start, range_end, step);
}
