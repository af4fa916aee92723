//! Integration domain and step size.

use serde::{Deserialize, Serialize};

use crate::constants::{DOMAIN_LOWER, DOMAIN_UPPER, MAX_INTERVALS};
use crate::error::PiError;

/// Closed-open interval over which 4/(1+x²) is integrated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationDomain {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl IntegrationDomain {
    /// The unit interval [0, 1], whose integral of 4/(1+x²) is π.
    pub const UNIT: Self = Self {
        lower: DOMAIN_LOWER,
        upper: DOMAIN_UPPER,
    };

    /// Width of the domain.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl Default for IntegrationDomain {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Width of one elementary rectangle, fixed for a whole sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSize {
    intervals: u64,
    value: f64,
}

impl StepSize {
    /// Derive the step size for `intervals` rectangles across `domain`.
    ///
    /// ```
    /// use pisweep_core::domain::{IntegrationDomain, StepSize};
    ///
    /// let step = StepSize::from_intervals(IntegrationDomain::UNIT, 4).unwrap();
    /// assert_eq!(step.value(), 0.25);
    /// assert!(StepSize::from_intervals(IntegrationDomain::UNIT, 0).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn from_intervals(domain: IntegrationDomain, intervals: u64) -> Result<Self, PiError> {
        if intervals == 0 {
            return Err(PiError::InvalidIntervals(
                "interval count must be positive".into(),
            ));
        }
        if intervals > MAX_INTERVALS {
            return Err(PiError::InvalidIntervals(format!(
                "interval count must not exceed {MAX_INTERVALS}"
            )));
        }
        Ok(Self {
            intervals,
            value: domain.width() / intervals as f64,
        })
    }

    /// Step width.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Interval count the step was derived from.
    #[must_use]
    pub fn intervals(&self) -> u64 {
        self.intervals
    }
}
