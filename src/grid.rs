//! Evaluation grid of a simulation run.

use crate::error::Error;

/// Evenly spaced evaluation points covering `[0, horizon]`.
///
/// The stepper picks its own internal steps; the grid only fixes where the
/// dense output is sampled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeGrid {
    /// Total simulated time span, in days.
    pub horizon: f64,
    /// Number of evaluation points per day.
    pub samples_per_day: u32,
}

impl TimeGrid {
    pub fn new(horizon: f64, samples_per_day: u32) -> Self {
        TimeGrid {
            horizon,
            samples_per_day,
        }
    }

    /// Spacing between two consecutive evaluation points, in days.
    pub fn dx(&self) -> f64 {
        1.0 / f64::from(self.samples_per_day)
    }

    /// Number of evaluation points, both endpoints included. Saturates at
    /// `usize::MAX` for horizons too long to enumerate.
    pub fn sample_count(&self) -> usize {
        ((self.horizon * f64::from(self.samples_per_day)).floor() + 1.0) as usize
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return Err(Error::invalid(
                "horizon",
                self.horizon,
                "must be finite and positive",
            ));
        }
        if self.samples_per_day == 0 {
            return Err(Error::invalid("samples_per_day", 0.0, "must be at least 1"));
        }
        Ok(())
    }
}
