//! Pieces shared by the two integration drivers.

use crate::error::Error;

/// Tolerances handed to the adaptive step size controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveOptions {
    /// Relative tolerance of the embedded error estimate.
    pub rtol: f64,
    /// Absolute tolerance of the embedded error estimate.
    pub atol: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            rtol: 1.0e-6,
            atol: 1.0e-6,
        }
    }
}

impl SolveOptions {
    pub fn validate(&self) -> Result<(), Error> {
        if !self.rtol.is_finite() || self.rtol <= 0.0 {
            return Err(Error::invalid(
                "rtol",
                self.rtol,
                "must be finite and positive",
            ));
        }
        if !self.atol.is_finite() || self.atol <= 0.0 {
            return Err(Error::invalid(
                "atol",
                self.atol,
                "must be finite and positive",
            ));
        }
        Ok(())
    }
}

/// Evaluation times and matching states produced by one integration run.
///
/// Both vectors always have the same length and the times are strictly
/// increasing, starting at zero.
#[derive(Clone, Debug)]
pub struct Trajectory<V> {
    t: Vec<f64>,
    y: Vec<V>,
}

impl<V> Trajectory<V> {
    pub(crate) fn new(t: Vec<f64>, y: Vec<V>) -> Self {
        debug_assert_eq!(t.len(), y.len());
        Trajectory { t, y }
    }

    /// Evaluation times, in days.
    pub fn times(&self) -> &[f64] {
        &self.t
    }

    /// State vector at each evaluation time.
    pub fn states(&self) -> &[V] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Iterates over `(time, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &V)> + '_ {
        self.t.iter().copied().zip(self.y.iter())
    }

    /// State at the end of the horizon.
    pub fn final_state(&self) -> Option<&V> {
        self.y.last()
    }
}
