//! Errors reported by the simulation drivers.

use ode_solvers::dop_shared::IntegrationError;
use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Enumeration of the errors that may arise during a simulation run.
#[derive(Debug, Error)]
pub enum Error {
    /// A scenario field was rejected before integration started.
    #[error("invalid {name}: {value} ({constraint})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
    /// The adaptive stepper gave up before reaching the horizon.
    #[error("integration aborted: {0}")]
    Integration(#[from] IntegrationError),
    /// The trajectory contains NaN or infinite values.
    #[error("numerical divergence: non-finite value at t = {t}")]
    Diverged { t: f64 },
    /// The chart backend failed while drawing.
    #[error("chart rendering failed: {0}")]
    Chart(String),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64, constraint: &'static str) -> Self {
        Error::InvalidParameter {
            name,
            value,
            constraint,
        }
    }
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for Error {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Chart(err.to_string())
    }
}
