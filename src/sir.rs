//! The classic Susceptible-Infected-Recovered model.
//!
//! People move one way through the chain S -> I -> R. New infections occur
//! at rate `beta * I * S / N` and infected people recover after a mean
//! infectious period of `mu` days. The total population is conserved.

use std::fmt;

use ode_solvers::dop_shared::Stats;
use ode_solvers::{Dopri5, System, Vector3};
use tracing::debug;

use crate::error::Error;
use crate::grid::TimeGrid;
use crate::solve::{SolveOptions, Trajectory};

/// State vector ordered (S, I, R).
pub type SirState = Vector3<f64>;

/// Rate constants of the SIR model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SirParams {
    /// Transmission rate, per day.
    pub beta: f64,
    /// Mean infectious period, in days.
    pub mu: f64,
}

impl Default for SirParams {
    fn default() -> Self {
        SirParams {
            beta: 0.15,
            mu: 14.0,
        }
    }
}

impl SirParams {
    /// Basic reproduction number, `beta * mu`.
    pub fn r0(&self) -> f64 {
        self.beta * self.mu
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(Error::invalid(
                "beta",
                self.beta,
                "must be finite and non-negative",
            ));
        }
        if !self.mu.is_finite() || self.mu <= 0.0 {
            return Err(Error::invalid("mu", self.mu, "must be finite and positive"));
        }
        Ok(())
    }
}

/// Initial compartment populations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SirInit {
    /// Initially susceptible people.
    pub s: f64,
    /// Initially infected people.
    pub i: f64,
    /// Initially recovered people.
    pub r: f64,
}

impl Default for SirInit {
    fn default() -> Self {
        SirInit {
            s: 210_000_000.0,
            i: 2_200.0,
            r: 100.0,
        }
    }
}

impl SirInit {
    /// Total population, also the transmission denominator.
    pub fn population(&self) -> f64 {
        self.s + self.i + self.r
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [("s", self.s), ("i", self.i), ("r", self.r)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid(
                    name,
                    value,
                    "must be finite and non-negative",
                ));
            }
        }
        let population = self.population();
        if !population.is_finite() || population <= 0.0 {
            return Err(Error::invalid(
                "population",
                population,
                "must be finite and positive",
            ));
        }
        Ok(())
    }
}

/// Full description of one SIR run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SirScenario {
    pub init: SirInit,
    pub params: SirParams,
    pub grid: TimeGrid,
}

impl Default for SirScenario {
    fn default() -> Self {
        SirScenario {
            init: SirInit::default(),
            params: SirParams::default(),
            grid: TimeGrid::new(100.0, 24),
        }
    }
}

impl SirScenario {
    pub fn validate(&self) -> Result<(), Error> {
        self.init.validate()?;
        self.params.validate()?;
        self.grid.validate()
    }
}

/// SIR vector field.
#[derive(Clone, Copy, Debug)]
pub struct SirModel {
    pub params: SirParams,
}

impl System<f64, SirState> for SirModel {
    fn system(&self, _t: f64, y: &SirState, dy: &mut SirState) {
        let SirParams { beta, mu } = self.params;
        let (s, i, r) = (y[0], y[1], y[2]);
        let n = s + i + r;
        let infections = beta * i * s / n;
        let recoveries = i / mu;
        dy[0] = -infections;
        dy[1] = infections - recoveries;
        dy[2] = recoveries;
    }
}

/// Summary statistics of one SIR run.
#[derive(Clone, Copy, Debug)]
pub struct SirReport {
    /// Basic reproduction number, `beta * mu`.
    pub r0: f64,
}

impl fmt::Display for SirReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Basic reproduction number R0: {:.3}", self.r0)
    }
}

/// Trajectory, summary statistics and solver statistics of one SIR run.
#[derive(Clone, Debug)]
pub struct SirSolution {
    pub trajectory: Trajectory<SirState>,
    pub report: SirReport,
    pub stats: Stats,
}

/// Integrates the SIR equations over the scenario's grid with default
/// tolerances.
///
/// # Example
///
/// ```
/// use sir_models::{solve_sir, SirScenario};
///
/// let solution = solve_sir(&SirScenario::default()).unwrap();
/// assert!(solution.report.r0 > 1.0);
/// ```
pub fn solve_sir(scenario: &SirScenario) -> Result<SirSolution, Error> {
    solve_sir_with(scenario, &SolveOptions::default())
}

/// Integrates the SIR equations with caller-supplied tolerances.
pub fn solve_sir_with(
    scenario: &SirScenario,
    options: &SolveOptions,
) -> Result<SirSolution, Error> {
    scenario.validate()?;
    options.validate()?;

    let model = SirModel {
        params: scenario.params,
    };
    let y0 = SirState::new(scenario.init.s, scenario.init.i, scenario.init.r);
    let mut stepper = Dopri5::new(
        model,
        0.0,
        scenario.grid.horizon,
        scenario.grid.dx(),
        y0,
        options.rtol,
        options.atol,
    );
    let stats = stepper.integrate()?;
    debug!(
        "SIR run finished: {} function evaluations, {} accepted / {} rejected steps, {} output points",
        stats.num_eval,
        stats.accepted_steps,
        stats.rejected_steps,
        stepper.x_out().len()
    );

    let trajectory = Trajectory::new(stepper.x_out().clone(), stepper.y_out().clone());
    if let Some(t) = first_non_finite(&trajectory) {
        return Err(Error::Diverged { t });
    }

    let report = SirReport {
        r0: scenario.params.r0(),
    };
    Ok(SirSolution {
        trajectory,
        report,
        stats,
    })
}

fn first_non_finite(trajectory: &Trajectory<SirState>) -> Option<f64> {
    trajectory
        .iter()
        .find(|(_, y)| y.iter().any(|v| !v.is_finite()))
        .map(|(t, _)| t)
}
