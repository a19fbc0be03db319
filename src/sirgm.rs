//! The SIRGM model: SIR extended with severe (grave) and dead compartments.
//!
//! A fraction of the infected develop severe disease (I -> G at rate
//! `gamma * I`) and severe cases either recover (G -> R at rate `sigma * G`)
//! or die (G -> M at rate `theta * G`). The transmission denominator stays
//! `S + I + R`: severe cases are isolated and the dead do not transmit, so
//! neither compartment takes part in mixing.

use std::fmt;

use ode_solvers::dop_shared::Stats;
use ode_solvers::{Dopri5, System, Vector5};
use tracing::debug;

use crate::error::Error;
use crate::grid::TimeGrid;
use crate::solve::{SolveOptions, Trajectory};

/// State vector ordered (S, I, R, G, M).
pub type SirgmState = Vector5<f64>;

/// Rate constants of the SIRGM model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SirgmParams {
    /// Transmission rate, per day.
    pub beta: f64,
    /// Mean infectious period, in days.
    pub mu: f64,
    /// Rate at which infected cases turn severe, per day.
    pub gamma: f64,
    /// Recovery rate of severe cases, per day.
    pub sigma: f64,
    /// Death rate of severe cases, per day.
    pub theta: f64,
}

impl Default for SirgmParams {
    fn default() -> Self {
        SirgmParams {
            beta: 0.16,
            mu: 14.0,
            gamma: 0.01,
            sigma: 0.09,
            theta: 0.01,
        }
    }
}

impl SirgmParams {
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
        for (name, value) in [
            ("gamma", self.gamma),
            ("sigma", self.sigma),
            ("theta", self.theta),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid(
                    name,
                    value,
                    "must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

/// Initial compartment populations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SirgmInit {
    /// Initially susceptible people.
    pub s: f64,
    /// Initially infected people.
    pub i: f64,
    /// Initially recovered people.
    pub r: f64,
    /// Initially severe cases.
    pub g: f64,
    /// Initially dead.
    pub m: f64,
}

impl Default for SirgmInit {
    fn default() -> Self {
        SirgmInit {
            s: 210_000_000.0,
            i: 2_200.0,
            r: 100.0,
            g: 0.0,
            m: 0.0,
        }
    }
}

impl SirgmInit {
    /// Population taking part in transmission, `s + i + r`.
    pub fn mixing_population(&self) -> f64 {
        self.s + self.i + self.r
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("s", self.s),
            ("i", self.i),
            ("r", self.r),
            ("g", self.g),
            ("m", self.m),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid(
                    name,
                    value,
                    "must be finite and non-negative",
                ));
            }
        }
        let mixing = self.mixing_population();
        if !mixing.is_finite() || mixing <= 0.0 {
            return Err(Error::invalid(
                "s + i + r",
                mixing,
                "must be finite and positive",
            ));
        }
        Ok(())
    }
}

/// Full description of one SIRGM run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SirgmScenario {
    pub init: SirgmInit,
    pub params: SirgmParams,
    pub grid: TimeGrid,
}

impl Default for SirgmScenario {
    fn default() -> Self {
        SirgmScenario {
            init: SirgmInit::default(),
            params: SirgmParams::default(),
            grid: TimeGrid::new(365.0, 24),
        }
    }
}

impl SirgmScenario {
    pub fn validate(&self) -> Result<(), Error> {
        self.init.validate()?;
        self.params.validate()?;
        self.grid.validate()
    }
}

/// SIRGM vector field.
#[derive(Clone, Copy, Debug)]
pub struct SirgmModel {
    pub params: SirgmParams,
}

impl System<f64, SirgmState> for SirgmModel {
    fn system(&self, _t: f64, y: &SirgmState, dy: &mut SirgmState) {
        let SirgmParams {
            beta,
            mu,
            gamma,
            sigma,
            theta,
        } = self.params;
        let (s, i, r, g) = (y[0], y[1], y[2], y[3]);
        // G and M stay out of the denominator.
        let n = s + i + r;
        let infections = beta * i * s / n;
        let recoveries = i / mu;
        let aggravations = gamma * i;
        let severe_recoveries = sigma * g;
        let deaths = theta * g;
        dy[0] = -infections;
        dy[1] = infections - recoveries - aggravations;
        dy[2] = recoveries + severe_recoveries;
        dy[3] = aggravations - severe_recoveries - deaths;
        dy[4] = deaths;
    }
}

/// Summary statistics of one SIRGM run.
#[derive(Clone, Copy, Debug)]
pub struct SirgmReport {
    /// Basic reproduction number, `beta * mu`.
    pub r0: f64,
    /// People in the dead compartment at the end of the horizon.
    pub deaths: f64,
    /// Largest number of people simultaneously in the severe compartment.
    pub peak_severe: f64,
}

impl fmt::Display for SirgmReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Basic reproduction number R0: {:.3}", self.r0)?;
        writeln!(f, "Deaths: {}", group_thousands(self.deaths))?;
        write!(f, "Peak severe cases: {}", group_thousands(self.peak_severe))
    }
}

/// Formats a person count with `,` thousands separators, dropping the
/// fractional part.
fn group_thousands(value: f64) -> String {
    let digits = (value.max(0.0).floor() as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Trajectory, summary statistics and solver statistics of one SIRGM run.
#[derive(Clone, Debug)]
pub struct SirgmSolution {
    pub trajectory: Trajectory<SirgmState>,
    pub report: SirgmReport,
    pub stats: Stats,
}

/// Integrates the SIRGM equations over the scenario's grid with default
/// tolerances.
pub fn solve_sirgm(scenario: &SirgmScenario) -> Result<SirgmSolution, Error> {
    solve_sirgm_with(scenario, &SolveOptions::default())
}

/// Integrates the SIRGM equations with caller-supplied tolerances.
pub fn solve_sirgm_with(
    scenario: &SirgmScenario,
    options: &SolveOptions,
) -> Result<SirgmSolution, Error> {
    scenario.validate()?;
    options.validate()?;

    let model = SirgmModel {
        params: scenario.params,
    };
    let y0 = SirgmState::new(
        scenario.init.s,
        scenario.init.i,
        scenario.init.r,
        scenario.init.g,
        scenario.init.m,
    );
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
        "SIRGM run finished: {} function evaluations, {} accepted / {} rejected steps, {} output points",
        stats.num_eval,
        stats.accepted_steps,
        stats.rejected_steps,
        stepper.x_out().len()
    );

    let trajectory = Trajectory::new(stepper.x_out().clone(), stepper.y_out().clone());
    if let Some(t) = first_non_finite(&trajectory) {
        return Err(Error::Diverged { t });
    }

    let deaths = trajectory.final_state().map_or(0.0, |y| y[4]);
    let peak_severe = trajectory
        .states()
        .iter()
        .map(|y| y[3])
        .fold(0.0_f64, f64::max);
    let report = SirgmReport {
        r0: scenario.params.r0(),
        deaths,
        peak_severe,
    };
    Ok(SirgmSolution {
        trajectory,
        report,
        stats,
    })
}

fn first_non_finite(trajectory: &Trajectory<SirgmState>) -> Option<f64> {
    trajectory
        .iter()
        .find(|(_, y)| y.iter().any(|v| !v.is_finite()))
        .map(|(t, _)| t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn derivative_matches_hand_computed_rates() {
        let model = SirgmModel {
            params: SirgmParams {
                beta: 0.4,
                mu: 5.0,
                gamma: 0.1,
                sigma: 0.05,
                theta: 0.02,
            },
        };
        let y = SirgmState::new(600.0, 200.0, 200.0, 100.0, 50.0);
        let mut dy = SirgmState::zeros();
        model.system(0.0, &y, &mut dy);
        assert_relative_eq!(dy[0], -48.0);
        assert_relative_eq!(dy[1], -12.0);
        assert_relative_eq!(dy[2], 45.0);
        assert_relative_eq!(dy[3], 13.0);
        assert_relative_eq!(dy[4], 2.0);
        assert_relative_eq!(dy.sum(), 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn severe_and_dead_stay_out_of_the_denominator() {
        let params = SirgmParams::default();
        let model = SirgmModel { params };
        let without = SirgmState::new(600.0, 200.0, 200.0, 0.0, 0.0);
        let with = SirgmState::new(600.0, 200.0, 200.0, 1.0e6, 5.0e5);
        let mut dy_without = SirgmState::zeros();
        let mut dy_with = SirgmState::zeros();
        model.system(0.0, &without, &mut dy_without);
        model.system(0.0, &with, &mut dy_with);
        assert_eq!(dy_without[0], dy_with[0]);
    }

    #[test]
    fn group_thousands_matches_expected_groups() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1_000.0), "1,000");
        assert_eq!(group_thousands(1_234_567.89), "1,234,567");
        assert_eq!(group_thousands(210_000_000.0), "210,000,000");
        assert_eq!(group_thousands(-3.0), "0");
    }

    #[test]
    fn report_display_lists_all_three_statistics() {
        let report = SirgmReport {
            r0: 2.24,
            deaths: 1_264_368.9,
            peak_severe: 94_520.2,
        };
        let text = format!("{report}");
        assert!(text.contains("R0: 2.240"));
        assert!(text.contains("Deaths: 1,264,368"));
        assert!(text.contains("Peak severe cases: 94,520"));
    }

    #[test]
    fn validation_covers_the_severe_pathway() {
        assert!(SirgmScenario::default().validate().is_ok());

        let mut scenario = SirgmScenario::default();
        scenario.params.gamma = -0.01;
        assert!(scenario.validate().is_err());

        let mut scenario = SirgmScenario::default();
        scenario.params.sigma = f64::INFINITY;
        assert!(scenario.validate().is_err());

        let mut scenario = SirgmScenario::default();
        scenario.params.theta = -1.0;
        assert!(scenario.validate().is_err());

        let mut scenario = SirgmScenario::default();
        scenario.init.g = -5.0;
        assert!(scenario.validate().is_err());

        let mut scenario = SirgmScenario::default();
        scenario.init.m = f64::NAN;
        assert!(scenario.validate().is_err());

        // Components finite on their own, mixing population overflowing.
        let mut scenario = SirgmScenario::default();
        scenario.init.s = 1.0e308;
        scenario.init.i = 1.0e308;
        assert!(scenario.validate().is_err());
    }
}
