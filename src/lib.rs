//! # SIR models
//! `sir_models` numerically integrates compartmental epidemic models, the
//! classic SIR system and the SIRGM variant with severe and dead
//! compartments, and renders the trajectories as SVG charts. Integration is
//! delegated to the Dormand-Prince 5(4) stepper of the `ode_solvers` crate;
//! charts are drawn with `plotters`.

pub mod chart;
pub mod error;
pub mod grid;
pub mod sir;
pub mod sirgm;
pub mod solve;

pub use error::Error;
pub use grid::TimeGrid;
pub use sir::{
    solve_sir, solve_sir_with, SirInit, SirModel, SirParams, SirReport, SirScenario, SirSolution,
    SirState,
};
pub use sirgm::{
    solve_sirgm, solve_sirgm_with, SirgmInit, SirgmModel, SirgmParams, SirgmReport, SirgmScenario,
    SirgmSolution, SirgmState,
};
pub use solve::{SolveOptions, Trajectory};

// Re-export from external crate
pub use ode_solvers::dop_shared::Stats;
