//! Runs the default SIRGM scenario and writes the stacked-area chart next to
//! the working directory.

use std::path::Path;

use anyhow::Result;
use sir_models::{chart, solve_sirgm, SirgmScenario};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let scenario = SirgmScenario::default();
    let solution = solve_sirgm(&scenario)?;
    println!("{}", solution.report);

    let path = Path::new("sirgm.svg");
    chart::render_sirgm(&solution, path)?;
    println!("Chart written to {}", path.display());
    Ok(())
}
