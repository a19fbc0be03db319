//! Runs the default SIR scenario and writes the line chart next to the
//! working directory.

use std::path::Path;

use anyhow::Result;
use sir_models::{chart, solve_sir, SirScenario};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let scenario = SirScenario::default();
    let solution = solve_sir(&scenario)?;
    println!("{}", solution.report);

    let path = Path::new("sir.svg");
    chart::render_sir(&solution, path)?;
    println!("Chart written to {}", path.display());
    Ok(())
}
