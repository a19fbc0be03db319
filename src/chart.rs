//! SVG rendering of simulation results.
//!
//! Two chart shapes are produced: a multi-line plot of the SIR compartments
//! and a stacked-area plot of the SIRGM compartments. Both carry the basic
//! reproduction number in the title.

use std::path::Path;

use plotters::prelude::*;

use crate::error::Error;
use crate::sir::SirSolution;
use crate::sirgm::SirgmSolution;

const FIGURE_SIZE: (u32, u32) = (1024, 768);

const SUSCEPTIBLE: RGBColor = RGBColor(31, 119, 180);
const INFECTED: RGBColor = RGBColor(214, 39, 40);
const RECOVERED: RGBColor = RGBColor(44, 160, 44);
const SEVERE: RGBColor = RGBColor(255, 127, 14);
const DEAD: RGBColor = RGBColor(64, 64, 64);

/// Draws the three SIR compartments as lines over time.
pub fn render_sir(solution: &SirSolution, path: impl AsRef<Path>) -> Result<(), Error> {
    let trajectory = &solution.trajectory;
    let (t_end, total) = match (trajectory.times().last(), trajectory.states().first()) {
        (Some(&t), Some(y)) => (t, y.sum()),
        _ => return Err(Error::Chart(String::from("empty trajectory"))),
    };

    let root = SVGBackend::new(path.as_ref(), FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!("SIR model, R0 = {:.3}", solution.report.r0);
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..t_end, 0.0..total * 1.05)?;
    chart
        .configure_mesh()
        .x_desc("Days")
        .y_desc("People")
        .draw()?;

    let series: [(&str, usize, RGBColor); 3] = [
        ("Susceptible", 0, SUSCEPTIBLE),
        ("Infected", 1, INFECTED),
        ("Recovered", 2, RECOVERED),
    ];
    for (label, component, color) in series {
        chart
            .draw_series(LineSeries::new(
                trajectory.iter().map(|(t, y)| (t, y[component])),
                color.stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Draws the five SIRGM compartments as stacked areas over time.
///
/// Bands are stacked bottom to top in the order infectious, severe, dead,
/// susceptible, recovered; together they always fill the total population.
pub fn render_sirgm(solution: &SirgmSolution, path: impl AsRef<Path>) -> Result<(), Error> {
    let trajectory = &solution.trajectory;
    let (t_end, total) = match (trajectory.times().last(), trajectory.states().first()) {
        (Some(&t), Some(y)) => (t, y.sum()),
        _ => return Err(Error::Chart(String::from("empty trajectory"))),
    };

    let root = SVGBackend::new(path.as_ref(), FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!("SIRGM model, R0 = {:.3}", solution.report.r0);
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..t_end, 0.0..total * 1.02)?;
    chart
        .configure_mesh()
        .x_desc("Days")
        .y_desc("People")
        .draw()?;

    let times = trajectory.times();
    let bands: [(&str, usize, RGBColor); 5] = [
        ("Infectious", 1, INFECTED),
        ("Severe", 3, SEVERE),
        ("Dead", 4, DEAD),
        ("Susceptible", 0, SUSCEPTIBLE),
        ("Recovered", 2, RECOVERED),
    ];
    let mut lower = vec![0.0; trajectory.len()];
    for (label, component, color) in bands {
        let upper: Vec<f64> = trajectory
            .states()
            .iter()
            .zip(&lower)
            .map(|(y, base)| base + y[component])
            .collect();
        // Closed ring: along the lower edge, then back along the upper edge.
        let mut ring: Vec<(f64, f64)> = times.iter().copied().zip(lower.iter().copied()).collect();
        ring.extend(times.iter().copied().zip(upper.iter().copied()).rev());
        chart
            .draw_series(std::iter::once(Polygon::new(ring, color.mix(0.85))))?
            .label(label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.mix(0.85).filled())
            });
        lower = upper;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
