use sir_models::{
    chart, solve_sir, solve_sirgm, Error, SirInit, SirParams, SirScenario, SirgmInit, SirgmParams,
    SirgmScenario, TimeGrid,
};
use tempfile::tempdir;

fn sir_scenario() -> SirScenario {
    SirScenario {
        init: SirInit {
            s: 1_000.0,
            i: 1.0,
            r: 0.0,
        },
        params: SirParams {
            beta: 0.3,
            mu: 10.0,
        },
        grid: TimeGrid::new(100.0, 4),
    }
}

fn sirgm_scenario() -> SirgmScenario {
    SirgmScenario {
        init: SirgmInit {
            s: 1_000.0,
            i: 1.0,
            r: 0.0,
            g: 0.0,
            m: 0.0,
        },
        params: SirgmParams {
            beta: 0.2,
            mu: 14.0,
            gamma: 0.02,
            sigma: 0.08,
            theta: 0.01,
        },
        grid: TimeGrid::new(100.0, 4),
    }
}

#[test]
fn sir_chart_carries_caption_axes_and_legend() {
    let solution = solve_sir(&sir_scenario()).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("sir.svg");
    chart::render_sir(&solution, &path).unwrap();

    let rendered = std::fs::read_to_string(&path).unwrap();
    assert!(rendered.contains("<svg"));
    assert!(rendered.contains("SIR model, R0 = 3.000"));
    assert!(rendered.contains("Days"));
    assert!(rendered.contains("People"));
    assert!(rendered.contains("Susceptible"));
    assert!(rendered.contains("Infected"));
    assert!(rendered.contains("Recovered"));
}

#[test]
fn sirgm_chart_carries_caption_and_all_five_bands() {
    let solution = solve_sirgm(&sirgm_scenario()).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("sirgm.svg");
    chart::render_sirgm(&solution, &path).unwrap();

    let rendered = std::fs::read_to_string(&path).unwrap();
    assert!(rendered.contains("<svg"));
    assert!(rendered.contains("SIRGM model, R0 = 2.800"));
    assert!(rendered.contains("Infectious"));
    assert!(rendered.contains("Severe"));
    assert!(rendered.contains("Dead"));
    assert!(rendered.contains("Susceptible"));
    assert!(rendered.contains("Recovered"));
}

#[test]
fn rendering_into_a_missing_directory_reports_a_chart_error() {
    let solution = solve_sir(&sir_scenario()).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("sir.svg");
    assert!(matches!(
        chart::render_sir(&solution, &path),
        Err(Error::Chart(_))
    ));
}
