use std::time::Instant;

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::configuration::error::ConfigError;
use crate::simulation::integrator::integrate;
use crate::simulation::scenario::Scenario;

/// One row of a convergence study
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceRow {
    pub dt: f64,
    pub steps: usize,
    pub error: f64,         // final-position error against the reference run (m)
    pub ratio: Option<f64>, // error of the previous row / error of this row
}

/// Integrate `cfg` over `span` seconds with step `dt`, return the final system
fn run_span(cfg: &ScenarioConfig, span: f64, dt: f64, integrator: IntegratorConfig) -> Result<Scenario, ConfigError> {
    let mut cfg = cfg.clone();
    cfg.parameters.dt = dt;
    cfg.parameters.steps = (span / dt).round() as usize;
    cfg.engine.integrator = integrator;

    let mut scenario = Scenario::build_scenario(cfg)?;
    // positions are read from the final state, the trajectory itself is not needed
    let _ = scenario.run();
    Ok(scenario)
}

/// Run `cfg` over a fixed `span` once per entry of `dts` and compare the
/// final positions against a run with `reference_dt`.
/// Halving `dt` should roughly halve the error for a first-order scheme.
pub fn convergence_study(cfg: &ScenarioConfig, span: f64, dts: &[f64], reference_dt: f64) -> Result<Vec<ConvergenceRow>, ConfigError> {
    let integrator = cfg.engine.integrator;
    let reference = run_span(cfg, span, reference_dt, integrator)?.system;

    let mut rows: Vec<ConvergenceRow> = Vec::with_capacity(dts.len());
    for &dt in dts {
        let scenario = run_span(cfg, span, dt, integrator)?;
        let sys = &scenario.system;

        let error = (sys.primary.x - reference.primary.x)
            .norm()
            .max((sys.secondary.x - reference.secondary.x).norm());
        let ratio = rows.last().map(|prev| prev.error / error);

        rows.push(ConvergenceRow {
            dt,
            steps: scenario.parameters.steps,
            error,
            ratio,
        });
    }

    Ok(rows)
}

/// Time the Earth–Moon run for increasing step counts
pub fn bench_euler() -> Result<(), ConfigError> {
    let steps_list = [1_000, 10_000, 100_000, 1_000_000];

    for steps in steps_list {
        let mut cfg = ScenarioConfig::earth_moon();
        cfg.parameters.steps = steps;

        for integrator in [IntegratorConfig::SemiImplicitEuler, IntegratorConfig::ExplicitEuler] {
            let scenario = Scenario::build_scenario(cfg.clone())?;
            let mut sys = scenario.system.clone();

            let t0 = Instant::now();
            let trajectory = integrate(&mut sys, &scenario.force, &scenario.parameters, integrator);
            let elapsed = t0.elapsed().as_secs_f64();

            println!(
                "N = {:8}, {:?}: total = {:8.6} s, per step = {:8.3} ns, frames = {}",
                steps,
                integrator,
                elapsed,
                elapsed * 1.0e9 / steps as f64,
                trajectory.len()
            );
        }
    }

    Ok(())
}

/// Print a convergence table for 10 days of the Earth–Moon system
/// Paste output directly into a spreadsheet to graph
pub fn bench_convergence() -> Result<(), ConfigError> {
    let span = 10.0 * 86_400.0;
    let dts = [3_600.0, 1_800.0, 900.0, 450.0];
    let rows = convergence_study(&ScenarioConfig::earth_moon(), span, &dts, 450.0 / 64.0)?;

    println!("dt_s,steps,error_m,ratio");
    for row in rows {
        match row.ratio {
            Some(ratio) => println!("{},{},{:.6e},{:.4}", row.dt, row.steps, row.error, ratio),
            None => println!("{},{},{:.6e},", row.dt, row.steps, row.error),
        }
    }

    Ok(())
}
