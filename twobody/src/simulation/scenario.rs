//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing or a preset) and produces the
//! runtime bundle `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with both bodies at t = 0)
//! - the force law (`NewtonianGravity`)
//!
//! `Scenario::run` integrates to completion and hands back the `Trajectory`
//! consumed by the replay viewer.

use log::{debug, info};

use crate::configuration::config::{BodyConfig, Preset, ScenarioConfig};
use crate::configuration::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::trajectory::Trajectory;

/// Fully-initialized two-body run
///
/// Owns the only mutable copy of the bodies; `run` is the sole mutator.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub force: NewtonianGravity,
}

impl Scenario {
    /// Validate `cfg` and map it into runtime types
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let to_body = |bc: &BodyConfig, fallback: &str| {
            Body::new(
                bc.name.clone().unwrap_or_else(|| fallback.to_string()),
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
                bc.m,
            )
        };
        let system = System::new(
            to_body(&cfg.bodies[0], "primary"),
            to_body(&cfg.bodies[1], "secondary"),
        );

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            dt: p_cfg.dt,
            steps: p_cfg.steps,
        };

        let engine = Engine {
            integrator: cfg.engine.integrator,
        };

        let force = NewtonianGravity { g: parameters.g };

        debug!(
            "build_scenario: {} ({:.4e} kg) and {} ({:.4e} kg)",
            system.primary.name, system.primary.m, system.secondary.name, system.secondary.m
        );

        Ok(Self {
            engine,
            parameters,
            system,
            force,
        })
    }

    pub fn from_preset(preset: Preset) -> Result<Self, ConfigError> {
        Self::build_scenario(ScenarioConfig::preset(preset))
    }

    /// Integrate all steps in place and return the recorded trajectory.
    /// Calling it again continues from the current state.
    pub fn run(&mut self) -> Trajectory {
        let Scenario {
            engine,
            parameters,
            system,
            force,
        } = self;

        let momentum_start = system.momentum();
        let trajectory = integrate(system, &*force, parameters, engine.integrator);

        info!(
            "run: {} steps of {} s ({:.2} days), momentum drift = {:.4e} kg m/s",
            parameters.steps,
            parameters.dt,
            parameters.span() / 86_400.0,
            (system.momentum() - momentum_start).norm()
        );

        trajectory
    }
}
