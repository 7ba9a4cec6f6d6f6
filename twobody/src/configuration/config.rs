//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! two-body scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which Euler ordering to integrate with
//! - [`ParametersConfig`] – gravitational constant, step size, step count
//! - [`BodyConfig`]       – initial state of each body (exactly two)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The Earth–Moon scenario written out in full:
//!
//! ```yaml
//! engine:
//!   integrator: "semi_implicit_euler"   # or "explicit_euler"
//!
//! parameters:
//!   G: 6.67408e-11          # gravitational constant
//!   dt: 300000.0            # fixed step size in seconds
//!   steps: 10000            # number of steps
//!
//! bodies:
//!   - name: Earth
//!     x: [0.0, 0.0]
//!     v: [0.0, -12.42]
//!     m: 5.972e24
//!   - name: Moon
//!     x: [384.4e6, 0.0]
//!     v: [0.0, 1022.0]
//!     m: 7.348e22
//! ```
//!
//! The first body is the primary, the second the secondary. `engine` may be
//! left out and defaults to semi-implicit Euler.
//!
//! Trade-offs worth knowing when editing a scenario:
//! - a larger `dt` runs faster but adds discretisation error and can throw
//!   eccentric orbits apart,
//! - the secondary's mass relative to the primary sets how far the
//!   barycenter sits from the primary,
//! - `m_A v_A + m_B v_B = 0` keeps the barycenter at rest; breaking it makes
//!   the whole pair drift.

use serde::Deserialize;

use crate::configuration::error::ConfigError;

/// Which Euler ordering the engine uses
/// `integrator: "semi_implicit_euler"` or `integrator: "explicit_euler"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "semi_implicit_euler")] // kick with current force, then drift with the new velocity
    SemiImplicitEuler,

    #[serde(rename = "explicit_euler")] // drift with the old velocity, kick with the old force
    ExplicitEuler,
}

/// Engine configuration
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig,
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,       // gravitational constant
    pub dt: f64,      // time step size, strictly positive
    pub steps: usize, // step count, strictly positive
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub x: [f64; 2], // initial position (m)
    pub v: [f64; 2], // initial velocity (m/s)
    pub m: f64,      // mass (kg)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

/// Built-in scenarios
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Earth at the origin, Moon at lunar distance
    #[default]
    EarthMoon,
    /// Two Earth masses in their zero-momentum frame
    EqualMass,
}

pub const G_DEFAULT: f64 = 6.67408e-11;
pub const EARTH_MASS: f64 = 5.972e24;
pub const MOON_MASS: f64 = 7.348e22;

impl ScenarioConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::EarthMoon => Self::earth_moon(),
            Preset::EqualMass => Self::equal_mass(),
        }
    }

    /// Earth at the origin, Moon at lunar distance on +x
    pub fn earth_moon() -> Self {
        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig {
                g: G_DEFAULT,
                dt: 300_000.0,
                steps: 10_000,
            },
            bodies: vec![
                BodyConfig {
                    name: Some("Earth".to_string()),
                    x: [0.0, 0.0],
                    v: [0.0, -12.42],
                    m: EARTH_MASS,
                },
                BodyConfig {
                    name: Some("Moon".to_string()),
                    x: [384.4e6, 0.0],
                    v: [0.0, 1022.0],
                    m: MOON_MASS,
                },
            ],
        }
    }

    /// Equal masses with opposite velocities, barycenter at rest
    pub fn equal_mass() -> Self {
        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig {
                g: G_DEFAULT,
                dt: 10_000.0,
                steps: 10_000,
            },
            bodies: vec![
                BodyConfig {
                    name: Some("A".to_string()),
                    x: [0.0, 0.0],
                    v: [0.0, -500.0],
                    m: EARTH_MASS,
                },
                BodyConfig {
                    name: Some("B".to_string()),
                    x: [405e6, 0.0],
                    v: [0.0, 500.0],
                    m: EARTH_MASS,
                },
            ],
        }
    }

    /// Reject configurations the integrator cannot start from.
    /// Degenerate geometry (coincident bodies) is deliberately let through.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.len() != 2 {
            return Err(ConfigError::BodyCount(self.bodies.len()));
        }

        for (index, body) in self.bodies.iter().enumerate() {
            if !(body.m.is_finite() && body.m > 0.0) {
                return Err(ConfigError::NonPositiveMass { index, mass: body.m });
            }
        }

        let p = &self.parameters;
        if !(p.dt.is_finite() && p.dt > 0.0) {
            return Err(ConfigError::NonPositiveTimeStep(p.dt));
        }
        if p.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }

        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::earth_moon()
    }
}
