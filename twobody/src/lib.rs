pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyRole, System, NVec2};
pub use simulation::forces::{gravitational_force, NewtonianGravity, PairForce, StepForces};
pub use simulation::integrator::{explicit_euler, integrate, semi_implicit_euler, step};
pub use simulation::trajectory::{Frame, Trajectory};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, Preset, ScenarioConfig};
pub use configuration::error::ConfigError;

pub use visualization::replay2d::run_2d;

pub use benchmark::benchmark::{bench_convergence, bench_euler, convergence_study, ConvergenceRow};
