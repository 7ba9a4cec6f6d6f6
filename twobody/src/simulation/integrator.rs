//! Fixed-step first-order time integrators for the two-body system
//!
//! Provides semi-implicit (symplectic) Euler, the default, and explicit
//! Euler, both driven by a `PairForce` and `Parameters`. Neither checks for
//! non-finite state: a degenerate step poisons everything after it.

use log::{debug, warn};

use super::forces::{PairForce, StepForces};
use super::params::Parameters;
use super::states::System;
use super::trajectory::Trajectory;
use crate::configuration::config::IntegratorConfig;

/// Advance the system by one step using semi-implicit Euler
/// Velocities are kicked by the force at the current positions, then
/// positions drift with the new velocities. Updates `sys.t` in place.
pub fn semi_implicit_euler(sys: &mut System, force: &impl PairForce, params: &Parameters) -> StepForces {
    let dt = params.dt;

    // F_A from current positions, F_B = -F_A
    let forces = force.pair_forces(sys);

    // Kick: v_n+1 = v_n + (F_n / m) * dt
    let v_a = sys.primary.v + forces.on_primary / sys.primary.m * dt;
    let v_b = sys.secondary.v + forces.on_secondary / sys.secondary.m * dt;

    // Drift: x_n+1 = x_n + v_n+1 * dt
    let x_a = sys.primary.x + v_a * dt;
    let x_b = sys.secondary.x + v_b * dt;

    // Commit both bodies together
    sys.primary.v = v_a;
    sys.secondary.v = v_b;
    sys.primary.x = x_a;
    sys.secondary.x = x_b;
    sys.t += dt;

    forces
}

/// Advance the system by one step using explicit Euler
/// Positions drift with the old velocities and velocities are kicked by the
/// force at the old positions. Updates `sys.t` in place.
pub fn explicit_euler(sys: &mut System, force: &impl PairForce, params: &Parameters) -> StepForces {
    let dt = params.dt;

    let forces = force.pair_forces(sys);

    // x_n+1 = x_n + v_n * dt
    let x_a = sys.primary.x + sys.primary.v * dt;
    let x_b = sys.secondary.x + sys.secondary.v * dt;

    // v_n+1 = v_n + (F_n / m) * dt
    let v_a = sys.primary.v + forces.on_primary / sys.primary.m * dt;
    let v_b = sys.secondary.v + forces.on_secondary / sys.secondary.m * dt;

    sys.primary.x = x_a;
    sys.secondary.x = x_b;
    sys.primary.v = v_a;
    sys.secondary.v = v_b;
    sys.t += dt;

    forces
}

/// One step with the selected ordering
pub fn step(sys: &mut System, force: &impl PairForce, params: &Parameters, integrator: IntegratorConfig) -> StepForces {
    match integrator {
        IntegratorConfig::SemiImplicitEuler => semi_implicit_euler(sys, force, params),
        IntegratorConfig::ExplicitEuler => explicit_euler(sys, force, params),
    }
}

/// Run exactly `params.steps` steps, recording both positions after each one
pub fn integrate(sys: &mut System, force: &impl PairForce, params: &Parameters, integrator: IntegratorConfig) -> Trajectory {
    debug!(
        "integrate: {:?}, dt = {} s, steps = {}",
        integrator, params.dt, params.steps
    );

    let mut trajectory = Trajectory::with_capacity(params.steps);
    for _ in 0..params.steps {
        step(sys, force, params, integrator);
        trajectory.record(sys);
    }

    if !trajectory.is_finite() {
        warn!("integrate: trajectory contains non-finite positions (coincident bodies or overflow)");
    }

    trajectory
}
