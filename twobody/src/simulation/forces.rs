//! Force contributors for the two-body engine
//!
//! Defines the `PairForce` trait and direct Newtonian gravity without
//! softening. Coincident bodies are not guarded against: the force comes out
//! non-finite and is left to propagate through the run.

use crate::simulation::states::{Body, NVec2, System};

/// Forces applied to both bodies during one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepForces {
    pub on_primary: NVec2,
    pub on_secondary: NVec2,
}

/// Trait for a force law acting between the two bodies of a [`System`]
pub trait PairForce {
    /// Force exerted on `body` by `other`
    fn force_on(&self, body: &Body, other: &Body) -> NVec2;

    /// Force on the primary from the secondary, with the secondary receiving
    /// the exact negation (Newton's third law)
    fn pair_forces(&self, sys: &System) -> StepForces {
        let on_primary = self.force_on(&sys.primary, &sys.secondary);
        StepForces {
            on_primary,
            on_secondary: -on_primary,
        }
    }
}

/// Inverse-square attraction on body 1 directed toward body 2
///
/// `G * m1 * m2 / |r|^2 * r / |r|` with `r = x2 - x1`. Requires `x1 != x2`.
pub fn gravitational_force(x1: NVec2, x2: NVec2, m1: f64, m2: f64, g: f64) -> NVec2 {
    // r points from body 1 to body 2, so body 1 is pulled along +r
    let r = x2 - x1;
    let distance = r.norm();

    // zero distance gives 0/0 here, NaN on purpose
    let direction = r / distance;

    g * m1 * m2 / (distance * distance) * direction
}

/// 2D Newtonian gravity between point masses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl PairForce for NewtonianGravity {
    fn force_on(&self, body: &Body, other: &Body) -> NVec2 {
        gravitational_force(body.x, other.x, body.m, other.m, self.g)
    }
}
