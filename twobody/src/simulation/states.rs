//! Core state types for the two-body simulation.
//!
//! Defines the 2D `Body` record and the `System` holding exactly two of them
//! (primary and secondary) plus the elapsed simulation time `t`.
//!
//! Also carries the conserved-quantity diagnostics (momentum, barycenter,
//! energy) used by tests and the run summary.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Display role of a body, used by the renderer for marker size and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRole {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64,   // mass (kg), fixed for the run
}

impl Body {
    pub fn new(name: impl Into<String>, x: NVec2, v: NVec2, m: f64) -> Self {
        Self {
            name: name.into(),
            x,
            v,
            m,
        }
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub primary: Body,   // body A (Earth)
    pub secondary: Body, // body B (Moon)
    pub t: f64,          // elapsed time (s)
}

impl System {
    pub fn new(primary: Body, secondary: Body) -> Self {
        Self {
            primary,
            secondary,
            t: 0.0,
        }
    }

    /// Total linear momentum m_A v_A + m_B v_B
    pub fn momentum(&self) -> NVec2 {
        self.primary.momentum() + self.secondary.momentum()
    }

    /// Mass-weighted mean position
    pub fn barycenter(&self) -> NVec2 {
        let total = self.primary.m + self.secondary.m;
        (self.primary.m * self.primary.x + self.secondary.m * self.secondary.x) / total
    }

    /// Kinetic plus gravitational potential energy for constant `g`
    pub fn energy(&self, g: f64) -> f64 {
        let distance = (self.secondary.x - self.primary.x).norm();
        let potential = -g * self.primary.m * self.secondary.m / distance;
        self.primary.kinetic_energy() + self.secondary.kinetic_energy() + potential
    }

    /// True when every position and velocity component is finite
    pub fn is_finite(&self) -> bool {
        [self.primary.x, self.primary.v, self.secondary.x, self.secondary.v]
            .iter()
            .all(|vec| vec.iter().all(|c| c.is_finite()))
    }
}
