//! Recorded positions of both bodies and the replay interface
//!
//! A `Trajectory` is filled once by the integrator, one point per body per
//! step, and then only read. `get_frame(i)` is everything a renderer needs.

use crate::simulation::states::{BodyRole, NVec2, System};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    primary: Vec<NVec2>,
    secondary: Vec<NVec2>,
}

/// One replay frame: current markers plus the trails leading up to them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    pub primary: NVec2,
    pub secondary: NVec2,
    pub primary_trail: &'a [NVec2],   // positions 0..i
    pub secondary_trail: &'a [NVec2], // positions 0..i
}

impl Trajectory {
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            primary: Vec::with_capacity(steps),
            secondary: Vec::with_capacity(steps),
        }
    }

    /// Append the current positions of both bodies
    pub fn record(&mut self, sys: &System) {
        self.primary.push(sys.primary.x);
        self.secondary.push(sys.secondary.x);
    }

    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    pub fn positions(&self, role: BodyRole) -> &[NVec2] {
        match role {
            BodyRole::Primary => &self.primary,
            BodyRole::Secondary => &self.secondary,
        }
    }

    /// Frame `i`: positions after step `i` and trails of the `i` earlier points.
    /// `None` past the end.
    pub fn get_frame(&self, i: usize) -> Option<Frame<'_>> {
        let primary = *self.primary.get(i)?;
        let secondary = *self.secondary.get(i)?;

        Some(Frame {
            primary,
            secondary,
            primary_trail: &self.primary[..i],
            secondary_trail: &self.secondary[..i],
        })
    }

    pub fn last(&self) -> Option<(NVec2, NVec2)> {
        Some((*self.primary.last()?, *self.secondary.last()?))
    }

    /// True when every recorded coordinate is finite
    pub fn is_finite(&self) -> bool {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}
