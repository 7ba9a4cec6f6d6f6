//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings of one run:
//! - gravitational constant `g`,
//! - fixed step size `dt`,
//! - number of steps to integrate

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64,       // gravitational constant
    pub dt: f64,      // step size (s)
    pub steps: usize, // number of steps, no early exit
}

impl Parameters {
    /// Total simulated span `dt * steps`
    pub fn span(&self) -> f64 {
        self.dt * self.steps as f64
    }
}
