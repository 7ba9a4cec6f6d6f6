use std::fmt;

/// Configuration rejected before the integration loop starts
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    BodyCount(usize),
    NonPositiveMass { index: usize, mass: f64 },
    NonPositiveTimeStep(f64),
    ZeroSteps,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BodyCount(n) => write!(f, "expected exactly 2 bodies, got {n}"),
            Self::NonPositiveMass { index, mass } => {
                write!(f, "body {index} has non-positive mass {mass}")
            }
            Self::NonPositiveTimeStep(dt) => write!(f, "time step must be positive, got {dt}"),
            Self::ZeroSteps => write!(f, "step count must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}
