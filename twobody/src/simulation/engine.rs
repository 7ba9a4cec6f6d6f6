//! High-level runtime engine settings
//!
//! Selects which Euler ordering is used when running a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub integrator: IntegratorConfig, // semi-implicit (default) or explicit euler
}
