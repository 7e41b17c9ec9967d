//! High-level runtime engine settings
//!
//! Selects the update scheme and the fixed tick rate used when
//! running a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // sequential or simultaneous
    pub tick_hz: f64, // physics steps per second in the viewer
}
