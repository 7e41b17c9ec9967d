//! Errors raised while turning a `ScenarioConfig` into a runnable scenario

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("scenario has no bodies")]
    Empty,

    #[error("body `{name}` has non-positive mass {m}")]
    NonPositiveMass { name: String, m: f64 },

    #[error("body `{name}` has a {field} vector of length {len}, expected 2")]
    BadVector { name: String, field: &'static str, len: usize },

    #[error("more than one primary body: `{first}` and `{second}`")]
    MultiplePrimaries { first: String, second: String },

    #[error("time step must be positive and finite, got {0}")]
    BadTimeStep(f64),

    #[error("tick rate must be positive and finite, got {0}")]
    BadTickRate(f64),
}
