//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the force law (`NewtonianGravity`)
//! - viewer settings (`ViewConfig`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig, ViewConfig};
use crate::configuration::error::ScenarioError;
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, NVec2, System};

/// Bevy resource representing a fully-initialized scenario
///
/// Built from a [`ScenarioConfig`]: engine settings, parameters, current
/// system state, the force law and the initial view settings
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: NewtonianGravity,
    pub view: ViewConfig,
}

impl Scenario {
    /// Validate `cfg` and build the runtime scenario
    ///
    /// Positions are converted from AU to meters and velocities from km/s
    /// to m/s
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        let p_cfg = cfg.parameters;
        if !(p_cfg.dt.is_finite() && p_cfg.dt > 0.0) {
            return Err(ScenarioError::BadTimeStep(p_cfg.dt));
        }
        if !(cfg.engine.tick_hz.is_finite() && cfg.engine.tick_hz > 0.0) {
            return Err(ScenarioError::BadTickRate(cfg.engine.tick_hz));
        }
        if cfg.bodies.is_empty() {
            return Err(ScenarioError::Empty);
        }

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            dt: p_cfg.dt,
            G: p_cfg.G,
            trail_len: p_cfg.trail_len,
        };

        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| build_body(bc, &parameters))
            .collect::<Result<Vec<Body>, ScenarioError>>()?;

        // At most one primary
        let mut primaries = bodies.iter().filter(|b| b.primary);
        if let (Some(first), Some(second)) = (primaries.next(), primaries.next()) {
            return Err(ScenarioError::MultiplePrimaries {
                first: first.name.clone(),
                second: second.name.clone(),
            });
        }

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            integrator: cfg.engine.integrator,
            tick_hz: cfg.engine.tick_hz,
        };

        let forces = NewtonianGravity { G: parameters.G };

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            forces,
            view: cfg.view,
        })
    }

    /// The built-in solar system
    pub fn solar_system() -> Result<Self, ScenarioError> {
        Self::build_scenario(ScenarioConfig::solar_system())
    }

    /// Advance every body by one step with the configured scheme
    pub fn step(&mut self) {
        integrator::step(&mut self.system, &self.forces, &self.parameters, &self.engine.integrator);
    }
}

fn build_body(bc: &BodyConfig, parameters: &Parameters) -> Result<Body, ScenarioError> {
    if bc.m.is_nan() || bc.m <= 0.0 {
        return Err(ScenarioError::NonPositiveMass {
            name: bc.name.clone(),
            m: bc.m,
        });
    }

    let x = vec2(&bc.name, "x", &bc.x)? * AU;
    let v = vec2(&bc.name, "v", &bc.v)? * 1000.0;

    Ok(Body::new(bc.name.clone(), x, v, bc.m, bc.period, parameters.dt, parameters.trail_len)
        .with_primary(bc.primary)
        .with_look(bc.radius, bc.color))
}

fn vec2(name: &str, field: &'static str, c: &[f64]) -> Result<NVec2, ScenarioError> {
    match c {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(ScenarioError::BadVector {
            name: name.to_string(),
            field,
            len: c.len(),
        }),
    }
}
