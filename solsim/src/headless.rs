//! Windowless runs: advance a scenario a fixed number of steps and log the
//! resulting state of every body

use bevy::log::{debug, info, warn};

use crate::simulation::params::{AU, SECONDS_PER_DAY};
use crate::simulation::scenario::Scenario;

pub fn run_headless(scenario: &mut Scenario, steps: u64) {
    info!(
        "headless: {} bodies, {} steps of {} s ({:?})",
        scenario.system.bodies.len(),
        steps,
        scenario.parameters.dt,
        scenario.engine.integrator,
    );

    let mut diverged = false;
    for _ in 0..steps {
        scenario.step();

        if !diverged && !scenario.system.is_finite() {
            diverged = true;
            warn!("simulation state became non-finite after {} steps", scenario.system.steps);
        }
    }

    info!("t = {:.1} days", scenario.system.t / SECONDS_PER_DAY);
    for b in &scenario.system.bodies {
        let distance = b
            .distance_to_primary
            .map(|d| format!("{:.4} AU", d / AU))
            .unwrap_or_else(|| "-".to_string());

        info!(
            "{:>8}: x = ({:+.4}, {:+.4}) AU, |v| = {:.3} km/s, r = {}",
            b.name,
            b.x.x / AU,
            b.x.y / AU,
            b.v.norm() / 1000.0,
            distance,
        );
        debug!("{:>8}: trail {} / {}, orbit {} / {}", b.name, b.trail.len(), b.trail.capacity(), b.orbit.len(), b.orbit.capacity());
    }
}
