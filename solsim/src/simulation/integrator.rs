//! Fixed-step explicit Euler integrators for the solar system
//!
//! Both schemes update velocity first and then position with the new
//! velocity, then record the position in the trail and orbit histories.
//!
//! - `euler_sequential`: bodies are advanced one after another in list order,
//!   so each body sees predecessors that were already moved this step
//! - `euler_simultaneous`: every net force is taken from the pre-step state,
//!   then all bodies are advanced

use super::forces::{ForceLaw, NetForce};
use super::params::Parameters;
use super::states::{Body, System};
use crate::configuration::config::IntegratorConfig;

/// Advance the system by one step of `params.dt`, updating bodies in place
/// in list order
pub fn euler_sequential(sys: &mut System, forces: &impl ForceLaw, params: &Parameters) {
    let dt = params.dt;

    for i in 0..sys.bodies.len() {
        // Sum against the current state, which already holds this step's
        // updates for bodies 0..i
        let net = forces.net_force(i, &sys.bodies);
        apply(&mut sys.bodies[i], net, dt);
    }

    sys.t += dt;
    sys.steps += 1;
}

/// Advance the system by one step of `params.dt`, with every force computed
/// from the pre-step positions
pub fn euler_simultaneous(sys: &mut System, forces: &impl ForceLaw, params: &Parameters) {
    let dt = params.dt;

    let nets: Vec<NetForce> = (0..sys.bodies.len())
        .map(|i| forces.net_force(i, &sys.bodies))
        .collect();

    for (b, net) in sys.bodies.iter_mut().zip(nets) {
        apply(b, net, dt);
    }

    sys.t += dt;
    sys.steps += 1;
}

/// Dispatch to the configured update scheme
pub fn step(sys: &mut System, forces: &impl ForceLaw, params: &Parameters, scheme: &IntegratorConfig) {
    match scheme {
        IntegratorConfig::Sequential => euler_sequential(sys, forces, params),
        IntegratorConfig::Simultaneous => euler_simultaneous(sys, forces, params),
    }
}

fn apply(b: &mut Body, net: NetForce, dt: f64) {
    if let Some(d) = net.distance_to_primary {
        b.distance_to_primary = Some(d);
    }
    b.advance(net.force, dt);
}
