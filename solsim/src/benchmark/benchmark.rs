use std::time::Instant;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::step;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, NVec2, System};

/// A primary with `n - 1` light bodies on circular orbits spread over 1..40 AU
/// Deterministic, no rand needed
fn ring_system(n: usize, params: &Parameters) -> System {
    let sun_mass = 1.98892e30;
    let mut bodies = Vec::with_capacity(n);

    bodies.push(
        Body::new("sun", NVec2::zeros(), NVec2::zeros(), sun_mass, 1.0, params.dt, params.trail_len)
            .with_primary(true),
    );

    for i in 1..n {
        let i_f = i as f64;
        let r = (1.0 + 39.0 * (i_f * 0.37).sin().abs()) * AU;
        let phase = i_f * 0.61;

        let x = NVec2::new(phase.cos(), phase.sin()) * r;
        let speed = (params.G * sun_mass / r).sqrt();
        let v = NVec2::new(-phase.sin(), phase.cos()) * speed;

        bodies.push(Body::new(format!("b{i}"), x, v, 1.0e23, 365.0, params.dt, params.trail_len));
    }

    System::new(bodies)
}

/// Time full integration passes for both update schemes over growing body counts
pub fn bench_step() {
    let ns = [10, 50, 100, 200, 400, 800];
    let steps = 100; // passes per measurement

    let params = Parameters::default();
    let forces = NewtonianGravity { G: params.G };

    for n in ns {
        let template = ring_system(n, &params);

        let mut timings = [0.0; 2];
        for (slot, scheme) in [IntegratorConfig::Sequential, IntegratorConfig::Simultaneous].iter().enumerate() {
            let mut sys = template.clone();

            // Warm up
            step(&mut sys, &forces, &params, scheme);

            let t0 = Instant::now();
            for _ in 0..steps {
                step(&mut sys, &forces, &params, scheme);
            }
            timings[slot] = t0.elapsed().as_secs_f64() / steps as f64;
        }

        println!(
            "N = {n:5}, sequential = {:10.6} ms/step, simultaneous = {:10.6} ms/step",
            timings[0] * 1000.0,
            timings[1] * 1000.0,
        );
    }
}
