//! Gravitational force between bodies
//!
//! Newton's law of universal gravitation, evaluated pairwise with no
//! softening term. Two bodies at the same position produce a non-finite
//! force; this is left unguarded and simply propagates.

use crate::simulation::states::{Body, NVec2};

/// Force exerted on a body by one other body, and the distance between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    pub force: NVec2, // newtons, pointing from the body toward the other
    pub distance: f64, // meters
}

/// Net force on one body from every other body in the set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetForce {
    pub force: NVec2,
    pub distance_to_primary: Option<f64>, // present if a primary was among the others
}

/// Pairwise force law applied by the integrators
pub trait ForceLaw {
    fn attraction(&self, body: &Body, other: &Body) -> Attraction;

    /// Sum the force on `bodies[i]` from every other body
    /// Self pairs are skipped by index
    fn net_force(&self, i: usize, bodies: &[Body]) -> NetForce {
        let body = &bodies[i];
        let mut force = NVec2::zeros();
        let mut distance_to_primary = None;

        for (j, other) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }

            let a = self.attraction(body, other);
            if other.primary {
                distance_to_primary = Some(a.distance);
            }
            force += a.force;
        }

        NetForce {
            force,
            distance_to_primary,
        }
    }
}

/// Newtonian gravity, F = G * m_a * m_b / r^2
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl ForceLaw for NewtonianGravity {
    fn attraction(&self, body: &Body, other: &Body) -> Attraction {
        // d points from body toward other, so the pull is along +d
        let d = other.x - body.x;
        let distance = d.norm();

        // Magnitude. Mass product first so a->b and b->a agree bit for bit
        let f = self.G * (body.m * other.m) / (distance * distance);

        // f * (cos theta, sin theta) with theta = atan2(dy, dx)
        let force = d * (f / distance);

        Attraction { force, distance }
    }
}
