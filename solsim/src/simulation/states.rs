//! Core state types for the solar system simulation
//!
//! - `Body`: one celestial body, its physical state, display attributes
//!   and the trail/orbit histories drawn behind it
//! - `System`: the ordered list of bodies plus simulation time `t`
//!
//! Positions are in meters, velocities in meters per second, masses in kg.

use nalgebra::Vector2;

use super::history::History;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // display label, not used by physics
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub primary: bool, // distances are measured to this body (the star)
    pub period: f64, // orbital period in days, sizes the orbit history
    pub radius: f64, // marker radius in pixels
    pub color: [u8; 3], // sRGB marker and trail color
    pub distance_to_primary: Option<f64>, // set on every force pass against the primary
    pub trail: History, // short recent path
    pub orbit: History, // one period worth of path
}

impl Body {
    /// Build a body with empty histories, the orbit sized from `period` and step `dt`
    pub fn new(name: impl Into<String>, x: NVec2, v: NVec2, m: f64, period: f64, dt: f64, trail_len: usize) -> Self {
        Self {
            name: name.into(),
            x,
            v,
            m,
            primary: false,
            period,
            radius: 1.0,
            color: [255, 255, 255],
            distance_to_primary: None,
            trail: History::new(trail_len),
            orbit: History::new(History::orbit_capacity(period, dt)),
        }
    }

    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn with_look(mut self, radius: f64, color: [u8; 3]) -> Self {
        self.radius = radius;
        self.color = color;
        self
    }

    /// Kick then drift by `dt` under `force`, and record the new position
    /// v += F * dt / m, x += v * dt
    pub fn advance(&mut self, force: NVec2, dt: f64) {
        self.v += force * dt / self.m;
        self.x += self.v * dt;

        self.trail.push(self.x);
        self.orbit.push(self.x);
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // bodies in update order
    pub t: f64, // time in seconds
    pub steps: u64, // completed integration passes
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            steps: 0,
        }
    }

    /// Index of the primary body, if any
    pub fn primary(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.primary)
    }

    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(Body::is_finite)
    }
}
