//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – update scheme and fixed tick rate
//! - [`ParametersConfig`] – step size and physical constants
//! - [`ViewConfig`]       – canvas size and zoom behaviour of the viewer
//! - [`BodyConfig`]       – initial state and look of each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Only `bodies` is required; every other section falls back to the values
//! of the built-in solar system.
//!
//! # YAML format
//! Positions are given in AU and velocities in km/s; they are converted to
//! meters and meters per second when the scenario is built.
//!
//! ```yaml
//! engine:
//!   integrator: "sequential"  # or "simultaneous"
//!   tick_hz: 120.0
//!
//! parameters:
//!   dt: 43200.0               # seconds per step
//!   G: 6.67428e-11
//!   trail_len: 140
//!
//! view:
//!   width: 1200.0
//!   height: 800.0
//!   au_pixels: 13.0           # pixels per AU at start
//!   zoom_factor: 1.01
//!
//! bodies:
//!   - name: "sun"
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 1.98892e30
//!     radius: 5.0
//!     color: [255, 255, 100]
//!     primary: true
//!   - name: "earth"
//!     x: [-1.0, 0.0]
//!     v: [0.0, 29.783]
//!     m: 5.9742e24
//!     period: 365.0
//!     radius: 1.0
//!     color: [100, 100, 255]
//! ```

use serde::Deserialize;

use crate::simulation::params::{DELTA_T, G, TRAIL_LEN};

/// Order in which bodies are advanced within one step
/// `integrator: "sequential"` or `integrator: "simultaneous"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "sequential")] // In place, list order. Later bodies see earlier bodies' new positions
    Sequential,

    #[serde(rename = "simultaneous")] // All forces from the pre-step snapshot, then all updates
    Simultaneous,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // update scheme
    pub tick_hz: f64, // physics steps per wall-clock second in the viewer
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::Sequential,
            tick_hz: 120.0,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64, // time step size in seconds
    pub G: f64, // gravitational constant
    pub trail_len: usize, // points kept in each body's trail
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: DELTA_T,
            G,
            trail_len: TRAIL_LEN,
        }
    }
}

/// Viewer settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewConfig {
    pub width: f32, // canvas width in logical pixels
    pub height: f32, // canvas height in logical pixels
    pub au_pixels: f64, // initial zoom: pixels per astronomical unit
    pub zoom_factor: f64, // scale multiplier per tick while a zoom key is held
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            au_pixels: 13.0,
            zoom_factor: 1.01,
        }
    }
}

fn default_period() -> f64 {
    1.0
}

fn default_radius() -> f64 {
    1.0
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // label drawn next to the body
    pub x: Vec<f64>, // initial position in AU
    pub v: Vec<f64>, // initial velocity in km/s
    pub m: f64, // mass in kg
    #[serde(default = "default_period")]
    pub period: f64, // orbital period in days, sizes the orbit history
    #[serde(default = "default_radius")]
    pub radius: f64, // marker radius in pixels
    #[serde(default = "default_color")]
    pub color: [u8; 3], // sRGB color
    #[serde(default)]
    pub primary: bool, // the star other distances are measured to
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // update scheme and tick rate
    #[serde(default)]
    pub parameters: ParametersConfig, // step size and constants
    #[serde(default)]
    pub view: ViewConfig, // viewer canvas and zoom
    pub bodies: Vec<BodyConfig>, // initial state of every body, in update order
}

impl ScenarioConfig {
    /// The built-in solar system: the sun, eight planets and Halley's comet
    pub fn solar_system() -> Self {
        const YELLOW: [u8; 3] = [255, 255, 100];
        const BLUE: [u8; 3] = [100, 100, 255];
        const RED: [u8; 3] = [255, 100, 100];
        const MERCURY: [u8; 3] = [150, 230, 150];
        const WHITE: [u8; 3] = [255, 255, 255];

        let body = |name: &str, x: f64, vy: f64, m: f64, period: f64, radius: f64, color: [u8; 3]| BodyConfig {
            name: name.to_string(),
            x: vec![x, 0.0],
            v: vec![0.0, vy],
            m,
            period,
            radius,
            color,
            primary: false,
        };

        let mut sun = body("sun", 0.0, 0.0, 1.98892e30, 1.0, 5.0, YELLOW);
        sun.primary = true;

        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            view: ViewConfig::default(),
            bodies: vec![
                sun,
                body("mercury", 0.387, -47.4, 3.3e23, 88.0, 1.0, MERCURY),
                body("venus", 0.723, -35.02, 4.8685e24, 255.0, 1.0, WHITE),
                body("earth", -1.0, 29.783, 5.9742e24, 365.0, 1.0, BLUE),
                body("mars", -1.524, 24.077, 6.36e23, 687.0, 1.0, RED),
                body("jupiter", 5.2, -13.0697, 1.898e27, 4333.0, 4.0, WHITE),
                body("saturn", -9.5, 9.68, 5.68319e26, 10759.0, 3.0, WHITE),
                body("uranus", -19.8, 6.81, 8.68103e25, 30687.0, 3.0, WHITE),
                body("neptune", 30.0, -5.45, 1.024e26, 60190.0, 3.0, BLUE),
                body("haley", 0.59, 54.55, 2.2e14, 27700.0, 1.0, WHITE),
            ],
        }
    }
}
