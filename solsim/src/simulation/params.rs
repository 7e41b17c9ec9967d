//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size `dt` (seconds),
//! - gravitational constant `G`,
//! - trail history length

/// Astronomical unit in meters
pub const AU: f64 = 149.6e6 * 1000.0;

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67428e-11;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Default step: half a day
pub const DELTA_T: f64 = SECONDS_PER_DAY / 2.0;

/// Trail points kept per body (70 days at the default step)
pub const TRAIL_LEN: usize = 140;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size in seconds
    pub G: f64, // gravitational constant
    pub trail_len: usize, // trail history capacity
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DELTA_T,
            G,
            trail_len: TRAIL_LEN,
        }
    }
}
