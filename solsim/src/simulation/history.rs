//! Bounded position histories used for drawing trails and orbits
//!
//! A `History` keeps the most recent positions of a body, oldest first.
//! Once the configured capacity is exceeded the oldest entry is dropped

use std::collections::VecDeque;

use super::states::NVec2;

/// Points reserved up front; long orbit histories grow on demand past this
const PREALLOCATED_POINTS: usize = 4096;

/// Fixed-capacity FIFO of positions (oldest first)
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    points: VecDeque<NVec2>, // recorded positions, oldest at the front
    capacity: usize, // maximum number of retained points
}

impl History {
    /// Create an empty history that retains at most `capacity` points
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.min(PREALLOCATED_POINTS)),
            capacity,
        }
    }

    /// Capacity needed to hold one orbital period sampled every `dt` seconds
    /// `floor(period_days / (dt / 86400))`
    pub fn orbit_capacity(period_days: f64, dt: f64) -> usize {
        let steps = period_days / (dt / super::params::SECONDS_PER_DAY);
        if steps.is_finite() && steps > 0.0 {
            steps.floor() as usize
        } else {
            0
        }
    }

    /// Append the newest point, dropping the oldest ones past capacity
    pub fn push(&mut self, point: NVec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    /// Most recently recorded point
    pub fn latest(&self) -> Option<&NVec2> {
        self.points.back()
    }
}
