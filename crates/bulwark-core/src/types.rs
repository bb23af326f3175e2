//! Fundamental time and geometry helpers.
//!
//! All positions in the simulation are integer grid coordinates
//! (`glam::IVec2`); distances are Euclidean, computed in f64.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Euclidean distance between two grid positions.
pub fn distance(a: IVec2, b: IVec2) -> f64 {
    (b - a).as_dvec2().length()
}
