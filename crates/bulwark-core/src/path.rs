//! The waypoint path every agent follows.
//!
//! A `Path` is an immutable ordered sequence of integer waypoints,
//! shared read-only by all agents and validated on construction. Agents
//! walk it one interpolation step at a time; a leg between consecutive
//! waypoints takes `max(|dx|, |dy|)` steps, so a single step never moves
//! more than one unit per axis.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures when constructing a [`Path`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("a path needs at least two waypoints, got {0}")]
    TooShort(usize),
    /// A zero-length leg would make the step interpolation divide by zero.
    #[error("waypoints {0} and {1} are identical")]
    DuplicateWaypoint(usize, usize),
}

/// Immutable ordered waypoint sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<IVec2>,
}

impl Path {
    /// Validate and build a path from raw waypoints.
    pub fn new(waypoints: Vec<IVec2>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooShort(waypoints.len()));
        }
        for i in 1..waypoints.len() {
            if waypoints[i] == waypoints[i - 1] {
                return Err(PathError::DuplicateWaypoint(i - 1, i));
            }
        }
        Ok(Self { waypoints })
    }

    /// The serpentine layout used by the default scenario: five
    /// horizontal sweeps working up the grid toward the objective corner.
    pub fn default_layout() -> Self {
        Self {
            waypoints: vec![
                IVec2::new(0, 500),
                IVec2::new(800, 500),
                IVec2::new(800, 400),
                IVec2::new(0, 400),
                IVec2::new(0, 300),
                IVec2::new(800, 300),
                IVec2::new(800, 200),
                IVec2::new(0, 200),
                IVec2::new(0, 100),
                IVec2::new(800, 100),
            ],
        }
    }

    pub fn waypoints(&self) -> &[IVec2] {
        &self.waypoints
    }

    /// Where agents spawn.
    pub fn start(&self) -> IVec2 {
        self.waypoints[0]
    }

    /// Number of waypoints (always at least two).
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Interpolation steps on the leg ending at waypoint `leg`.
    pub fn leg_steps(&self, leg: usize) -> i32 {
        let delta = self.waypoints[leg] - self.waypoints[leg - 1];
        delta.abs().max_element()
    }

    /// Position `step` steps into the leg ending at waypoint `leg`.
    /// Integer interpolation: `start + delta * step / steps`.
    pub fn position_along(&self, leg: usize, step: i32) -> IVec2 {
        let start = self.waypoints[leg - 1];
        let delta = self.waypoints[leg] - start;
        start + delta * step / self.leg_steps(leg)
    }
}
