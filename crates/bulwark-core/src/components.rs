//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic; logic lives in
//! the sim crate's systems.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::DefenderKind;

/// Marks an entity as a hostile agent and carries its roster id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgentTag {
    pub id: u32,
}

/// Mutable agent state written by defender passes and read by movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vitals {
    pub health: i32,
    /// Cleared exactly once, by whichever pass kills the agent first.
    pub alive: bool,
    /// Movement steps left to sit out after a freeze hit. Zero = thawed.
    pub frozen_steps: u32,
}

impl Vitals {
    pub fn new(health: i32) -> Self {
        Self {
            health,
            alive: true,
            frozen_steps: 0,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen_steps > 0
    }
}

/// Progress along the shared path.
///
/// `leg` indexes the waypoint being walked toward; `step` counts
/// interpolation steps taken into that leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFollower {
    pub leg: usize,
    pub step: i32,
    /// Set when the agent has exhausted the path; it parks where it is.
    pub done: bool,
}

impl PathFollower {
    pub fn new() -> Self {
        Self {
            leg: 1,
            step: 0,
            done: false,
        }
    }
}

impl Default for PathFollower {
    fn default() -> Self {
        Self::new()
    }
}

/// Stationary defender stats. Immutable after placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defender {
    pub id: u32,
    pub kind: DefenderKind,
    pub damage: i32,
    pub range: f64,
    pub cooldown_ticks: u64,
}

/// The mutable half of a defender: the rounds it owns and its last shot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FiringState {
    /// Tick of the most recent shot; `None` until the first one.
    pub last_fire_tick: Option<u64>,
    pub projectiles: Vec<Projectile>,
}

/// A fired round. Owned by the defender's [`FiringState`], never shared
/// and never an entity of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub position: IVec2,
    /// Displacement applied once per tick.
    pub velocity: IVec2,
    pub damage: i32,
    pub freezing: bool,
}
