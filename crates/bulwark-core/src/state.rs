//! World snapshot: the complete read-only view the presentation layer
//! samples after each tick.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{DefenderKind, GamePhase};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete visible world state produced by each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// The shared waypoint path, for drawing the route.
    pub path: Vec<IVec2>,
    pub objective: ObjectiveView,
    pub agents: Vec<AgentView>,
    pub defenders: Vec<DefenderView>,
    /// Events since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// The defended objective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectiveView {
    pub position: IVec2,
    pub health: i32,
}

/// A live agent on the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: u32,
    pub position: IVec2,
    pub health: i32,
    pub alive: bool,
    pub frozen: bool,
}

/// A placed defender and the rounds it currently owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenderView {
    pub id: u32,
    pub kind: DefenderKind,
    pub position: IVec2,
    pub range: f64,
    pub projectiles: Vec<ProjectileView>,
}

/// A round in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: IVec2,
    pub freezing: bool,
}
