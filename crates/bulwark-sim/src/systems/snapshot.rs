//! Snapshot system: queries the ECS world and builds a complete
//! `WorldSnapshot`.
//!
//! This system is read-only; it never modifies the world. It runs last
//! in the tick, so the presentation layer always samples a state where
//! every defender and agent update has already landed.

use glam::IVec2;
use hecs::World;

use bulwark_core::components::{AgentTag, Defender, FiringState, Vitals};
use bulwark_core::enums::GamePhase;
use bulwark_core::events::GameEvent;
use bulwark_core::path::Path;
use bulwark_core::state::*;
use bulwark_core::types::SimTime;

use crate::objective::Objective;

/// Build a complete snapshot of the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    path: &Path,
    objective: &Objective,
    events: Vec<GameEvent>,
) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        phase,
        path: path.waypoints().to_vec(),
        objective: ObjectiveView {
            position: objective.position,
            health: objective.health,
        },
        agents: build_agents(world),
        defenders: build_defenders(world),
        events,
    }
}

fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&AgentTag, &Vitals, &IVec2)>()
        .iter()
        .map(|(_, (tag, vitals, pos))| AgentView {
            id: tag.id,
            position: *pos,
            health: vitals.health,
            alive: vitals.alive,
            frozen: vitals.is_frozen(),
        })
        .collect();

    agents.sort_by_key(|a| a.id);
    agents
}

fn build_defenders(world: &World) -> Vec<DefenderView> {
    let mut defenders: Vec<DefenderView> = world
        .query::<(&Defender, &IVec2, &FiringState)>()
        .iter()
        .map(|(_, (defender, pos, firing))| DefenderView {
            id: defender.id,
            kind: defender.kind,
            position: *pos,
            range: defender.range,
            projectiles: firing
                .projectiles
                .iter()
                .map(|round| ProjectileView {
                    position: round.position,
                    freezing: round.freezing,
                })
                .collect(),
        })
        .collect();

    defenders.sort_by_key(|d| d.id);
    defenders
}
