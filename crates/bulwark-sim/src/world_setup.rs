//! Entity spawn factories.
//!
//! Creates agent and defender entities with appropriate component
//! bundles. Agents always enter at the head of the shared path.

use glam::IVec2;
use hecs::World;

use bulwark_core::components::*;
use bulwark_core::constants::*;
use bulwark_core::enums::DefenderKind;
use bulwark_core::path::Path;

/// Spawn a single agent at the head of the path, at full health.
pub fn spawn_agent(world: &mut World, path: &Path, next_id: &mut u32) -> hecs::Entity {
    let id = *next_id;
    *next_id += 1;
    world.spawn((
        AgentTag { id },
        Vitals::new(AGENT_START_HEALTH),
        PathFollower::new(),
        path.start(),
    ))
}

/// Place a defender of the given kind at a grid position.
pub fn spawn_defender(
    world: &mut World,
    kind: DefenderKind,
    position: IVec2,
    next_id: &mut u32,
) -> hecs::Entity {
    let id = *next_id;
    *next_id += 1;
    let (damage, cooldown_ticks) = defender_kind_params(kind);
    world.spawn((
        Defender {
            id,
            kind,
            damage,
            range: DEFENDER_RANGE,
            cooldown_ticks,
        },
        position,
        FiringState::default(),
    ))
}

/// Stats for a defender kind: (damage per round, cooldown in ticks).
fn defender_kind_params(kind: DefenderKind) -> (i32, u64) {
    match kind {
        DefenderKind::Attack => (ATTACK_DAMAGE, ATTACK_COOLDOWN_TICKS),
        DefenderKind::Freeze => (0, FREEZE_COOLDOWN_TICKS),
    }
}
