//! Defender targeting and firing system.
//!
//! Each defender fires at most once per tick, at the first live agent
//! within range in roster order (first match, not nearest). A defender
//! still cooling down, or with no qualifying target, does nothing and
//! keeps its last-fire timestamp unchanged.

use glam::IVec2;
use hecs::World;
use log::debug;

use bulwark_core::components::{AgentTag, Defender, FiringState, Projectile, Vitals};
use bulwark_core::constants::PROJECTILE_STEP_DIVISOR;
use bulwark_core::enums::DefenderKind;
use bulwark_core::types::distance;

/// Run targeting for all defenders.
pub fn run(world: &mut World, current_tick: u64) {
    // Copy-on-iterate roster snapshot, in world iteration order.
    let targets: Vec<IVec2> = world
        .query::<(&AgentTag, &Vitals, &IVec2)>()
        .iter()
        .filter(|(_, (_, vitals, _))| vitals.alive)
        .map(|(_, (_, _, pos))| *pos)
        .collect();
    if targets.is_empty() {
        return;
    }

    for (_entity, (defender, pos, firing)) in
        world.query_mut::<(&Defender, &IVec2, &mut FiringState)>()
    {
        if !cooldown_elapsed(defender, firing, current_tick) {
            continue;
        }
        let Some(target) = targets.iter().find(|t| distance(*pos, **t) <= defender.range) else {
            continue;
        };

        // Integer direction scaled down to a per-tick velocity.
        let velocity = (*target - *pos) / PROJECTILE_STEP_DIVISOR;
        firing.projectiles.push(Projectile {
            position: *pos,
            velocity,
            damage: defender.damage,
            freezing: defender.kind == DefenderKind::Freeze,
        });
        firing.last_fire_tick = Some(current_tick);
        debug!(
            "defender {} fired at ({}, {})",
            defender.id, target.x, target.y
        );
    }
}

fn cooldown_elapsed(defender: &Defender, firing: &FiringState, current_tick: u64) -> bool {
    match firing.last_fire_tick {
        Some(last) => current_tick.saturating_sub(last) >= defender.cooldown_ticks,
        None => true,
    }
}
