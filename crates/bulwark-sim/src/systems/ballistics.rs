//! Projectile update and collision system.
//!
//! For every defender, in order: advance each owned round by its
//! velocity, then test it against the live roster. A round is consumed
//! by its first hit, whether it damages or freezes, even against an
//! agent that is already frozen. Rounds that hit nothing survive to the
//! next tick. Dead agents stay in the roster until the cleanup pass.

use glam::IVec2;
use hecs::World;
use log::info;

use bulwark_core::components::{AgentTag, Defender, FiringState, Projectile, Vitals};
use bulwark_core::constants::{AGENT_FREEZE_STEPS, PROJECTILE_HIT_RADIUS};
use bulwark_core::events::GameEvent;
use bulwark_core::types::distance;

/// Advance and resolve every defender's rounds for one tick.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    let defenders: Vec<hecs::Entity> = world.query::<&Defender>().iter().map(|(e, _)| e).collect();

    for entity in defenders {
        // Take the rounds out so the agent roster can be walked freely.
        let mut rounds = match world.get::<&mut FiringState>(entity) {
            Ok(mut firing) => std::mem::take(&mut firing.projectiles),
            Err(_) => continue,
        };

        rounds.retain_mut(|round| {
            round.position += round.velocity;
            !resolve_hit(world, round, events)
        });

        if let Ok(mut firing) = world.get::<&mut FiringState>(entity) {
            firing.projectiles = rounds;
        }
    }
}

/// Test one round against every live agent. Applies the round's effect
/// to the first agent within the hit radius and reports the round spent.
fn resolve_hit(world: &mut World, round: &Projectile, events: &mut Vec<GameEvent>) -> bool {
    for (_entity, (tag, vitals, pos)) in world.query_mut::<(&AgentTag, &mut Vitals, &IVec2)>() {
        if !vitals.alive {
            continue;
        }
        if distance(round.position, *pos) >= PROJECTILE_HIT_RADIUS {
            continue;
        }
        if round.freezing {
            // Refreshes the full duration on an already-frozen agent.
            vitals.frozen_steps = AGENT_FREEZE_STEPS;
        } else {
            vitals.health = (vitals.health - round.damage).max(0);
            if vitals.health == 0 {
                vitals.alive = false;
                info!("agent {} destroyed at ({}, {})", tag.id, pos.x, pos.y);
                events.push(GameEvent::AgentDown {
                    id: tag.id,
                    position: *pos,
                });
            }
        }
        return true;
    }
    false
}
