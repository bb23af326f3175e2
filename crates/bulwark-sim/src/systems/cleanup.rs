//! Cleanup system: removes agents whose alive flag has been cleared.
//!
//! Removal is deliberately lazy and structural: every other pass this
//! tick saw a consistent roster, and the despawns land here in one
//! batch. Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use bulwark_core::components::{AgentTag, Vitals};

/// Despawn every dead agent.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_tag, vitals)) in world.query_mut::<(&AgentTag, &Vitals)>() {
        if !vitals.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
