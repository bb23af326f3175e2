//! Agent movement system: the per-tick pull of every agent's step loop.
//!
//! Each live agent takes up to `AGENT_STEPS_PER_TICK` interpolation
//! steps. Before every step it checks, in order: the lifecycle phase
//! (anything but Active stops all movement on the spot), the frozen
//! counter (a frozen agent spends the step thawing instead of moving),
//! and the alive flag. After each step it checks the strike radius
//! around the objective; striking deals fixed damage and kills the
//! agent. This strike path is the sole trigger of the game-over
//! transition, and the reset it requests runs at the next tick boundary
//! rather than inside the damage call.
//!
//! An agent that exhausts the path parks where it stands: still alive,
//! still targetable, with no effect on the objective.

use glam::IVec2;
use hecs::World;
use log::{debug, info, warn};

use bulwark_core::components::{AgentTag, PathFollower, Vitals};
use bulwark_core::constants::{AGENT_STEPS_PER_TICK, AGENT_STRIKE_DAMAGE, AGENT_STRIKE_RADIUS};
use bulwark_core::enums::GamePhase;
use bulwark_core::events::GameEvent;
use bulwark_core::path::Path;
use bulwark_core::types::distance;

use crate::objective::Objective;

/// Advance every agent for one tick.
pub fn run(
    world: &mut World,
    path: &Path,
    objective: &mut Objective,
    phase: &mut GamePhase,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, (tag, vitals, follower, pos)) in
        world.query_mut::<(&AgentTag, &mut Vitals, &mut PathFollower, &mut IVec2)>()
    {
        if !vitals.alive || follower.done {
            continue;
        }
        for _ in 0..AGENT_STEPS_PER_TICK {
            if *phase != GamePhase::Active {
                return;
            }
            if vitals.frozen_steps > 0 {
                vitals.frozen_steps -= 1;
                continue;
            }
            if !vitals.alive {
                break;
            }
            let Some(next) = next_step(follower, path) else {
                follower.done = true;
                debug!("agent {} walked off the end of the path", tag.id);
                break;
            };
            *pos = next;
            if distance(*pos, objective.position) < AGENT_STRIKE_RADIUS {
                vitals.alive = false;
                strike(objective, phase, events);
                break;
            }
        }
    }
}

/// The next interpolated position along the path, or `None` once the
/// final waypoint has been reached.
fn next_step(follower: &mut PathFollower, path: &Path) -> Option<IVec2> {
    while follower.leg < path.waypoint_count() {
        if follower.step > path.leg_steps(follower.leg) {
            follower.leg += 1;
            follower.step = 0;
            continue;
        }
        let position = path.position_along(follower.leg, follower.step);
        follower.step += 1;
        return Some(position);
    }
    None
}

/// Apply one strike to the objective. Damage landing after the game is
/// already over is discarded until the reset completes.
fn strike(objective: &mut Objective, phase: &mut GamePhase, events: &mut Vec<GameEvent>) {
    if *phase != GamePhase::Active {
        return;
    }
    let destroyed = objective.absorb(AGENT_STRIKE_DAMAGE);
    info!("objective hit, integrity now {}", objective.health);
    events.push(GameEvent::ObjectiveHit {
        remaining: objective.health,
    });
    if destroyed {
        warn!("objective destroyed, game over");
        *phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
    }
}
