//! Events surfaced to the presentation layer alongside each snapshot.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Notable happenings since the previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave launch completed with this many agents.
    WaveLaunched { size: u32 },
    /// A wave period fired while the previous launch still held the gate;
    /// the period was dropped, not queued.
    WaveSkipped,
    /// An agent was destroyed by defender fire.
    AgentDown { id: u32, position: IVec2 },
    /// The objective took a strike.
    ObjectiveHit { remaining: i32 },
    /// The objective was destroyed. Emitted once per game cycle.
    GameOver,
    /// The world finished resetting, either automatically after a game
    /// over or on request.
    WorldReset,
}
