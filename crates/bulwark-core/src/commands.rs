//! Commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so the
//! sender never races a tick in progress.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::DefenderKind;

/// All actions the presentation layer can request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Spawn one agent at the head of the path.
    SpawnAgent,
    /// Place a defender of the given kind at a grid position.
    PlaceDefender { kind: DefenderKind, position: IVec2 },
    /// Tear the world down and start a fresh game cycle.
    Reset,
}
