//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Defender variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenderKind {
    /// Fires damaging rounds on a short cooldown.
    Attack,
    /// Fires zero-damage freezing rounds on a longer cooldown.
    Freeze,
}

/// Top-level lifecycle state.
///
/// `Active` is the master run signal: every system checks it before
/// touching world state, and movement re-checks it between sub-steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    /// The objective was destroyed; a reset runs at the next tick boundary.
    GameOver,
    /// Teardown in progress: rosters are being cleared and state rebuilt.
    Resetting,
}
