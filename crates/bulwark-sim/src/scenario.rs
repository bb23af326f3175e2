//! Scenario configuration: battlefield layout and wave tuning.

use glam::IVec2;
use thiserror::Error;

use bulwark_core::constants::{
    INITIAL_WAVE_SIZE, OBJECTIVE_POSITION, OBJECTIVE_START_HEALTH, WAVE_INTERVAL_TICKS,
};
use bulwark_core::path::{Path, PathError};

/// Configuration for starting a new world.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Waypoints of the shared path, validated into a `Path` on startup.
    pub path: Vec<IVec2>,
    pub objective_position: IVec2,
    pub objective_health: i32,
    /// Agents in the first wave; each successful launch adds one.
    pub initial_wave_size: u32,
    pub wave_interval_ticks: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            path: Path::default_layout().waypoints().to_vec(),
            objective_position: OBJECTIVE_POSITION,
            objective_health: OBJECTIVE_START_HEALTH,
            initial_wave_size: INITIAL_WAVE_SIZE,
            wave_interval_ticks: WAVE_INTERVAL_TICKS,
        }
    }
}

/// Rejected scenario configurations.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("objective health must be positive, got {0}")]
    ObjectiveHealth(i32),
    #[error("wave interval must be at least one tick")]
    WaveInterval,
}

impl ScenarioConfig {
    /// Check the scalar parameters. The path is validated separately by
    /// `Path::new` when the world is built.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.objective_health <= 0 {
            return Err(ScenarioError::ObjectiveHealth(self.objective_health));
        }
        if self.wave_interval_ticks == 0 {
            return Err(ScenarioError::WaveInterval);
        }
        Ok(())
    }
}
