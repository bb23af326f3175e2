//! Simulation systems, run in a fixed order each tick by the engine.

pub mod ballistics;
pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod targeting;
pub mod wave_spawner;
