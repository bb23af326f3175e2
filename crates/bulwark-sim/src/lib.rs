//! Simulation engine for the bulwark path-defense game.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces `WorldSnapshot`s for the presentation layer.

pub mod engine;
pub mod objective;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use bulwark_core as core;
pub use engine::GameWorld;
