//! Headless driver for the bulwark simulation.
//!
//! Spawns the game loop thread with the default scenario, places a pair
//! of defenders along the lower sweep of the path, and samples the
//! snapshot slot once per second for a status line, standing in for a
//! real presentation layer.

mod game_loop;
mod logging;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use glam::IVec2;
use log::info;

use bulwark_core::commands::Command;
use bulwark_core::enums::DefenderKind;
use bulwark_sim::scenario::ScenarioConfig;
use bulwark_sim::GameWorld;

use crate::game_loop::LoopCommand;

fn main() -> anyhow::Result<()> {
    logging::init(false);

    let engine = GameWorld::new(ScenarioConfig::default())?;
    let latest_snapshot = Arc::new(Mutex::new(None));
    let commands = game_loop::spawn_game_loop(engine, Arc::clone(&latest_snapshot));

    commands.send(LoopCommand::World(Command::PlaceDefender {
        kind: DefenderKind::Attack,
        position: IVec2::new(100, 450),
    }))?;
    commands.send(LoopCommand::World(Command::PlaceDefender {
        kind: DefenderKind::Freeze,
        position: IVec2::new(500, 450),
    }))?;

    for _ in 0..60 {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(snapshot) = latest_snapshot.lock().ok().and_then(|slot| slot.clone()) {
            info!(
                "tick {}: {} agents on the path, objective integrity {}",
                snapshot.time.tick,
                snapshot.agents.len(),
                snapshot.objective.health
            );
        }
    }

    commands.send(LoopCommand::Shutdown)?;
    Ok(())
}
