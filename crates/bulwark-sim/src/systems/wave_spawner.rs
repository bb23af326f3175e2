//! Wave spawning system: launches agent batches on a fixed period.
//!
//! The launch gate has try-lock semantics. A period that comes due while
//! a launch still holds the gate is logged and dropped outright; periods
//! are never queued and a skipped wave does not grow the batch size.

use hecs::World;
use log::{info, warn};

use bulwark_core::events::GameEvent;
use bulwark_core::path::Path;

use crate::world_setup;

/// Fixed-cadence scheduler for agent waves.
#[derive(Debug, Clone)]
pub struct WaveScheduler {
    interval_ticks: u64,
    initial_batch: u32,
    batch_size: u32,
    next_launch_tick: u64,
    launching: bool,
}

impl WaveScheduler {
    /// A fresh scheduler with the first wave due immediately.
    pub fn new(interval_ticks: u64, initial_batch: u32) -> Self {
        Self {
            interval_ticks,
            initial_batch,
            batch_size: initial_batch,
            next_launch_tick: 0,
            launching: false,
        }
    }

    /// Non-blocking gate acquisition; false while a launch is in flight.
    pub fn try_begin_launch(&mut self) -> bool {
        if self.launching {
            return false;
        }
        self.launching = true;
        true
    }

    /// Release the gate after a launch completes.
    pub fn finish_launch(&mut self) {
        self.launching = false;
    }

    /// Size of the next wave.
    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }

    /// Tick at which the next wave is due.
    pub fn next_launch_tick(&self) -> u64 {
        self.next_launch_tick
    }

    /// Halt and reinitialize: the batch size returns to its starting
    /// value and the next wave is due immediately, as on startup.
    pub fn reset(&mut self, now: u64) {
        self.batch_size = self.initial_batch;
        self.next_launch_tick = now;
        self.launching = false;
    }
}

/// Launch a wave if one is due.
pub fn run(
    world: &mut World,
    scheduler: &mut WaveScheduler,
    path: &Path,
    next_agent_id: &mut u32,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
) {
    if current_tick < scheduler.next_launch_tick {
        return;
    }
    // Fixed cadence: a skipped or late wave never catches up.
    scheduler.next_launch_tick = current_tick + scheduler.interval_ticks;

    if !scheduler.try_begin_launch() {
        warn!("previous wave still active, skipping the wave due at tick {current_tick}");
        events.push(GameEvent::WaveSkipped);
        return;
    }

    let size = scheduler.batch_size;
    info!("launching a wave of {size} agents");
    for _ in 0..size {
        world_setup::spawn_agent(world, path, next_agent_id);
    }
    scheduler.batch_size += 1;
    scheduler.finish_launch();
    events.push(GameEvent::WaveLaunched { size });
}
