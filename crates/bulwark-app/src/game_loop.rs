//! Game loop thread: runs the simulation at the fixed tick rate and
//! publishes snapshots for the presentation layer to poll.
//!
//! Commands arrive via an `mpsc` channel and are forwarded to the engine
//! at tick boundaries. The latest snapshot is stored in shared state so
//! the presentation layer can sample world state at its own rate.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use bulwark_core::commands::Command;
use bulwark_core::constants::TICK_RATE;
use bulwark_core::state::WorldSnapshot;
use bulwark_sim::GameWorld;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the presentation layer to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A world command to forward to the engine.
    World(Command),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Spawns the game loop in a new thread. The engine is built by the
/// caller (so configuration errors surface before any thread exists)
/// and moved in whole.
///
/// Returns the command sender for the presentation layer to use.
pub fn spawn_game_loop(
    engine: GameWorld,
    latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("bulwark-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: GameWorld,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<WorldSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::World(command)) => {
                    engine.queue_command(command);
                }
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles reset semantics internally)
        let snapshot = engine.tick();

        // 3. Store the latest snapshot for presentation polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: skip ahead to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_sim::scenario::ScenarioConfig;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::World(Command::SpawnAgent)).unwrap();
        tx.send(LoopCommand::World(Command::Reset)).unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::World(Command::SpawnAgent)
        ));
        assert!(matches!(commands[1], LoopCommand::World(Command::Reset)));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 25Hz = 40ms per tick
        let expected_nanos = 1_000_000_000u64 / 25;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let engine = GameWorld::new(ScenarioConfig::default()).unwrap();
        let latest_snapshot = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(engine, Arc::clone(&latest_snapshot));

        // The presentation side polls at its own rate; a snapshot must
        // appear well within a couple of seconds of real time.
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut published = false;
        while Instant::now() < deadline {
            if latest_snapshot.lock().unwrap().is_some() {
                published = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(published, "game loop never published a snapshot");

        tx.send(LoopCommand::Shutdown).unwrap();
        std::thread::sleep(Duration::from_millis(200));
        // The receiver is gone once the loop exits, so sends now fail.
        assert!(tx.send(LoopCommand::World(Command::SpawnAgent)).is_err());
    }
}
