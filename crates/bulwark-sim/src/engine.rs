//! Simulation engine: the core of the game.
//!
//! `GameWorld` owns the hecs ECS world together with the engine-level
//! state (objective, wave scheduler, lifecycle phase), processes
//! presentation commands, runs all systems, and produces
//! `WorldSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use glam::IVec2;
use hecs::World;
use log::info;

use bulwark_core::commands::Command;
use bulwark_core::enums::{DefenderKind, GamePhase};
use bulwark_core::events::GameEvent;
use bulwark_core::path::Path;
use bulwark_core::state::WorldSnapshot;
use bulwark_core::types::SimTime;

use crate::objective::Objective;
use crate::scenario::{ScenarioConfig, ScenarioError};
use crate::systems;
use crate::systems::wave_spawner::WaveScheduler;
use crate::world_setup;

/// The game world. Owns the ECS rosters and all engine state.
pub struct GameWorld {
    world: World,
    time: SimTime,
    phase: GamePhase,
    path: Path,
    objective: Objective,
    scheduler: WaveScheduler,
    config: ScenarioConfig,
    command_queue: VecDeque<Command>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    next_agent_id: u32,
    next_defender_id: u32,
}

impl GameWorld {
    /// Build a world from a validated scenario configuration.
    pub fn new(config: ScenarioConfig) -> Result<Self, ScenarioError> {
        config.validate()?;
        let path = Path::new(config.path.clone())?;
        let objective = Objective::new(config.objective_position, config.objective_health);
        let scheduler = WaveScheduler::new(config.wave_interval_ticks, config.initial_wave_size);

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            path,
            objective,
            scheduler,
            config,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            next_agent_id: 0,
            next_defender_id: 0,
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    ///
    /// A tick that finds the world in `GameOver` performs the deferred
    /// reset instead of running systems, so the reset never runs inside
    /// the damage call that requested it.
    pub fn tick(&mut self) -> WorldSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Active => {
                self.run_systems();
                self.time.advance();
            }
            GamePhase::GameOver | GamePhase::Resetting => self.reset_game(),
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.path,
            &self.objective,
            events,
        )
    }

    /// Spawn one agent at the head of the path. Returns after the
    /// roster mutation; the agent starts advancing on the next tick.
    pub fn spawn_agent(&mut self) -> hecs::Entity {
        world_setup::spawn_agent(&mut self.world, &self.path, &mut self.next_agent_id)
    }

    /// Place a defender. Returns after the roster mutation.
    pub fn place_defender(&mut self, kind: DefenderKind, position: IVec2) -> hecs::Entity {
        world_setup::spawn_defender(&mut self.world, kind, position, &mut self.next_defender_id)
    }

    /// Tear the world down and start a fresh cycle: stop everything,
    /// clear both rosters, reinstate the objective at full health, and
    /// rearm the wave scheduler at its initial batch size.
    ///
    /// Safe to call from command processing or from the lifecycle
    /// transition; it runs with exclusive access to the rosters either
    /// way.
    pub fn reset_game(&mut self) {
        self.phase = GamePhase::Resetting;
        self.world.clear();
        self.despawn_buffer.clear();
        self.objective = Objective::new(
            self.config.objective_position,
            self.config.objective_health,
        );
        self.time = SimTime::default();
        self.next_agent_id = 0;
        self.next_defender_id = 0;
        self.scheduler.reset(self.time.tick);
        self.phase = GamePhase::Active;
        info!(
            "world reset, objective integrity {}",
            self.objective.health
        );
        self.events.push(GameEvent::WorldReset);
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether the world is in its running state.
    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the objective.
    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Get a read-only reference to the shared path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mutable ECS access for tests that need to stage world state.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable scheduler access for tests that drive the launch gate.
    #[cfg(test)]
    pub(crate) fn scheduler_mut(&mut self) -> &mut WaveScheduler {
        &mut self.scheduler
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                Command::SpawnAgent => {
                    self.spawn_agent();
                }
                Command::PlaceDefender { kind, position } => {
                    self.place_defender(kind, position);
                }
                Command::Reset => self.reset_game(),
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.scheduler,
            &self.path,
            &mut self.next_agent_id,
            self.time.tick,
            &mut self.events,
        );
        // 2. Projectile movement and collisions
        systems::ballistics::run(&mut self.world, &mut self.events);
        // 3. Targeting and firing
        systems::targeting::run(&mut self.world, self.time.tick);
        // 4. Agent movement and objective strikes
        systems::movement::run(
            &mut self.world,
            &self.path,
            &mut self.objective,
            &mut self.phase,
            &mut self.events,
        );
        // 5. Roster cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
