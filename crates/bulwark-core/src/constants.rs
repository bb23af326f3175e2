//! Simulation constants and tuning parameters.
//!
//! Timing is denominated in ticks and movement steps rather than wall
//! clock: one tick is 40 ms of simulated time, and an agent covers one
//! interpolation step per 10 ms, so four steps fit in a tick.

use glam::IVec2;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 25;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Agents ---

/// Starting health of a freshly spawned agent.
pub const AGENT_START_HEALTH: i32 = 100;

/// Movement interpolation steps an unfrozen agent takes per tick.
pub const AGENT_STEPS_PER_TICK: u32 = 4;

/// Distance to the objective at which an agent strikes it.
pub const AGENT_STRIKE_RADIUS: f64 = 100.0;

/// Damage dealt to the objective by one agent strike.
pub const AGENT_STRIKE_DAMAGE: i32 = 10;

/// Movement steps an agent sits out after a freeze hit (500 ms worth).
pub const AGENT_FREEZE_STEPS: u32 = 50;

// --- Objective ---

/// Starting health of the objective.
pub const OBJECTIVE_START_HEALTH: i32 = 100;

/// Default objective position on the grid.
pub const OBJECTIVE_POSITION: IVec2 = IVec2::new(750, 50);

// --- Defenders ---

/// Targeting range shared by both defender kinds.
pub const DEFENDER_RANGE: f64 = 200.0;

/// Damage per attack round.
pub const ATTACK_DAMAGE: i32 = 20;

/// Ticks between attack defender shots (1 s).
pub const ATTACK_COOLDOWN_TICKS: u64 = 25;

/// Ticks between freeze defender shots (2 s).
pub const FREEZE_COOLDOWN_TICKS: u64 = 50;

// --- Projectiles ---

/// Divisor turning the defender-to-target offset into a per-tick velocity.
pub const PROJECTILE_STEP_DIVISOR: i32 = 10;

/// Center-to-center distance below which a round hits an agent.
pub const PROJECTILE_HIT_RADIUS: f64 = 10.0;

// --- Waves ---

/// Ticks between wave launches (20 s).
pub const WAVE_INTERVAL_TICKS: u64 = 500;

/// Agents in the first wave; each successful launch adds one.
pub const INITIAL_WAVE_SIZE: u32 = 5;
