//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::{HashMap, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::info;

use rampart_core::commands::PlayerCommand;
use rampart_core::components::{Invader, Projectile};
use rampart_core::constants::{
    MAX_TIME_SCALE, PROJECTILE_SPEED, PROJECTILE_SPEED_SCALE, TOWER_FIRE_INTERVAL_SECS,
    TOWER_RANGE,
};
use rampart_core::enums::{FireDoctrine, GamePhase, ScenarioId};
use rampart_core::events::GameEvent;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::SimTime;

use crate::scenario;
use crate::systems;
use crate::systems::wave_spawner::WaveSchedule;
use crate::tracking::{ScoreState, TargetTrack};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Projectile speed knob. World units per second is this value times
    /// `PROJECTILE_SPEED_SCALE`.
    pub projectile_speed: f64,
    /// Minimum seconds between shots from a single tower.
    pub fire_interval_secs: f64,
    /// Maximum engagement range in world units.
    pub tower_range: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            projectile_speed: PROJECTILE_SPEED,
            fire_interval_secs: TOWER_FIRE_INTERVAL_SECS,
            tower_range: TOWER_RANGE,
        }
    }
}

impl SimConfig {
    /// Check every tunable for sanity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.projectile_speed.is_finite() || self.projectile_speed <= 0.0 {
            return Err(ConfigError::InvalidProjectileSpeed(self.projectile_speed));
        }
        if !self.fire_interval_secs.is_finite() || self.fire_interval_secs <= 0.0 {
            return Err(ConfigError::InvalidFireInterval(self.fire_interval_secs));
        }
        if !self.tower_range.is_finite() || self.tower_range <= 0.0 {
            return Err(ConfigError::InvalidTowerRange(self.tower_range));
        }
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(ConfigError::InvalidTimeScale(self.time_scale));
        }
        Ok(())
    }

    /// Projectile speed in world units per second.
    pub fn effective_speed(&self) -> f64 {
        self.projectile_speed * PROJECTILE_SPEED_SCALE
    }
}

/// Reasons a [`SimConfig`] is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("projectile speed must be finite and positive, got {0}")]
    InvalidProjectileSpeed(f64),
    #[error("fire interval must be finite and positive, got {0}")]
    InvalidFireInterval(f64),
    #[error("tower range must be finite and positive, got {0}")]
    InvalidTowerRange(f64),
    #[error("time scale must be finite and non-negative, got {0}")]
    InvalidTimeScale(f64),
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    doctrine: FireDoctrine,
    scenario: Option<ScenarioId>,
    time_scale: f64,
    config: SimConfig,
    rng: ChaCha8Rng,
    next_invader_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    tracks: HashMap<u32, TargetTrack>,
    wave_schedule: WaveSchedule,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            doctrine: FireDoctrine::default(),
            scenario: None,
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            next_invader_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            tracks: HashMap::new(),
            wave_schedule: WaveSchedule::default(),
            score: ScoreState::default(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.doctrine,
            self.scenario,
            &self.config,
            events,
            &self.score,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Reset into an active mission with no scheduled waves (for tests that
    /// spawn their own invaders).
    #[cfg(test)]
    pub fn start_empty_mission(&mut self) {
        self.world.clear();
        self.tracks.clear();
        world_setup::setup_mission(&mut self.world);
        self.wave_schedule = WaveSchedule::default();
        self.scenario = Some(ScenarioId::Skirmish);
        self.score = ScoreState::default();
        self.next_invader_id = 0;
        self.phase = GamePhase::Active;
        self.time = SimTime::default();
    }

    /// Spawn one invader at an exact bearing and range (for tests).
    #[cfg(test)]
    pub fn spawn_test_invader(
        &mut self,
        archetype: rampart_core::enums::InvaderArchetype,
        bearing: f64,
        range: f64,
    ) -> hecs::Entity {
        self.score.invaders_total += 1;
        world_setup::spawn_invader_at(
            &mut self.world,
            &mut self.next_invader_id,
            archetype,
            bearing,
            range,
        )
    }

    /// Remove every invader from the world (for tests).
    #[cfg(test)]
    pub fn despawn_all_invaders(&mut self) {
        let doomed: Vec<hecs::Entity> = {
            let mut query = self.world.query::<&Invader>();
            query.iter().map(|(entity, _)| entity).collect()
        };
        for entity in doomed {
            let _ = self.world.despawn(entity);
        }
        self.tracks.clear();
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMission { scenario } => {
                if matches!(self.phase, GamePhase::Idle | GamePhase::MissionComplete) {
                    self.world.clear();
                    self.tracks.clear();
                    world_setup::setup_mission(&mut self.world);
                    self.wave_schedule = scenario::build_schedule(scenario);
                    self.score = ScoreState {
                        invaders_total: self.wave_schedule.total_invaders(),
                        ..ScoreState::default()
                    };
                    self.next_invader_id = 0;
                    self.scenario = Some(scenario);
                    self.phase = GamePhase::Active;
                    self.time = SimTime::default();
                    info!("mission started: {:?}", scenario);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ReturnToIdle => {
                if self.phase == GamePhase::MissionComplete {
                    self.world.clear();
                    self.tracks.clear();
                    self.wave_schedule = WaveSchedule::default();
                    self.scenario = None;
                    self.phase = GamePhase::Idle;
                }
            }
            PlayerCommand::SetDoctrine { mode } => {
                self.doctrine = mode;
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Scheduled wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave_schedule,
            &mut self.next_invader_id,
            self.time.tick,
            &mut self.events,
        );
        // 2. Invader advance + breach detection
        systems::movement::run(&mut self.world, &mut self.events, &mut self.score);
        // 3. Target selection + velocity estimation
        systems::targeting::run(
            &self.world,
            &mut self.tracks,
            self.time.elapsed_secs,
            self.config.tower_range,
        );
        // 4. Turret slew, intercept solving, firing
        systems::fire_control::run(
            &mut self.world,
            &self.tracks,
            &self.config,
            self.doctrine,
            self.time.tick,
            &mut self.events,
            &mut self.score,
        );
        // 5. Projectile flight along launch arcs
        systems::flight::run(&mut self.world, self.time.tick);
        // 6. Impact resolution + damage
        systems::impact::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
        );
        // 7. Cleanup (slain, breached)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        self.check_mission_complete();
    }

    /// Flip to `MissionComplete` once every wave has spawned and the field
    /// is clear of invaders and projectiles.
    fn check_mission_complete(&mut self) {
        if self.phase != GamePhase::Active || !self.wave_schedule.all_spawned() {
            return;
        }
        let invaders_left = {
            let mut query = self.world.query::<&Invader>();
            query.iter().count()
        };
        let projectiles_left = {
            let mut query = self.world.query::<&Projectile>();
            query.iter().count()
        };
        if invaders_left == 0 && projectiles_left == 0 {
            self.phase = GamePhase::MissionComplete;
            self.events.push(GameEvent::MissionComplete {
                invaders_slain: self.score.invaders_slain,
                invaders_breached: self.score.invaders_breached,
            });
            info!(
                "mission complete: {} slain, {} breached",
                self.score.invaders_slain, self.score.invaders_breached
            );
        }
    }
}
