//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub doctrine: FireDoctrine,
    pub scenario: Option<ScenarioId>,
    pub towers: Vec<TowerView>,
    pub invaders: Vec<InvaderView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

/// Tower status for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub tower_id: u32,
    pub position: Position,
    /// Base yaw (radians, 0 = North).
    pub yaw: f64,
    /// Seconds until the tower may fire again (0 when ready).
    pub cooldown_secs: f64,
    /// Current firing solution, if one is held.
    pub aim: Option<AimView>,
}

/// Firing solution for display (intercept marker and firing ray).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AimView {
    pub intercept_point: Position,
    pub target_position: Position,
    pub time_to_impact: f64,
    pub firing_yaw: f64,
    pub firing_pitch: f64,
}

/// Invader status for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvaderView {
    pub invader_id: u32,
    pub archetype: InvaderArchetype,
    pub position: Position,
    pub hp: i32,
    /// Speed (units/s).
    pub speed: f64,
    /// Heading (radians, 0 = North).
    pub heading: f64,
    /// Range to the keep (world units).
    pub range_to_keep: f64,
}

/// Projectile status for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub tower_id: u32,
    /// Tick at which the projectile was fired.
    pub launch_tick: u64,
    pub position: Position,
    /// Facing yaw (radians, 0 = North).
    pub yaw: f64,
    /// Facing pitch (radians, up positive).
    pub pitch: f64,
    /// Parametric arc progress in [0, 1].
    pub progress: f64,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub invaders_slain: u32,
    pub invaders_breached: u32,
    pub invaders_total: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    /// True while no invader has breached the keep.
    pub keep_intact: bool,
    pub mission_time_secs: f64,
}
