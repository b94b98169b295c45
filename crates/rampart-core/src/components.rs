//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Tower turret state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerState {
    /// Stable tower identifier, assigned at setup.
    pub tower_id: u32,
    /// Base yaw in radians (0 = North, clockwise). Slews toward the
    /// firing bearing at a bounded rate.
    pub yaw: f64,
    /// Tick of the most recent shot, `None` before the first.
    pub last_shot_tick: Option<u64>,
    /// Current firing solution, cleared when no target is held.
    pub aim: Option<TurretAim>,
}

/// A solved firing solution held by a tower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TurretAim {
    /// Predicted meeting point of projectile and target.
    pub intercept_point: Position,
    /// Target position at the moment the solution was computed.
    pub target_position: Position,
    /// Projectile flight time to the intercept point (seconds).
    pub time_to_impact: f64,
    /// Bearing of the firing direction (radians, 0 = North).
    pub firing_yaw: f64,
    /// Elevation of the firing direction (radians, up positive).
    pub firing_pitch: f64,
}

/// Invader state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvaderState {
    /// Stable invader identifier, assigned at spawn.
    pub invader_id: u32,
    pub archetype: InvaderArchetype,
    pub phase: InvaderPhase,
    /// Remaining hit points.
    pub hp: i32,
}

/// Projectile state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileState {
    /// Tower that fired this projectile.
    pub tower_id: u32,
    /// Tick at which the projectile left the muzzle.
    pub launch_tick: u64,
    /// Damage dealt on impact.
    pub damage: i32,
    /// Facing yaw in radians (0 = North, clockwise).
    pub yaw: f64,
    /// Facing pitch in radians (up positive).
    pub pitch: f64,
    /// Parametric arc progress in [0, 1].
    pub progress: f64,
}

/// Marks an entity as a defensive tower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower;

/// Marks an entity as an invader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Invader;

/// Marks an entity as a tower projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

// Position and Velocity live in types.rs and double as ECS components.
