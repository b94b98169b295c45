//! Events emitted by the simulation for UI and logging feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Gameplay events surfaced through each tick's snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A scheduled wave has spawned.
    WaveLaunched {
        wave_index: usize,
        invader_count: usize,
    },
    /// A tower fired a projectile.
    ShotFired {
        tower_id: u32,
        bearing: f64,
        flight_secs: f64,
    },
    /// A projectile struck an invader.
    ProjectileHit {
        tower_id: u32,
        invader_id: u32,
        remaining_hp: i32,
    },
    /// A projectile finished its arc without striking anything.
    ProjectileExpired { tower_id: u32 },
    /// An invader was killed.
    InvaderSlain { invader_id: u32, tower_id: u32 },
    /// An invader reached the keep.
    InvaderBreached { invader_id: u32 },
    /// All waves resolved and the field is clear.
    MissionComplete {
        invaders_slain: u32,
        invaders_breached: u32,
    },
}
