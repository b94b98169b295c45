//! Target tracking data model — per-tower target selection and velocity
//! estimation state.
//!
//! Stored in `SimulationEngine`'s track map keyed by tower id, NOT as ECS
//! entities. Towers have no shared picture: each holds its own track.

use rampart_core::types::{Position, Velocity};

/// One tower's lock on an invader.
#[derive(Debug, Clone)]
pub struct TargetTrack {
    /// The hecs entity of the tracked invader.
    pub target: hecs::Entity,
    /// Target position at the last velocity sample.
    pub last_pos: Position,
    /// Simulation elapsed seconds at the last velocity sample.
    pub last_sample_secs: f64,
    /// Finite-difference velocity estimate. Zero until the second
    /// sample of a fresh track.
    pub estimated_vel: Velocity,
}

impl TargetTrack {
    /// Start a fresh track on `target`. The velocity estimate stays zero
    /// until the next sample.
    pub fn acquire(target: hecs::Entity, pos: Position, now_secs: f64) -> Self {
        Self {
            target,
            last_pos: pos,
            last_sample_secs: now_secs,
            estimated_vel: Velocity::default(),
        }
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub invaders_slain: u32,
    pub invaders_breached: u32,
    pub invaders_total: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
}
