//! Player commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Mission control ---
    /// Start a new mission with the given scenario.
    StartMission { scenario: ScenarioId },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Return to idle from mission complete.
    ReturnToIdle,

    // --- Doctrine ---
    /// Set the tower firing doctrine.
    SetDoctrine { mode: FireDoctrine },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },
}
