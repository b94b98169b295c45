//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No mission loaded; the engine idles until a start command.
    #[default]
    Idle,
    /// Mission running, systems ticking.
    Active,
    /// Mission suspended; commands are still processed.
    Paused,
    /// All waves resolved, field clear.
    MissionComplete,
}

/// Tower firing doctrine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireDoctrine {
    /// Towers fire whenever solution, alignment, and cooldown allow.
    #[default]
    Free,
    /// Towers track targets but hold fire.
    Hold,
}

/// Invader archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvaderArchetype {
    /// Slow, durable ground unit.
    Walker,
    /// Fast, fragile ground unit.
    Sprinter,
}

/// Invader lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvaderPhase {
    /// Marching toward the keep.
    #[default]
    Advancing,
    /// Killed by a projectile, awaiting cleanup.
    Slain,
    /// Reached the keep, awaiting cleanup.
    Breached,
}

/// Built-in mission scenarios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// Three light waves from a single axis.
    #[default]
    Skirmish,
    /// Five heavier waves from multiple axes.
    Onslaught,
}
