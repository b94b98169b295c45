//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for any frontend.

pub mod engine;
pub mod scenario;
pub mod systems;
pub mod tracking;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use rampart_core as core;
