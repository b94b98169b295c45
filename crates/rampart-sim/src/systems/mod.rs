//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components or engine-held maps.

pub mod cleanup;
pub mod fire_control;
pub mod flight;
pub mod impact;
pub mod movement;
pub mod snapshot;
pub mod targeting;
pub mod wave_spawner;
