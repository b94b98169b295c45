//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the flank towers and invader entities with appropriate
//! component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rampart_core::components::*;
use rampart_core::constants::*;
use rampart_core::enums::*;
use rampart_core::types::{Position, Velocity};

/// Set up the initial mission world: the two flank towers.
/// Invaders are spawned by the wave scheduler system.
pub fn setup_mission(world: &mut World) {
    spawn_tower(world, 0, Position::new(-TOWER_FLANK_OFFSET, 0.0, 0.0));
    spawn_tower(world, 1, Position::new(TOWER_FLANK_OFFSET, 0.0, 0.0));
}

/// Spawn a single tower at a fixed emplacement, turret at rest facing North.
pub fn spawn_tower(world: &mut World, tower_id: u32, position: Position) -> hecs::Entity {
    world.spawn((
        Tower,
        position,
        TowerState {
            tower_id,
            yaw: 0.0,
            last_shot_tick: None,
            aim: None,
        },
    ))
}

/// Spawn a single invader near `bearing`, walking toward the keep.
/// Spawn range and a small bearing jitter come from the RNG so repeated
/// waves do not stack entities on one line.
pub fn spawn_invader(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_invader_id: &mut u32,
    archetype: InvaderArchetype,
    bearing: f64,
) -> hecs::Entity {
    let jitter: f64 =
        rng.gen_range(-INVADER_SPAWN_BEARING_JITTER..INVADER_SPAWN_BEARING_JITTER);
    let range: f64 = rng.gen_range(INVADER_SPAWN_RADIUS_MIN..INVADER_SPAWN_RADIUS_MAX);
    let bearing = (bearing + jitter).rem_euclid(std::f64::consts::TAU);
    spawn_invader_at(world, next_invader_id, archetype, bearing, range)
}

/// Spawn a single invader at an exact bearing and range from the keep.
pub fn spawn_invader_at(
    world: &mut World,
    next_invader_id: &mut u32,
    archetype: InvaderArchetype,
    bearing: f64,
    range: f64,
) -> hecs::Entity {
    let (speed, hp) = invader_archetype_params(archetype);

    // Position: bearing is measured from North (y-axis) clockwise to East (x-axis).
    let x = range * bearing.sin();
    let y = range * bearing.cos();
    let position = Position::new(x, y, 0.0);

    // Velocity: heading toward the keep at the origin.
    let to_keep_bearing = (bearing + std::f64::consts::PI) % std::f64::consts::TAU;
    let vx = speed * to_keep_bearing.sin();
    let vy = speed * to_keep_bearing.cos();
    let velocity = Velocity::new(vx, vy, 0.0);

    let invader_id = *next_invader_id;
    *next_invader_id += 1;

    world.spawn((
        Invader,
        position,
        velocity,
        InvaderState {
            invader_id,
            archetype,
            phase: InvaderPhase::Advancing,
            hp,
        },
    ))
}

/// Get kinematic parameters for an invader archetype: (speed units/s, hit points).
pub fn invader_archetype_params(archetype: InvaderArchetype) -> (f64, i32) {
    match archetype {
        InvaderArchetype::Walker => (WALKER_SPEED, WALKER_HP),
        InvaderArchetype::Sprinter => (SPRINTER_SPEED, SPRINTER_HP),
    }
}
