//! Projectile flight system.
//!
//! Moves each projectile along its launch arc by elapsed flight time and
//! refreshes its orientation from the arc's facing policy. Degenerate arcs
//! report no facing; the projectile keeps its last orientation.

use hecs::World;

use rampart_core::components::{Projectile, ProjectileState};
use rampart_core::constants::DT;
use rampart_core::types::Position;

use rampart_ballistics::arc::ArcTrajectory;

/// Advance every projectile along its arc.
pub fn run(world: &mut World, current_tick: u64) {
    for (_entity, (_projectile, arc, state, pos)) in world.query_mut::<(
        &Projectile,
        &ArcTrajectory,
        &mut ProjectileState,
        &mut Position,
    )>() {
        let elapsed = current_tick.saturating_sub(state.launch_tick) as f64 * DT;
        let sample = arc.sample(elapsed);

        *pos = Position::from_dvec3(sample.position);
        state.progress = sample.t;

        if let Some(dir) = arc.facing_at(sample.t) {
            state.yaw = dir.x.atan2(dir.y).rem_euclid(std::f64::consts::TAU);
            state.pitch = dir.z.clamp(-1.0, 1.0).asin();
        }
    }
}
